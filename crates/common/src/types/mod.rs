use serde::Serialize;

/// Liveness payload returned by `GET /health`.
#[derive(Serialize, Debug, Clone, Copy)]
pub struct Health {
    pub status: &'static str,
}

impl Health {
    pub fn ok() -> Self { Self { status: "ok" } }
}

/// Fixed acknowledgement body, e.g. `{"status": "Deleted!"}`.
#[derive(Serialize, Debug, Clone, Copy)]
pub struct StatusMessage {
    pub status: &'static str,
}

impl StatusMessage {
    pub fn deleted() -> Self { Self { status: "Deleted!" } }
}
