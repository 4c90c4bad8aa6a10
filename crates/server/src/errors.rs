use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Error response rendered as `{"error": {"message": ..., "status": ...}}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn not_found(message: impl Into<String>) -> Self { Self::new(StatusCode::NOT_FOUND, message) }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::BadRequest(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ServiceError::Db(msg) => Self::new(StatusCode::INTERNAL_SERVER_ERROR, format!("database error: {}", msg)),
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = self.status.as_u16(), error = %self.message, "request failed");
        }
        let body = serde_json::json!({
            "error": { "message": self.message, "status": self.status.as_u16() }
        });
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("storage unavailable: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_statuses() {
        let cases = [
            (ServiceError::BadRequest("b".into()), StatusCode::BAD_REQUEST),
            (ServiceError::company_not_found("x"), StatusCode::NOT_FOUND),
            (ServiceError::invoice_not_found(1), StatusCode::NOT_FOUND),
            (ServiceError::Db("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn not_found_keeps_resource_message() {
        let e = JsonApiError::from(ServiceError::company_not_found("ibm"));
        assert_eq!(e.message, "No matching company: ibm");
    }

    #[test]
    fn startup_errors_flow_into_anyhow() {
        let e: anyhow::Error = StartupError::InvalidConfig("bad bind address".into()).into();
        assert_eq!(e.to_string(), "invalid configuration: bad bind address");
    }

    #[test]
    fn response_carries_status() {
        let resp = JsonApiError::not_found("gone").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
