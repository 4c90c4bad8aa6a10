use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Required request body was absent or unusable.
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    /// Anything raised by the storage engine: constraint violations, connectivity.
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn company_not_found(code: &str) -> Self { Self::NotFound(format!("No matching company: {}", code)) }

    pub fn invoice_not_found(id: impl Display) -> Self { Self::NotFound(format!("No matching invoice: {}", id)) }

    pub fn missing_body(expected: &str) -> Self { Self::BadRequest(format!("Request body required: {}", expected)) }
}
