use serde::{Deserialize, Serialize};

/// Create input. Only the presence of a body is checked; a missing field is
/// sent to storage as NULL and rejected there by the NOT NULL constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCompany {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl NewCompany {
    pub fn new(code: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { code: Some(code.into()), name: Some(name.into()), description: Some(description.into()) }
    }
}

/// Update input. `code` is the address, never part of the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CompanyChanges {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { name: Some(name.into()), description: Some(description.into()) }
    }
}

/// Single-company read, enriched with the ids of its invoices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyDetail {
    pub code: String,
    pub name: String,
    pub description: String,
    pub invoices: Vec<i32>,
}

impl CompanyDetail {
    pub fn new(company: models::company::Model, invoices: Vec<i32>) -> Self {
        Self {
            code: company.code,
            name: company.name,
            description: company.description,
            invoices,
        }
    }
}
