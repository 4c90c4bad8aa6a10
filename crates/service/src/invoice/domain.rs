use sea_orm::{prelude::Date, FromQueryResult};
use serde::{Deserialize, Serialize};

/// Create input; `paid`, `add_date` and `paid_date` take storage defaults.
///
/// Fields are not validated here: a missing `comp_code` or `amt` reaches
/// storage as NULL and fails its constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewInvoice {
    pub comp_code: Option<String>,
    pub amt: Option<f64>,
}

impl NewInvoice {
    pub fn new(comp_code: impl Into<String>, amt: f64) -> Self {
        Self { comp_code: Some(comp_code.into()), amt: Some(amt) }
    }
}

/// Update input. Only the amount is mutable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceChanges {
    pub amt: Option<f64>,
}

impl InvoiceChanges {
    pub fn amount(amt: f64) -> Self {
        Self { amt: Some(amt) }
    }
}

/// Row shape of the invoice list. Deliberately slimmer than `InvoiceDetail`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromQueryResult)]
pub struct InvoiceSummary {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
}

/// Invoice half of a single-invoice read; the owner is reported separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromQueryResult)]
pub struct InvoiceDetail {
    pub id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: Date,
    pub paid_date: Option<Date>,
}

/// Single-invoice read: `{invoice: {...}, company: {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceWithCompany {
    pub invoice: InvoiceDetail,
    pub company: models::company::Model,
}

impl From<&models::invoice::Model> for InvoiceSummary {
    fn from(m: &models::invoice::Model) -> Self {
        Self { id: m.id, comp_code: m.comp_code.clone(), amt: m.amt }
    }
}

impl From<&models::invoice::Model> for InvoiceDetail {
    fn from(m: &models::invoice::Model) -> Self {
        Self { id: m.id, amt: m.amt, paid: m.paid, add_date: m.add_date, paid_date: m.paid_date }
    }
}
