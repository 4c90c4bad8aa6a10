//! In-memory storage implementing both repositories.
//!
//! Enforces the same constraints as the PostgreSQL schema: NOT NULL columns,
//! unique company code and name, `invoices.comp_code` must reference a
//! company, `amt > 0`, and deleting a company cascades to its invoices. Used by tests and by the
//! server when started with `BIZTIME_STORAGE=memory`.

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use models::{company, invoice};

use crate::company::domain::{CompanyChanges, NewCompany};
use crate::company::repository::CompanyRepository;
use crate::errors::ServiceError;
use crate::invoice::domain::{InvoiceChanges, InvoiceDetail, InvoiceSummary, NewInvoice};
use crate::invoice::repository::InvoiceRepository;

#[derive(Default)]
struct Tables {
    companies: BTreeMap<String, company::Model>,
    invoices: BTreeMap<i32, invoice::Model>,
    last_invoice_id: i32,
}

impl Tables {
    fn name_taken(&self, name: &str, except_code: Option<&str>) -> bool {
        self.companies
            .values()
            .any(|c| c.name == name && Some(c.code.as_str()) != except_code)
    }

    fn owner_of(&self, id: i32) -> Option<&company::Model> {
        let inv = self.invoices.get(&id)?;
        self.companies.get(&inv.comp_code)
    }
}

/// A missing field stands in for NULL in a NOT NULL column.
fn not_null<T>(value: Option<T>, table: &str, column: &str) -> Result<T, ServiceError> {
    value.ok_or_else(|| {
        ServiceError::Db(format!(
            "null value in column \"{}\" of relation \"{}\" violates not-null constraint",
            column, table
        ))
    })
}

fn check_amount(amt: f64) -> Result<(), ServiceError> {
    if amt > 0.0 {
        Ok(())
    } else {
        Err(ServiceError::Db(
            "new row for relation \"invoices\" violates check constraint \"invoices_amt_check\"".into(),
        ))
    }
}

/// Cheap to clone; clones share the same tables.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl CompanyRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<company::Model>, ServiceError> {
        let tables = self.inner.read().await;
        let mut companies: Vec<_> = tables.companies.values().cloned().collect();
        companies.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(companies)
    }

    async fn get(&self, code: &str) -> Result<Option<company::Model>, ServiceError> {
        let tables = self.inner.read().await;
        Ok(tables.companies.get(code).cloned())
    }

    async fn invoice_ids(&self, code: &str) -> Result<Vec<i32>, ServiceError> {
        let tables = self.inner.read().await;
        Ok(tables
            .invoices
            .values()
            .filter(|i| i.comp_code == code)
            .map(|i| i.id)
            .collect())
    }

    async fn create(&self, input: NewCompany) -> Result<company::Model, ServiceError> {
        let code = not_null(input.code, "companies", "code")?;
        let name = not_null(input.name, "companies", "name")?;
        let description = not_null(input.description, "companies", "description")?;
        let mut tables = self.inner.write().await;
        if tables.companies.contains_key(&code) {
            return Err(ServiceError::Db(format!(
                "duplicate key value violates unique constraint \"companies_pkey\": code={}",
                code
            )));
        }
        if tables.name_taken(&name, None) {
            return Err(ServiceError::Db(format!(
                "duplicate key value violates unique constraint \"companies_name_key\": name={}",
                name
            )));
        }
        let model = company::Model { code, name, description };
        tables.companies.insert(model.code.clone(), model.clone());
        Ok(model)
    }

    async fn update(&self, code: &str, changes: CompanyChanges) -> Result<Option<company::Model>, ServiceError> {
        let mut tables = self.inner.write().await;
        // constraints only apply to a row that matched
        if !tables.companies.contains_key(code) {
            return Ok(None);
        }
        let name = not_null(changes.name, "companies", "name")?;
        let description = not_null(changes.description, "companies", "description")?;
        if tables.name_taken(&name, Some(code)) {
            return Err(ServiceError::Db(format!(
                "duplicate key value violates unique constraint \"companies_name_key\": name={}",
                name
            )));
        }
        let Some(existing) = tables.companies.get_mut(code) else { return Ok(None) };
        existing.name = name;
        existing.description = description;
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, code: &str) -> Result<bool, ServiceError> {
        let mut tables = self.inner.write().await;
        if tables.companies.remove(code).is_none() {
            return Ok(false);
        }
        tables.invoices.retain(|_, i| i.comp_code != code);
        Ok(true)
    }
}

#[async_trait]
impl InvoiceRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<InvoiceSummary>, ServiceError> {
        let tables = self.inner.read().await;
        Ok(tables.invoices.values().map(InvoiceSummary::from).collect())
    }

    async fn get(&self, id: i32) -> Result<Option<InvoiceDetail>, ServiceError> {
        let tables = self.inner.read().await;
        if tables.owner_of(id).is_none() {
            return Ok(None);
        }
        Ok(tables.invoices.get(&id).map(InvoiceDetail::from))
    }

    async fn owner(&self, id: i32) -> Result<Option<company::Model>, ServiceError> {
        let tables = self.inner.read().await;
        Ok(tables.owner_of(id).cloned())
    }

    async fn create(&self, input: NewInvoice) -> Result<invoice::Model, ServiceError> {
        let comp_code = not_null(input.comp_code, "invoices", "comp_code")?;
        let amt = not_null(input.amt, "invoices", "amt")?;
        check_amount(amt)?;
        let mut tables = self.inner.write().await;
        if !tables.companies.contains_key(&comp_code) {
            return Err(ServiceError::Db(format!(
                "insert or update on table \"invoices\" violates foreign key constraint \"fk_invoices_comp_code\": comp_code={}",
                comp_code
            )));
        }
        tables.last_invoice_id += 1;
        let model = invoice::Model {
            id: tables.last_invoice_id,
            comp_code,
            amt,
            paid: false,
            add_date: Utc::now().date_naive(),
            paid_date: None,
        };
        tables.invoices.insert(model.id, model.clone());
        Ok(model)
    }

    async fn update(&self, id: i32, changes: InvoiceChanges) -> Result<Option<invoice::Model>, ServiceError> {
        let mut tables = self.inner.write().await;
        let Some(existing) = tables.invoices.get_mut(&id) else { return Ok(None) };
        let amt = not_null(changes.amt, "invoices", "amt")?;
        check_amount(amt)?;
        existing.amt = amt;
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let mut tables = self.inner.write().await;
        Ok(tables.invoices.remove(&id).is_some())
    }
}
