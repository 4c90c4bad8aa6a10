use std::sync::Arc;

use tracing::{debug, info, instrument};

use models::invoice;

use super::domain::{InvoiceChanges, InvoiceSummary, InvoiceWithCompany, NewInvoice};
use super::repository::InvoiceRepository;
use crate::errors::ServiceError;

/// Parse a raw path segment into an invoice id.
///
/// A segment that is not an integer cannot address any row, so it is
/// reported the same way as an unknown id.
pub fn parse_invoice_id(raw: &str) -> Result<i32, ServiceError> {
    raw.trim().parse::<i32>().map_err(|_| ServiceError::invoice_not_found(raw))
}

/// Invoice use cases independent of the web framework.
#[derive(Clone)]
pub struct InvoiceService {
    repo: Arc<dyn InvoiceRepository>,
}

impl InvoiceService {
    pub fn new(repo: Arc<dyn InvoiceRepository>) -> Self { Self { repo } }

    /// All invoices by ascending id, as `{id, comp_code, amt}` only.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<InvoiceSummary>, ServiceError> {
        let invoices = self.repo.list().await?;
        debug!(count = invoices.len(), "invoices listed");
        Ok(invoices)
    }

    /// One invoice together with its owning company. `id` is the raw path segment.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<InvoiceWithCompany, ServiceError> {
        let id = parse_invoice_id(id)?;
        let invoice = self.repo.get(id).await?;
        let company = self.repo.owner(id).await?;
        match (invoice, company) {
            (Some(invoice), Some(company)) => Ok(InvoiceWithCompany { invoice, company }),
            _ => Err(ServiceError::invoice_not_found(id)),
        }
    }

    /// Insert with storage defaults. `comp_code` is not checked here; an
    /// unknown company is rejected by the foreign key.
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: Option<NewInvoice>) -> Result<invoice::Model, ServiceError> {
        let input = input.ok_or_else(|| ServiceError::missing_body("{comp_code, amt}"))?;
        let created = self.repo.create(input).await?;
        info!(id = created.id, comp_code = %created.comp_code, amt = created.amt, "invoice_created");
        Ok(created)
    }

    #[instrument(skip(self, changes))]
    pub async fn update(&self, id: &str, changes: Option<InvoiceChanges>) -> Result<invoice::Model, ServiceError> {
        let changes = changes.ok_or_else(|| ServiceError::missing_body("{amt}"))?;
        let id = parse_invoice_id(id)?;
        let updated = self
            .repo
            .update(id, changes)
            .await?
            .ok_or_else(|| ServiceError::invoice_not_found(id))?;
        info!(id = updated.id, amt = updated.amt, "invoice_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let id = parse_invoice_id(id)?;
        if !self.repo.delete(id).await? {
            return Err(ServiceError::invoice_not_found(id));
        }
        info!(id, "invoice_deleted");
        Ok(())
    }
}
