use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::{company, invoice};

use super::domain::{InvoiceChanges, InvoiceDetail, InvoiceSummary, NewInvoice};
use crate::errors::ServiceError;

/// Storage access for invoices.
///
/// Both single-invoice lookups go through the invoice -> company join, so an
/// invoice is only reported when its owner row exists.
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<InvoiceSummary>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<InvoiceDetail>, ServiceError>;
    async fn owner(&self, id: i32) -> Result<Option<company::Model>, ServiceError>;
    async fn create(&self, input: NewInvoice) -> Result<invoice::Model, ServiceError>;
    async fn update(&self, id: i32, changes: InvoiceChanges) -> Result<Option<invoice::Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmInvoiceRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl InvoiceRepository for SeaOrmInvoiceRepository {
    async fn list(&self) -> Result<Vec<InvoiceSummary>, ServiceError> {
        crate::db::invoice_store::list_invoices(&self.db).await
    }

    async fn get(&self, id: i32) -> Result<Option<InvoiceDetail>, ServiceError> {
        crate::db::invoice_store::get_invoice(&self.db, id).await
    }

    async fn owner(&self, id: i32) -> Result<Option<company::Model>, ServiceError> {
        crate::db::invoice_store::get_invoice_company(&self.db, id).await
    }

    async fn create(&self, input: NewInvoice) -> Result<invoice::Model, ServiceError> {
        crate::db::invoice_store::create_invoice(&self.db, input).await
    }

    async fn update(&self, id: i32, changes: InvoiceChanges) -> Result<Option<invoice::Model>, ServiceError> {
        crate::db::invoice_store::update_invoice(&self.db, id, changes).await
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        crate::db::invoice_store::delete_invoice(&self.db, id).await
    }
}
