use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::company::{repository::SeaOrmCompanyRepository, CompanyService};
use service::invoice::{repository::SeaOrmInvoiceRepository, InvoiceService};
use service::memory::MemoryStore;

/// Shared handler state. Holds only service handles; no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub companies: CompanyService,
    pub invoices: InvoiceService,
}

impl AppState {
    /// Services backed by PostgreSQL through SeaORM.
    pub fn from_db(db: DatabaseConnection) -> Self {
        Self {
            companies: CompanyService::new(Arc::new(SeaOrmCompanyRepository { db: db.clone() })),
            invoices: InvoiceService::new(Arc::new(SeaOrmInvoiceRepository { db })),
        }
    }

    /// Both services over one shared `MemoryStore`, so the foreign key between
    /// invoices and companies still holds.
    pub fn in_memory() -> Self {
        Self::with_store(MemoryStore::new())
    }

    pub fn with_store(store: MemoryStore) -> Self {
        Self {
            companies: CompanyService::new(Arc::new(store.clone())),
            invoices: InvoiceService::new(Arc::new(store)),
        }
    }
}
