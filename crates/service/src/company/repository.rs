use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::company;

use super::domain::{CompanyChanges, NewCompany};
use crate::errors::ServiceError;

/// Storage access for companies.
///
/// `update` and `delete` report a missing row as `None`/`false`; deciding
/// that this is a Not-Found is left to the service.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<company::Model>, ServiceError>;
    async fn get(&self, code: &str) -> Result<Option<company::Model>, ServiceError>;
    async fn invoice_ids(&self, code: &str) -> Result<Vec<i32>, ServiceError>;
    async fn create(&self, input: NewCompany) -> Result<company::Model, ServiceError>;
    async fn update(&self, code: &str, changes: CompanyChanges) -> Result<Option<company::Model>, ServiceError>;
    async fn delete(&self, code: &str) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCompanyRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn list(&self) -> Result<Vec<company::Model>, ServiceError> {
        crate::db::company_store::list_companies(&self.db).await
    }

    async fn get(&self, code: &str) -> Result<Option<company::Model>, ServiceError> {
        crate::db::company_store::get_company(&self.db, code).await
    }

    async fn invoice_ids(&self, code: &str) -> Result<Vec<i32>, ServiceError> {
        crate::db::company_store::list_invoice_ids(&self.db, code).await
    }

    async fn create(&self, input: NewCompany) -> Result<company::Model, ServiceError> {
        crate::db::company_store::create_company(&self.db, input).await
    }

    async fn update(&self, code: &str, changes: CompanyChanges) -> Result<Option<company::Model>, ServiceError> {
        crate::db::company_store::update_company(&self.db, code, changes).await
    }

    async fn delete(&self, code: &str) -> Result<bool, ServiceError> {
        crate::db::company_store::delete_company(&self.db, code).await
    }
}
