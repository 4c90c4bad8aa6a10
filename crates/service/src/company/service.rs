use std::sync::Arc;

use tracing::{debug, info, instrument};

use models::company;

use super::domain::{CompanyChanges, CompanyDetail, NewCompany};
use super::repository::CompanyRepository;
use crate::errors::ServiceError;

/// Company use cases independent of the web framework.
///
/// Bodies arrive as `Option`: `None` means the caller sent nothing usable
/// and is rejected before the repository is touched.
#[derive(Clone)]
pub struct CompanyService {
    repo: Arc<dyn CompanyRepository>,
}

impl CompanyService {
    pub fn new(repo: Arc<dyn CompanyRepository>) -> Self { Self { repo } }

    /// All companies ordered by name, without invoice ids.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<company::Model>, ServiceError> {
        let companies = self.repo.list().await?;
        debug!(count = companies.len(), "companies listed");
        Ok(companies)
    }

    /// One company plus the ids of the invoices referencing it.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::company::{CompanyService, domain::NewCompany};
    /// use service::memory::MemoryStore;
    /// let svc = CompanyService::new(Arc::new(MemoryStore::default()));
    /// let input = NewCompany::new("apple", "Apple", "Maker of OSX");
    /// tokio_test::block_on(svc.create(Some(input))).unwrap();
    /// let detail = tokio_test::block_on(svc.get("apple")).unwrap();
    /// assert!(detail.invoices.is_empty());
    /// ```
    #[instrument(skip(self))]
    pub async fn get(&self, code: &str) -> Result<CompanyDetail, ServiceError> {
        let company = self
            .repo
            .get(code)
            .await?
            .ok_or_else(|| ServiceError::company_not_found(code))?;
        let invoices = self.repo.invoice_ids(code).await?;
        Ok(CompanyDetail::new(company, invoices))
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: Option<NewCompany>) -> Result<company::Model, ServiceError> {
        let input = input.ok_or_else(|| ServiceError::missing_body("{code, name, description}"))?;
        let created = self.repo.create(input).await?;
        info!(code = %created.code, "company_created");
        Ok(created)
    }

    #[instrument(skip(self, changes))]
    pub async fn update(&self, code: &str, changes: Option<CompanyChanges>) -> Result<company::Model, ServiceError> {
        let changes = changes.ok_or_else(|| ServiceError::missing_body("{name, description}"))?;
        let updated = self
            .repo
            .update(code, changes)
            .await?
            .ok_or_else(|| ServiceError::company_not_found(code))?;
        info!(code = %updated.code, "company_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, code: &str) -> Result<(), ServiceError> {
        if !self.repo.delete(code).await? {
            return Err(ServiceError::company_not_found(code));
        }
        info!(%code, "company_deleted");
        Ok(())
    }
}
