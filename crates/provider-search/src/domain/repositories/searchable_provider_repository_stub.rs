// crates/provider-search/src/domain/repositories/searchable_provider_repository_stub.rs

use std::sync::Mutex;
use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::{DomainError, Result};
use crate::domain::entities::SearchableProvider;
use crate::domain::repositories::SearchableProviderRepository;
use crate::domain::search::{SearchQuery, SearchResult};
use crate::domain::value_objects::SearchableProviderId;

// --- STUB SEARCHABLE PROVIDER REPOSITORY ---
#[derive(Default)]
pub struct SearchableProviderRepositoryStub {
    pub provider_to_return: Mutex<Option<SearchableProvider>>,
    pub search_result_to_return: Mutex<SearchResult>,
    pub error_to_return: Mutex<Option<DomainError>>,
    /// Nombre d'écritures (add/update) qui échoueront en ConcurrencyConflict
    pub conflicts_to_raise: Mutex<u32>,
    pub last_query: Mutex<Option<SearchQuery>>,
    pub added: Mutex<Vec<SearchableProvider>>,
    pub updated: Mutex<Vec<SearchableProvider>>,
    pub deleted: Mutex<Vec<SearchableProviderId>>,
}

impl SearchableProviderRepositoryStub {
    fn check_error(&self) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }

    fn check_conflict(&self) -> Result<()> {
        let mut remaining = self.conflicts_to_raise.lock().unwrap();
        if *remaining > 0 {
            *remaining -= 1;
            return Err(DomainError::ConcurrencyConflict {
                reason: "Stubbed version mismatch".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl SearchableProviderRepository for SearchableProviderRepositoryStub {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult> {
        self.check_error()?;
        *self.last_query.lock().unwrap() = Some(query.clone());
        Ok(self.search_result_to_return.lock().unwrap().clone())
    }

    async fn find_by_id(
        &self,
        _id: &SearchableProviderId,
        _tx: Option<&mut dyn Transaction>,
    ) -> Result<Option<SearchableProvider>> {
        self.check_error()?;
        Ok(self.provider_to_return.lock().unwrap().clone())
    }

    async fn add(&self, provider: &SearchableProvider, _tx: Option<&mut dyn Transaction>) -> Result<()> {
        self.check_error()?;
        self.check_conflict()?;
        self.added.lock().unwrap().push(provider.clone());
        Ok(())
    }

    async fn update(&self, provider: &SearchableProvider, _tx: Option<&mut dyn Transaction>) -> Result<()> {
        self.check_error()?;
        self.check_conflict()?;
        self.updated.lock().unwrap().push(provider.clone());
        Ok(())
    }

    async fn delete(&self, id: &SearchableProviderId, _tx: Option<&mut dyn Transaction>) -> Result<()> {
        self.check_error()?;
        self.deleted.lock().unwrap().push(*id);
        Ok(())
    }
}
