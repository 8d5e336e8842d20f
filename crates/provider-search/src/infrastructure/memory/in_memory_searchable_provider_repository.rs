// crates/provider-search/src/infrastructure/memory/in_memory_searchable_provider_repository.rs

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::{DomainError, Result};
use crate::domain::entities::SearchableProvider;
use crate::domain::repositories::SearchableProviderRepository;
use crate::domain::search::{ProviderRanking, SearchQuery, SearchResult};
use crate::domain::value_objects::SearchableProviderId;
use crate::infrastructure::memory::in_memory_transaction::{
    check_can_add, check_can_update, persisted, read_store, write_store, SharedStore, StagedOp,
};
use crate::infrastructure::memory::{InMemoryTransaction, InMemoryTransactionManager};

/// Store en mémoire : les verrous ne sont jamais tenus à travers un `.await`.
#[derive(Clone, Default)]
pub struct InMemorySearchableProviderRepository {
    store: SharedStore,
}

impl InMemorySearchableProviderRepository {
    pub fn new() -> Self {
        Self { store: Arc::new(RwLock::new(HashMap::new())) }
    }

    /// Gestionnaire de transactions partageant ce store
    pub fn transaction_manager(&self) -> InMemoryTransactionManager {
        InMemoryTransactionManager::new(self.store.clone())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(read_store(&self.store)?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn downcast<'t>(&self, tx: &'t mut dyn Transaction) -> Result<&'t mut InMemoryTransaction> {
        let tx = tx
            .as_any_mut()
            .downcast_mut::<InMemoryTransaction>()
            .ok_or_else(|| DomainError::Internal("Type mismatch: Expected InMemoryTransaction".into()))?;

        if !tx.belongs_to(&self.store) {
            return Err(DomainError::Internal("Transaction belongs to another store".into()));
        }
        Ok(tx)
    }
}

#[async_trait]
impl SearchableProviderRepository for InMemorySearchableProviderRepository {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult> {
        // Snapshot cohérent : count et page calculés sous le même verrou
        let map = read_store(&self.store)?;
        Ok(ProviderRanking::execute(query, map.values()))
    }

    async fn find_by_id(
        &self,
        id: &SearchableProviderId,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<Option<SearchableProvider>> {
        if let Some(tx) = tx {
            if let Some(staged) = self.downcast(tx)?.staged_state(id) {
                return Ok(staged);
            }
        }
        Ok(read_store(&self.store)?.get(id).cloned())
    }

    async fn add(&self, provider: &SearchableProvider, tx: Option<&mut dyn Transaction>) -> Result<()> {
        match tx {
            Some(tx) => {
                self.downcast(tx)?.stage(StagedOp::Add(provider.clone()));
                Ok(())
            }
            None => {
                let mut map = write_store(&self.store)?;
                check_can_add(map.get(provider.id()))?;
                map.insert(*provider.id(), persisted(provider.clone()));
                Ok(())
            }
        }
    }

    async fn update(&self, provider: &SearchableProvider, tx: Option<&mut dyn Transaction>) -> Result<()> {
        match tx {
            Some(tx) => {
                self.downcast(tx)?.stage(StagedOp::Update(provider.clone()));
                Ok(())
            }
            None => {
                let mut map = write_store(&self.store)?;
                check_can_update(map.get(provider.id()), provider)?;
                map.insert(*provider.id(), persisted(provider.clone()));
                Ok(())
            }
        }
    }

    async fn delete(&self, id: &SearchableProviderId, tx: Option<&mut dyn Transaction>) -> Result<()> {
        match tx {
            Some(tx) => {
                self.downcast(tx)?.stage(StagedOp::Delete(*id));
                Ok(())
            }
            None => {
                write_store(&self.store)?.remove(id);
                Ok(())
            }
        }
    }
}
