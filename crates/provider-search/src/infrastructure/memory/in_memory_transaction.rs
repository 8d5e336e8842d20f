// crates/provider-search/src/infrastructure/memory/in_memory_transaction.rs

use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use shared_kernel::domain::entities::AggregateRoot;
use shared_kernel::domain::transaction::{Transaction, TransactionManager};
use shared_kernel::errors::{DomainError, Result};
use crate::domain::entities::SearchableProvider;
use crate::domain::value_objects::SearchableProviderId;

pub(crate) type ProviderMap = HashMap<SearchableProviderId, SearchableProvider>;
pub(crate) type SharedStore = Arc<RwLock<ProviderMap>>;

pub(crate) fn read_store(store: &SharedStore) -> Result<RwLockReadGuard<'_, ProviderMap>> {
    store
        .read()
        .map_err(|_| DomainError::StorageUnavailable("In-memory store lock poisoned".into()))
}

pub(crate) fn write_store(store: &SharedStore) -> Result<RwLockWriteGuard<'_, ProviderMap>> {
    store
        .write()
        .map_err(|_| DomainError::StorageUnavailable("In-memory store lock poisoned".into()))
}

#[derive(Debug, Clone)]
pub(crate) enum StagedOp {
    Add(SearchableProvider),
    Update(SearchableProvider),
    Delete(SearchableProviderId),
}

impl StagedOp {
    fn id(&self) -> &SearchableProviderId {
        match self {
            Self::Add(p) | Self::Update(p) => p.id(),
            Self::Delete(id) => id,
        }
    }
}

/// Écritures en attente, appliquées d'un bloc au `commit`.
/// Un drop sans commit les abandonne.
pub struct InMemoryTransaction {
    store: SharedStore,
    ops: Vec<StagedOp>,
}

impl InMemoryTransaction {
    pub(crate) fn new(store: SharedStore) -> Self {
        Self { store, ops: Vec::new() }
    }

    pub(crate) fn belongs_to(&self, store: &SharedStore) -> bool {
        Arc::ptr_eq(&self.store, store)
    }

    pub(crate) fn stage(&mut self, op: StagedOp) {
        self.ops.push(op);
    }

    /// Dernier état mis en attente pour cet id.
    /// `None` : rien de staged, `Some(None)` : supprimé dans la transaction.
    pub(crate) fn staged_state(&self, id: &SearchableProviderId) -> Option<Option<SearchableProvider>> {
        self.ops.iter().rev().find(|op| op.id() == id).map(|op| match op {
            StagedOp::Add(p) | StagedOp::Update(p) => Some(p.clone()),
            StagedOp::Delete(_) => None,
        })
    }

    fn apply(store: &SharedStore, ops: Vec<StagedOp>) -> Result<()> {
        let mut map = write_store(store)?;

        // 1. Validation complète sur une vue superposée, sans toucher au store
        let mut overlay: HashMap<SearchableProviderId, Option<SearchableProvider>> = HashMap::new();

        for op in ops {
            let id = *op.id();
            let current = match overlay.get(&id) {
                Some(state) => state.clone(),
                None => map.get(&id).cloned(),
            };

            let next = match op {
                StagedOp::Add(p) => {
                    check_can_add(current.as_ref())?;
                    Some(persisted(p))
                }
                StagedOp::Update(p) => {
                    check_can_update(current.as_ref(), &p)?;
                    Some(persisted(p))
                }
                StagedOp::Delete(_) => None,
            };

            overlay.insert(id, next);
        }

        // 2. Application atomique
        for (id, state) in overlay {
            match state {
                Some(p) => { map.insert(id, p); }
                None => { map.remove(&id); }
            }
        }

        Ok(())
    }
}

impl Transaction for InMemoryTransaction {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn commit(self: Box<Self>) -> Pin<Box<dyn Future<Output = Result<()>> + Send>> {
        let InMemoryTransaction { store, ops } = *self;
        Box::pin(async move { InMemoryTransaction::apply(&store, ops) })
    }
}

pub(crate) fn check_can_add(current: Option<&SearchableProvider>) -> Result<()> {
    match current {
        Some(existing) => Err(DomainError::AlreadyExists {
            entity: "SearchableProvider",
            field: "id",
            value: existing.id().to_string(),
        }),
        None => Ok(()),
    }
}

/// OCC : la version stockée doit précéder exactement celle de l'entité modifiée.
pub(crate) fn check_can_update(current: Option<&SearchableProvider>, incoming: &SearchableProvider) -> Result<()> {
    match current {
        Some(existing) if existing.version() == incoming.version() - 1 => Ok(()),
        Some(existing) => Err(DomainError::ConcurrencyConflict {
            reason: format!(
                "SearchableProvider {} version mismatch (stored {}, expected {})",
                incoming.id(),
                existing.version(),
                incoming.version() - 1
            ),
        }),
        None => Err(DomainError::ConcurrencyConflict {
            reason: format!("SearchableProvider {} no longer exists", incoming.id()),
        }),
    }
}

pub(crate) fn persisted(mut provider: SearchableProvider) -> SearchableProvider {
    provider.mark_as_persisted();
    provider
}

#[derive(Clone)]
pub struct InMemoryTransactionManager {
    store: SharedStore,
}

impl InMemoryTransactionManager {
    pub(crate) fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

impl TransactionManager for InMemoryTransactionManager {
    fn in_transaction<'a>(
        &'a self,
        f: Box<dyn FnOnce(Box<dyn Transaction>) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> + Send + 'a>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        let tx = Box::new(InMemoryTransaction::new(self.store.clone()));
        Box::pin(async move { f(tx).await })
    }
}
