// crates/provider-search/src/domain/repositories/searchable_provider_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use crate::domain::entities::SearchableProvider;
use crate::domain::search::{SearchQuery, SearchResult};
use crate::domain::value_objects::SearchableProviderId;

/// Store du modèle de lecture.
/// Les écritures transactionnelles ne deviennent visibles qu'après `commit()` ;
/// avec `tx = None` chaque écriture est autocommitée.
#[async_trait]
pub trait SearchableProviderRepository: Send + Sync {
    /// Filtre, classe et pagine ; `total_count` est calculé avant pagination.
    async fn search(&self, query: &SearchQuery) -> Result<SearchResult>;

    async fn find_by_id(
        &self,
        id: &SearchableProviderId,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<Option<SearchableProvider>>;

    /// `AlreadyExists` si la fiche existe déjà
    async fn add(&self, provider: &SearchableProvider, tx: Option<&mut dyn Transaction>) -> Result<()>;

    /// `ConcurrencyConflict` si la version stockée n'est pas celle attendue
    async fn update(&self, provider: &SearchableProvider, tx: Option<&mut dyn Transaction>) -> Result<()>;

    /// Supprimer un id absent n'est pas une erreur
    async fn delete(&self, id: &SearchableProviderId, tx: Option<&mut dyn Transaction>) -> Result<()>;
}
