// crates/provider-search/src/application/search_providers/search_providers_use_case.rs

use std::sync::Arc;
use shared_kernel::errors::Result;
use crate::application::search_providers::{SearchProvidersDto, SearchProvidersQuery};
use crate::domain::repositories::SearchableProviderRepository;

pub struct SearchProvidersUseCase {
    repo: Arc<dyn SearchableProviderRepository>,
}

impl SearchProvidersUseCase {
    pub fn new(repo: Arc<dyn SearchableProviderRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(
        name = "search_providers",
        skip(self, query),
        fields(radius_km = query.radius_km)
    )]
    pub async fn execute(&self, query: SearchProvidersQuery) -> Result<SearchProvidersDto> {
        // 1. Validation des paramètres bruts
        let search_query = query.to_search_query()?;

        // 2. Filtrage + classement + pagination
        let result = self.repo.search(&search_query).await?;

        tracing::debug!(
            returned = result.hits.len(),
            total_count = result.total_count,
            "Provider search completed"
        );

        Ok(result.into())
    }
}
