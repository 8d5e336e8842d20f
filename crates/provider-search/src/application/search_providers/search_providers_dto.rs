// crates/provider-search/src/application/search_providers/search_providers_dto.rs

use serde::Serialize;
use uuid::Uuid;
use shared_kernel::domain::Identifier;
use crate::domain::search::{SearchHit, SearchResult};
use crate::domain::value_objects::SubscriptionTier;

#[derive(Debug, Clone, Serialize)]
pub struct SearchableProviderDto {
    pub id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub tier: SubscriptionTier,
    pub rating: f64,
    pub distance_km: f64,
    pub city: Option<String>,
    pub state: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchProvidersDto {
    pub items: Vec<SearchableProviderDto>,
    pub total_count: u64,
}

impl From<SearchHit> for SearchableProviderDto {
    fn from(hit: SearchHit) -> Self {
        let p = hit.provider;
        Self {
            id: p.id().as_uuid(),
            name: p.name().to_string(),
            latitude: p.location().lat(),
            longitude: p.location().lon(),
            tier: p.subscription_tier(),
            rating: p.rating().value(),
            distance_km: hit.distance_km,
            city: p.city().map(str::to_owned),
            state: p.state().map(str::to_owned),
            description: p.description().map(str::to_owned),
        }
    }
}

impl From<SearchResult> for SearchProvidersDto {
    fn from(result: SearchResult) -> Self {
        Self {
            items: result.hits.into_iter().map(SearchableProviderDto::from).collect(),
            total_count: result.total_count,
        }
    }
}
