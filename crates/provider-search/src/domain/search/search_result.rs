// crates/provider-search/src/domain/search/search_result.rs

use crate::domain::entities::SearchableProvider;

/// Fiche retenue et sa distance à l'origine de la requête.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub provider: SearchableProvider,
    pub distance_km: f64,
}

#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub hits: Vec<SearchHit>,
    /// Nombre total de fiches filtrées, avant pagination
    pub total_count: u64,
}

impl SearchResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn providers(&self) -> impl Iterator<Item = &SearchableProvider> {
        self.hits.iter().map(|h| &h.provider)
    }
}
