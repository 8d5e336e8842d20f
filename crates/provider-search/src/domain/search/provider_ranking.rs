// crates/provider-search/src/domain/search/provider_ranking.rs

use std::cmp::Ordering;
use crate::domain::entities::SearchableProvider;
use crate::domain::search::{SearchCriteria, SearchHit, SearchQuery, SearchResult};

/// Classement et pagination des fiches retenues.
pub struct ProviderRanking;

impl ProviderRanking {
    /// Niveau décroissant, note décroissante, distance croissante, puis id croissant.
    pub fn compare(a: &SearchHit, b: &SearchHit) -> Ordering {
        b.provider.subscription_tier().cmp(&a.provider.subscription_tier())
            .then_with(|| b.provider.rating().value().total_cmp(&a.provider.rating().value()))
            .then_with(|| a.distance_km.total_cmp(&b.distance_km))
            .then_with(|| a.provider.id().cmp(b.provider.id()))
    }

    /// Filtre, trie puis découpe la page demandée.
    pub fn execute<'a, I>(query: &SearchQuery, providers: I) -> SearchResult
    where
        I: IntoIterator<Item = &'a SearchableProvider>,
    {
        let criteria = SearchCriteria::from_query(query);

        let mut hits: Vec<SearchHit> = providers
            .into_iter()
            .filter_map(|p| {
                criteria.evaluate(p).map(|distance_km| SearchHit {
                    provider: p.clone(),
                    distance_km,
                })
            })
            .collect();

        let total_count = hits.len() as u64;

        hits.sort_by(Self::compare);

        let page = query.page();
        let skip = usize::try_from(page.skip()).unwrap_or(usize::MAX);
        let take = usize::try_from(page.take()).unwrap_or(usize::MAX);

        let hits = hits.into_iter().skip(skip).take(take).collect();

        SearchResult { hits, total_count }
    }
}
