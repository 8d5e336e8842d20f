mod provider_ranking;
mod search_criteria;
mod search_query;
mod search_result;


pub use provider_ranking::ProviderRanking;
pub use search_criteria::SearchCriteria;
pub use search_query::{SearchQuery, SearchQueryBuilder};
pub use search_result::{SearchHit, SearchResult};
