mod search_providers_dto;
mod search_providers_query;
mod search_providers_use_case;

#[cfg(test)]
mod search_providers_use_case_test;

pub use search_providers_dto::{SearchProvidersDto, SearchableProviderDto};
pub use search_providers_query::SearchProvidersQuery;
pub use search_providers_use_case::SearchProvidersUseCase;
