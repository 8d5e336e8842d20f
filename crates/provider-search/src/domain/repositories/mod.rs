mod searchable_provider_repository;

#[cfg(any(test, feature = "test-utils"))]
mod searchable_provider_repository_stub;

pub use searchable_provider_repository::SearchableProviderRepository;

#[cfg(any(test, feature = "test-utils"))]
pub use searchable_provider_repository_stub::SearchableProviderRepositoryStub;
