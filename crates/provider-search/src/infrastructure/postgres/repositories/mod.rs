mod postgres_searchable_provider_repository;

pub use postgres_searchable_provider_repository::PostgresSearchableProviderRepository;
