mod postgres_searchable_provider_row;

pub use postgres_searchable_provider_row::{PostgresSearchHitRow, PostgresSearchableProviderRow};
