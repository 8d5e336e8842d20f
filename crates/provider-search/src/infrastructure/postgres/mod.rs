// crates/provider-search/src/infrastructure/postgres/mod.rs

pub mod models;
pub mod repositories;
pub mod rows;
pub mod utils;

pub use repositories::PostgresSearchableProviderRepository;
