// crates/provider-search/src/infrastructure/memory/mod.rs

mod in_memory_searchable_provider_repository;
mod in_memory_transaction;


pub use in_memory_searchable_provider_repository::InMemorySearchableProviderRepository;
pub use in_memory_transaction::{InMemoryTransaction, InMemoryTransactionManager};
