// crates/provider-search/tests/infrastructure/main.rs

#![cfg(feature = "postgres")]

mod common;
mod postgres_searchable_provider_repository_it;
