// crates/provider-search/src/application/mod.rs

pub mod search_providers;
pub mod sync_projection;
