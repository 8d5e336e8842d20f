// crates/provider-search/src/domain/mod.rs

pub mod builders;
pub mod entities;
pub mod events;
pub mod params;
pub mod repositories;
pub mod search;
pub mod value_objects;
