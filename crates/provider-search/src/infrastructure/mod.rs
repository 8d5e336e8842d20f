// crates/provider-search/src/infrastructure/mod.rs

pub mod memory;
pub mod messaging;

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "worker")]
pub mod bootstrap;
