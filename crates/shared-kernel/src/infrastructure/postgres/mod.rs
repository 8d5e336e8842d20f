// crates/shared-kernel/src/infrastructure/postgres/mod.rs

pub mod factories;
pub mod mappers;
pub mod transactions;

#[cfg(feature = "test-utils")]
pub mod utils;

pub use mappers::SqlxErrorExt;
pub use transactions::{PostgresTransaction, PostgresTransactionManager, TransactionExt};
