// crates/shared-kernel/src/infrastructure/postgres/transactions/postgres_transaction_manager.rs

use std::future::Future;
use std::pin::Pin;
use sqlx::PgPool;
use crate::domain::transaction::{Transaction, TransactionManager};
use crate::errors::Result;
use crate::infrastructure::postgres::mappers::SqlxErrorExt;
use crate::infrastructure::postgres::transactions::PostgresTransaction;

/// Ouvre une transaction sqlx par unité de travail.
/// Si la closure échoue avant `commit()`, le drop de la transaction fait le rollback.
#[derive(Clone)]
pub struct PostgresTransactionManager {
    pool: PgPool,
}

impl PostgresTransactionManager {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TransactionManager for PostgresTransactionManager {
    fn in_transaction<'a>(
        &'a self,
        f: Box<dyn FnOnce(Box<dyn Transaction>) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> + Send + 'a>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            let tx = self.pool.begin().await.map_domain_infra("Failed to begin transaction")?;

            let outcome = f(Box::new(PostgresTransaction::new(tx))).await;

            if let Err(e) = &outcome {
                tracing::debug!(error = %e, "Unit of work failed, transaction rolled back");
            }
            outcome
        })
    }
}
