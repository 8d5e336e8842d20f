// crates/shared-kernel/src/infrastructure/postgres/transactions/postgres_transaction.rs

use std::future::Future;
use std::pin::Pin;
use sqlx::{PgConnection, PgPool, Postgres, Transaction as PostgresTx};
use crate::domain::transaction::Transaction;
use crate::errors::{Result, DomainError};
use crate::infrastructure::postgres::mappers::SqlxErrorExt;

/// Wrapper concret autour de la transaction sqlx.
/// Un drop sans `commit` déclenche le rollback côté sqlx.
pub struct PostgresTransaction {
    inner: PostgresTx<'static, Postgres>,
}

impl PostgresTransaction {
    pub fn new(tx: PostgresTx<'static, Postgres>) -> Self {
        Self { inner: tx }
    }

    pub fn get_mut(&mut self) -> &mut PostgresTx<'static, Postgres> {
        &mut self.inner
    }
}

impl Transaction for PostgresTransaction {
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn commit(self: Box<Self>) -> Pin<Box<dyn Future<Output = Result<()>> + Send>> {
        Box::pin(async move {
            self.inner.commit().await.map_domain_infra("Failed to commit transaction")
        })
    }
}

impl dyn Transaction + '_ {
    pub async fn execute_on<'a, F, T>(
        pool: &PgPool,
        tx: Option<&'a mut dyn Transaction>,
        f: F,
    ) -> Result<T>
    where
        F: for<'b> FnOnce(&'b mut PgConnection) -> Pin<Box<dyn Future<Output = Result<T>> + Send + 'b>> + Send,
    {
        match tx {
            // Transaction fournie : downcast puis exécution dessus
            Some(t) => {
                let sqlx_tx = t.downcast_mut_sqlx()?;
                f(&mut **sqlx_tx).await
            }
            // Sinon connexion simple du pool (autocommit)
            None => {
                let mut conn = pool.acquire().await
                    .map_domain_infra("Pool acquisition failed")?;
                f(&mut *conn).await
            }
        }
    }
}

pub trait TransactionExt {
    fn downcast_mut_sqlx(&mut self) -> Result<&mut PostgresTx<'static, Postgres>>;
}

impl TransactionExt for dyn Transaction + '_ {
    fn downcast_mut_sqlx(&mut self) -> Result<&mut PostgresTx<'static, Postgres>> {
        self.as_any_mut()
            .downcast_mut::<PostgresTransaction>()
            .map(|tx| tx.get_mut())
            .ok_or_else(|| DomainError::Internal("Type mismatch: Expected PostgresTransaction".into()))
    }
}
