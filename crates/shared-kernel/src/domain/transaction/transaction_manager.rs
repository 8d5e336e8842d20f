// crates/shared-kernel/src/domain/transaction/transaction_manager.rs

use std::future::Future;
use std::pin::Pin;
use crate::domain::transaction::Transaction;
use crate::errors::Result;

pub trait TransactionManager: Send + Sync {
    fn in_transaction<'a>(
        &'a self,
        f: Box<dyn FnOnce(Box<dyn Transaction>) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> + Send + 'a>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}

/// Helper générique : accepte directement un bloc `async move`.
/// La closure reste responsable de `tx.commit()`.
pub trait TransactionManagerExt: TransactionManager {
    fn run_in_transaction<'a, F, Fut>(&'a self, f: F) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>
    where
        F: FnOnce(Box<dyn Transaction>) -> Fut + Send + 'a,
        Fut: Future<Output = Result<()>> + Send + 'a,
    {
        self.in_transaction(Box::new(move |tx| Box::pin(f(tx))))
    }
}

impl<T: TransactionManager + ?Sized> TransactionManagerExt for T {}
