// crates/shared-kernel/src/domain/transaction/transaction_manager_stub.rs

use std::future::Future;
use std::pin::Pin;
use crate::domain::transaction::{Transaction, TransactionManager};
use crate::domain::transaction::transaction_stub::FakeTransaction;
use crate::errors::Result;

pub struct StubTxManager;

impl TransactionManager for StubTxManager {
    fn in_transaction<'a>(
        &'a self,
        f: Box<dyn FnOnce(Box<dyn Transaction>) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> + Send + 'a>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        let tx = Box::new(FakeTransaction);
        Box::pin(async move { f(tx).await })
    }
}
