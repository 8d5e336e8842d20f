// crates/shared-kernel/src/domain/transaction/transaction.rs

use std::any::Any;
use std::future::Future;
use std::pin::Pin;
use crate::errors::Result;

/// Unité de travail opaque pour le domaine.
/// Rien n'est visible hors de la transaction avant `commit` ;
/// une transaction abandonnée (drop) est annulée.
pub trait Transaction: Send + Any {
    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn commit(self: Box<Self>) -> Pin<Box<dyn Future<Output = Result<()>> + Send>>;
}
