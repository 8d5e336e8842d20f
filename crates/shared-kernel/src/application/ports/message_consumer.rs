// crates/shared-kernel/src/application/ports/message_consumer.rs

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use crate::domain::events::EventEnvelope;
use crate::errors::AppResult;

/// Traitement d'une enveloppe décodée.
/// `Ok` acquitte le message ; `Err` l'interrompt sans acquittement (relivraison).
pub type MessageHandler = Box<dyn Fn(EventEnvelope) -> BoxFuture<'static, AppResult<()>> + Send + Sync>;

/// Boucle de consommation d'un topic ; rend la main à l'arrêt demandé
/// ou au premier échec du handler.
#[async_trait]
pub trait MessageConsumer: Send + Sync {
    async fn consume(&self, topic: &str, handler: MessageHandler) -> AppResult<()>;
}
