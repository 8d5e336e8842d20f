// crates/provider-search/src/infrastructure/messaging/provider_events_handler.rs

use std::sync::Arc;
use futures_util::FutureExt;
use shared_kernel::application::ports::MessageHandler;
use shared_kernel::domain::events::EventEnvelope;
use shared_kernel::errors::{AppResult, DomainError};
use crate::application::sync_projection::ProjectionSynchronizer;
use crate::domain::events::ProviderEvent;

/// Adaptateur bus -> synchroniseur.
/// Un message invalide est journalisé puis acquitté ; une panne du store remonte
/// pour que le message soit relivré.
#[derive(Clone)]
pub struct ProviderEventsHandler {
    synchronizer: Arc<ProjectionSynchronizer>,
}

impl ProviderEventsHandler {
    pub fn new(synchronizer: Arc<ProjectionSynchronizer>) -> Self {
        Self { synchronizer }
    }

    pub async fn handle_envelope(&self, envelope: EventEnvelope) -> AppResult<()> {
        let event = match ProviderEvent::from_envelope(&envelope) {
            Ok(Some(event)) => event,
            Ok(None) => {
                tracing::debug!(event_type = %envelope.event_type, "Ignoring unrelated event type");
                return Ok(());
            }
            Err(e) => {
                tracing::warn!(
                    event_id = %envelope.id,
                    event_type = %envelope.event_type,
                    error = %e,
                    "Skipping malformed provider event"
                );
                return Ok(());
            }
        };

        match self.synchronizer.handle(event).await {
            Ok(()) => Ok(()),
            // Un événement rejeté par le domaine ne passera jamais : on l'écarte
            Err(e @ DomainError::Validation { .. }) => {
                tracing::warn!(event_id = %envelope.id, error = %e, "Discarding invalid provider event");
                Ok(())
            }
            Err(e) => {
                tracing::error!(event_id = %envelope.id, error = %e, "Projection update failed");
                Err(e.into())
            }
        }
    }

    pub fn into_message_handler(self) -> MessageHandler {
        let handler = Arc::new(self);
        Box::new(move |envelope| {
            let handler = handler.clone();
            async move { handler.handle_envelope(envelope).await }.boxed()
        })
    }
}
