// crates/shared-kernel/src/infrastructure/kafka/kafka_message_consumer.rs

use crate::application::ports::{MessageConsumer, MessageHandler};
use crate::domain::events::EventEnvelope;
use crate::errors::{AppError, AppResult, ErrorCode};
use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::message::Message;
use tokio_util::sync::CancellationToken;

/// Consumer séquentiel "at-least-once" : l'offset d'un message n'est stocké
/// qu'après le succès du handler, puis commité par l'auto-commit de librdkafka.
pub struct KafkaMessageConsumer {
    client_config: ClientConfig,
    shutdown_token: CancellationToken,
}

impl KafkaMessageConsumer {
    pub fn new(brokers: &str, group_id: &str, shutdown_token: CancellationToken) -> Self {
        let mut config = ClientConfig::new();
        config
            .set("bootstrap.servers", brokers)
            .set("group.id", group_id)
            .set("enable.auto.commit", "true")
            .set("auto.commit.interval.ms", "5000")
            // Seuls les offsets stockés explicitement sont commités
            .set("enable.auto.offset.store", "false")
            .set("auto.offset.reset", "earliest")
            .set("session.timeout.ms", "45000")
            .set("max.poll.interval.ms", "300000");

        Self {
            client_config: config,
            shutdown_token,
        }
    }

    pub fn stop(&self) {
        tracing::info!("Signaling Kafka consumer to stop...");
        self.shutdown_token.cancel();
    }
}

#[async_trait]
impl MessageConsumer for KafkaMessageConsumer {
    async fn consume(&self, topic: &str, handler: MessageHandler) -> AppResult<()> {
        let consumer: StreamConsumer = self.client_config.create()?;
        consumer
            .subscribe(&[topic])
            .map_err(|e| AppError::new(ErrorCode::InfrastructureFailure, e.to_string()))?;

        tracing::info!(topic, "Kafka consumer subscribed");

        loop {
            let message = tokio::select! {
                _ = self.shutdown_token.cancelled() => break,
                result = consumer.recv() => match result {
                    Ok(m) => m.detach(),
                    Err(e) => {
                        tracing::error!(error = %e, "Kafka receive error");
                        continue;
                    }
                },
            };

            let (partition, offset) = (message.partition(), message.offset());

            if let Some(payload) = message.payload() {
                match EventEnvelope::decode(payload) {
                    Ok(envelope) => {
                        if let Err(e) = handler(envelope).await {
                            // Pas d'offset stocké : le message sera relivré au redémarrage
                            tracing::error!(
                                partition,
                                offset,
                                retryable = e.code.is_retryable(),
                                error = %e,
                                "Handler failed, stopping consumer"
                            );
                            return Err(e);
                        }
                    }
                    Err(e) => {
                        tracing::warn!(partition, offset, error = %e, "Skipping undecodable envelope");
                    }
                }
            }

            consumer.store_offset(message.topic(), partition, offset + 1)?;
        }

        tracing::info!("Kafka consumer loop stopped.");
        Ok(())
    }
}
