// crates/provider-search/src/infrastructure/bootstrap/projection_worker.rs

use std::env;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use shared_kernel::application::ports::MessageConsumer;
use shared_kernel::domain::transaction::TransactionManager;
use shared_kernel::domain::utils::RetryConfig;
use shared_kernel::errors::{AppError, AppResult, ErrorCode};
use shared_kernel::infrastructure::kafka::KafkaMessageConsumer;
use shared_kernel::infrastructure::postgres::factories::PostgresContext;
use shared_kernel::infrastructure::postgres::PostgresTransactionManager;
use crate::application::sync_projection::ProjectionSynchronizer;
use crate::domain::repositories::SearchableProviderRepository;
use crate::infrastructure::messaging::ProviderEventsHandler;
use crate::infrastructure::postgres::utils::run_postgres_migrations;
use crate::infrastructure::postgres::PostgresSearchableProviderRepository;

/// Préfixe des variables Postgres (`SEARCH_DB_URL`, `SEARCH_DB_MAX_CONNECTIONS`, ...)
const DB_ENV_PREFIX: &str = "SEARCH_DB";

#[derive(Debug, Clone)]
pub struct ProjectionWorkerConfig {
    pub brokers: String,
    pub topic: String,
    pub group_id: String,
    pub retry: RetryConfig,
}

impl ProjectionWorkerConfig {
    pub fn from_env() -> Self {
        let defaults = RetryConfig::default();

        Self {
            brokers: env::var("KAFKA_BROKERS").unwrap_or_else(|_| "localhost:9092".into()),
            topic: env::var("PROVIDER_EVENTS_TOPIC").unwrap_or_else(|_| "provider.events".into()),
            group_id: env::var("PROVIDER_SEARCH_GROUP_ID").unwrap_or_else(|_| "provider-search-projection".into()),
            retry: RetryConfig {
                max_retries: env_parse("PROJECTION_MAX_RETRIES").unwrap_or(defaults.max_retries),
                initial_backoff_ms: env_parse("PROJECTION_BACKOFF_MS").unwrap_or(defaults.initial_backoff_ms),
            },
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

pub async fn run_projection_worker() -> AppResult<()> {
    // 1. Logs
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ProjectionWorkerConfig::from_env();
    tracing::info!(topic = %config.topic, group_id = %config.group_id, "Starting provider search projection worker");

    // 2. Store + schéma
    let context = PostgresContext::builder(DB_ENV_PREFIX)?.build().await?;

    run_postgres_migrations(&context.pool())
        .await
        .map_err(|e| AppError::new(ErrorCode::InfrastructureFailure, format!("Migrations failed: {e}")))?;

    // 3. Montage
    let repo: Arc<dyn SearchableProviderRepository> =
        Arc::new(PostgresSearchableProviderRepository::new(context.pool()));
    let tx_manager: Arc<dyn TransactionManager> = Arc::new(PostgresTransactionManager::new(context.pool()));

    let synchronizer = Arc::new(ProjectionSynchronizer::new(repo, tx_manager).with_retry_config(config.retry));
    let handler = ProviderEventsHandler::new(synchronizer).into_message_handler();

    // 4. Arrêt propre
    let shutdown = CancellationToken::new();
    let consumer = Arc::new(KafkaMessageConsumer::new(&config.brokers, &config.group_id, shutdown.clone()));

    let consumer_for_shutdown = consumer.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::warn!("Shutdown signal received");
                consumer_for_shutdown.stop();
            }
            Err(e) => tracing::error!(error = %e, "Unable to listen for shutdown signal"),
        }
    });

    // 5. Exécution
    consumer.consume(&config.topic, handler).await?;

    tracing::info!("Projection worker exited clean");
    Ok(())
}
