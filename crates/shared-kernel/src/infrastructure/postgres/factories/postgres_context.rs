// crates/shared-kernel/src/infrastructure/postgres/factories/postgres_context.rs

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::postgres::factories::{PostgresConfig, PostgresContextBuilder};

pub struct PostgresContext {
    pool: PgPool,
    url: String,
    config: PostgresConfig,
}

impl PostgresContext {
    /// Builder alimenté par les variables `{prefix}_URL`, `{prefix}_MAX_CONNECTIONS`, ...
    pub fn builder(prefix: &str) -> AppResult<PostgresContextBuilder> {
        PostgresContextBuilder::from_env(prefix)
    }

    pub fn builder_raw() -> PostgresContextBuilder {
        PostgresContextBuilder::default()
    }

    pub fn pool(&self) -> PgPool {
        self.pool.clone()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn config(&self) -> PostgresConfig {
        self.config
    }

    pub(crate) async fn restore(builder: PostgresContextBuilder) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(builder.max_connections)
            .min_connections(builder.min_connections)
            .acquire_timeout(builder.connect_timeout)
            .connect(&builder.url)
            .await
            .map_err(|e| AppError::new(ErrorCode::ServiceUnavailable, format!("Postgres Connection Failed: {}", e)))?;

        tracing::info!(
            max_connections = builder.max_connections,
            min_connections = builder.min_connections,
            "Postgres pool ready"
        );

        Ok(Self {
            pool,
            config: PostgresConfig::new(
                builder.max_connections,
                builder.min_connections,
                builder.connect_timeout,
            ),
            url: builder.url,
        })
    }
}
