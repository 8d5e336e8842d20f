// crates/shared-kernel/src/domain/utils/retry.rs

use std::time::Duration;
use rand::Rng;
use crate::errors::{DomainError, Result};

#[derive(Debug, Clone, Copy)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff_ms: 20,
        }
    }
}

/// Exécute une action avec une stratégie de retry (Exponential Backoff + Jitter).
/// Seuls les conflits de concurrence sont rejoués ; toute autre erreur remonte immédiatement.
pub async fn with_retry<F, Fut, T>(config: RetryConfig, mut action: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    for attempt in 0..=config.max_retries {
        match action().await {
            Ok(res) => return Ok(res),
            Err(e) if e.is_concurrency_conflict() => {
                if attempt == config.max_retries {
                    break;
                }

                // 2^attempt * base
                let base_backoff = config.initial_backoff_ms * 2u64.pow(attempt);

                // Jitter entre 0 et 25% de la base pour désynchroniser les writers
                let jitter = rand::rng().random_range(0..base_backoff / 4 + 1);

                let backoff = Duration::from_millis(base_backoff + jitter);

                tracing::warn!(
                    attempt = attempt + 1,
                    max_retries = config.max_retries,
                    ?backoff,
                    "Concurrency conflict, retrying"
                );

                tokio::time::sleep(backoff).await;
            }
            Err(e) => return Err(e),
        }
    }

    Err(DomainError::TooManyConflicts(
        format!("Operation failed after {} retries due to persistent conflicts", config.max_retries)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn conflict() -> DomainError {
        DomainError::ConcurrencyConflict { reason: "version mismatch".into() }
    }

    fn fast() -> RetryConfig {
        RetryConfig { max_retries: 3, initial_backoff_ms: 1 }
    }

    #[tokio::test]
    async fn test_retry_succeeds_after_conflicts() {
        let calls = AtomicU32::new(0);

        let result = with_retry(fast(), || async {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            if n < 2 { Err(conflict()) } else { Ok(n) }
        }).await;

        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_gives_up_with_too_many_conflicts() {
        let calls = AtomicU32::new(0);

        let result: Result<()> = with_retry(fast(), || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(conflict())
        }).await;

        assert!(matches!(result, Err(DomainError::TooManyConflicts(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_retry_does_not_replay_other_errors() {
        let calls = AtomicU32::new(0);

        let result: Result<()> = with_retry(fast(), || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(DomainError::StorageUnavailable("pool closed".into()))
        }).await;

        assert!(matches!(result, Err(DomainError::StorageUnavailable(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
