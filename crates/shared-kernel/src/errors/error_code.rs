// crates/shared-kernel/src/errors/error_code.rs

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationFailed,
    NotFound,
    AlreadyExists,
    ConcurrencyConflict,
    InternalError,
    InfrastructureFailure,
    ServiceUnavailable,
}

impl ErrorCode {
    /// Échec transitoire : rejouer la même opération plus tard peut réussir.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConcurrencyConflict | Self::InfrastructureFailure | Self::ServiceUnavailable
        )
    }
}
