// crates/shared-kernel/src/domain/pagination.rs

use serde::{Deserialize, Serialize};
use crate::errors::{DomainError, Result};

/// Fenêtre skip/take appliquée après filtrage et tri.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    skip: u64,
    take: u64,
}

impl PageRequest {
    pub fn try_new(skip: i64, take: i64) -> Result<Self> {
        if skip < 0 {
            return Err(DomainError::Validation {
                field: "skip",
                reason: "Must be greater than or equal to 0".to_string(),
            });
        }
        if take <= 0 {
            return Err(DomainError::Validation {
                field: "take",
                reason: "Must be greater than 0".to_string(),
            });
        }
        Ok(Self { skip: skip as u64, take: take as u64 })
    }

    pub fn skip(&self) -> u64 { self.skip }
    pub fn take(&self) -> u64 { self.take }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { skip: 0, take: 20 }
    }
}
