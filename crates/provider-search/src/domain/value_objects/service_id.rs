// crates/provider-search/src/domain/value_objects/service_id.rs

use shared_kernel::domain::Identifier;
use shared_kernel::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Service du catalogue proposé par un prestataire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(Uuid);

impl ServiceId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Identifier for ServiceId {
    fn as_uuid(&self) -> Uuid { self.0 }
    fn as_string(&self) -> String { self.0.to_string() }
    fn from_uuid(uuid: Uuid) -> Self { Self(uuid) }
}

impl Default for ServiceId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ServiceId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ServiceId {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| DomainError::Validation {
                field: "service_id",
                reason: format!("'{}' is not a valid UUID for ServiceId", s),
            })
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
