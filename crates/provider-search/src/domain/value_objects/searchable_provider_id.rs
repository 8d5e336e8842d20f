// crates/provider-search/src/domain/value_objects/searchable_provider_id.rs

use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::domain::Identifier;
use shared_kernel::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifiant de la fiche de recherche, identique à celui du Provider (1:1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchableProviderId(Uuid);

impl SearchableProviderId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn try_new(id: impl Into<String>) -> Result<Self> {
        Self::from_str(&id.into())
    }
}

impl Identifier for SearchableProviderId {
    fn as_uuid(&self) -> Uuid {
        self.0
    }

    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl ValueObject for SearchableProviderId {
    fn validate(&self) -> Result<()> {
        if self.0.is_nil() {
            return Err(DomainError::Validation {
                field: "provider_id",
                reason: "Provider ID cannot be nil".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for SearchableProviderId {
    fn default() -> Self {
        Self::new()
    }
}

// --- CONVERSIONS ---

impl From<Uuid> for SearchableProviderId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for SearchableProviderId {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| DomainError::Validation {
                field: "provider_id",
                reason: format!("'{}' is not a valid UUID for SearchableProviderId", s),
            })
    }
}

impl fmt::Display for SearchableProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
