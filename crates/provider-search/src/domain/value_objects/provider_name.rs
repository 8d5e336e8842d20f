// crates/provider-search/src/domain/value_objects/provider_name.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ProviderName(String);

impl ProviderName {
    pub const MAX_LENGTH: usize = 200;

    /// Constructeur sécurisé (événements entrants)
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();

        // Retrait des caractères de contrôle et des espaces superflus
        let normalized = raw
            .chars()
            .filter(|c| !c.is_control())
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        let name = Self(normalized);
        name.validate()?;
        Ok(name)
    }

    /// Reconstruction rapide (Infrastructure / DB)
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ProviderName {
    fn validate(&self) -> Result<()> {
        if self.0.trim().is_empty() {
            return Err(DomainError::Validation {
                field: "name",
                reason: "Provider name cannot be empty".into(),
            });
        }

        if self.0.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::Validation {
                field: "name",
                reason: format!("Provider name too long (max {})", Self::MAX_LENGTH),
            });
        }

        Ok(())
    }
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ProviderName {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<ProviderName> for String {
    fn from(name: ProviderName) -> Self {
        name.0
    }
}
