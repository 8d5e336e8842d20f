// crates/provider-search/src/domain/value_objects/subscription_tier.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use shared_kernel::errors::{DomainError, Result};

/// Niveau d'abonnement d'un prestataire.
/// L'ordre de déclaration EST l'ordre métier : `Free < Standard < Gold < Platinum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Free,
    Standard,
    Gold,
    Platinum,
}

impl SubscriptionTier {
    pub const ALL: [SubscriptionTier; 4] = [
        SubscriptionTier::Free,
        SubscriptionTier::Standard,
        SubscriptionTier::Gold,
        SubscriptionTier::Platinum,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Standard => "standard",
            Self::Gold => "gold",
            Self::Platinum => "platinum",
        }
    }
}

impl Default for SubscriptionTier {
    fn default() -> Self {
        Self::Free
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == normalized)
            .ok_or_else(|| DomainError::Validation {
                field: "subscription_tier",
                reason: format!("Unknown subscription tier '{}'", normalized),
            })
    }
}
