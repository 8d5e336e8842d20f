// crates/provider-search/src/domain/value_objects/rating.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Note moyenne agrégée d'un prestataire (réel fini, >= 0).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(f64);

impl Rating {
    pub fn try_new(value: f64) -> Result<Self> {
        let rating = Self(value);
        rating.validate()?;
        Ok(rating)
    }

    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_raw(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl ValueObject for Rating {
    fn validate(&self) -> Result<()> {
        if !self.0.is_finite() || self.0 < 0.0 {
            return Err(DomainError::Validation {
                field: "rating",
                reason: "Rating must be a finite number >= 0".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl TryFrom<f64> for Rating {
    type Error = DomainError;
    fn try_from(value: f64) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Rating> for f64 {
    fn from(r: Rating) -> Self {
        r.0
    }
}
