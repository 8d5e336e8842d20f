// crates/shared_kernel/src/domain/value_objects/latitude.rs

use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// La désérialisation passe par `try_new` : une coordonnée hors bornes
/// venant d'un événement est rejetée à la frontière.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Latitude(f64);

impl Latitude {
    pub fn try_new(val: f64) -> Result<Self> {
        let lat = Self(val);
        lat.validate()?;
        Ok(lat)
    }

    pub fn from_raw(val: f64) -> Self {
        Self(val)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl ValueObject for Latitude {
    fn validate(&self) -> Result<()> {
        // NaN n'est contenu dans aucun intervalle, il est donc rejeté ici aussi
        if !(-90.0..=90.0).contains(&self.0) {
            return Err(DomainError::Validation {
                field: "latitude",
                reason: "Range must be between -90 and 90".to_string(),
            });
        }
        Ok(())
    }
}

impl TryFrom<f64> for Latitude {
    type Error = DomainError;

    fn try_from(val: f64) -> Result<Self> {
        Self::try_new(val)
    }
}

impl From<Latitude> for f64 {
    fn from(lat: Latitude) -> Self {
        lat.0
    }
}

impl FromStr for Latitude {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        let val = s
            .trim()
            .parse::<f64>()
            .map_err(|_| DomainError::Validation {
                field: "latitude",
                reason: "Invalid number format".to_string(),
            })?;
        Self::try_new(val)
    }
}
