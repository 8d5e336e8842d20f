// crates/shared_kernel/src/domain/value_objects/geo_point.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use crate::domain::value_objects::{Latitude, Longitude, ValueObject};
use crate::errors::{DomainError, Result};

/// Rayon moyen de la sphère terrestre utilisé pour toutes les distances du système.
/// Le SQL de recherche réutilise la même constante pour garder un classement reproductible.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: Latitude,
    longitude: Longitude,
}

impl GeoPoint {
    pub fn try_new(lat: f64, lon: f64) -> Result<Self> {
        Ok(Self {
            latitude: Latitude::try_new(lat)?,
            longitude: Longitude::try_new(lon)?,
        })
    }

    /// Reconstruction sans validation (lignes DB déjà contraintes)
    pub fn from_raw(lat: f64, lon: f64) -> Self {
        Self {
            latitude: Latitude::from_raw(lat),
            longitude: Longitude::from_raw(lon),
        }
    }

    // --- Getters ---
    pub fn lat(&self) -> f64 { self.latitude.value() }
    pub fn lon(&self) -> f64 { self.longitude.value() }

    /// Distance orthodromique (haversine) en kilomètres.
    pub fn distance_km_to(&self, other: &GeoPoint) -> f64 {
        let phi1 = self.lat().to_radians();
        let phi2 = other.lat().to_radians();

        let delta_phi = (other.lat() - self.lat()).to_radians();
        let delta_lambda = (other.lon() - self.lon()).to_radians();

        let a = (delta_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
        // L'arrondi peut dépasser 1.0 près des antipodes
        let a = a.clamp(0.0, 1.0);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

/// Forme libre de `GeoPoint::distance_km_to`, symétrique en `a` et `b`.
pub fn distance_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    a.distance_km_to(b)
}

impl ValueObject for GeoPoint {
    fn validate(&self) -> Result<()> {
        self.latitude.validate()?;
        self.longitude.validate()?;
        Ok(())
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat(), self.lon())
    }
}

impl std::str::FromStr for GeoPoint {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 2 {
            return Err(DomainError::Validation { field: "geopoint", reason: "Format 'lat,lon' expected".to_string() });
        }

        let lat = Latitude::from_str(parts[0])?;
        let lon = Longitude::from_str(parts[1])?;

        Ok(Self { latitude: lat, longitude: lon })
    }
}
