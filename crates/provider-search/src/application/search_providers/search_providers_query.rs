// crates/provider-search/src/application/search_providers/search_providers_query.rs

use std::collections::BTreeSet;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use shared_kernel::domain::pagination::PageRequest;
use shared_kernel::domain::value_objects::GeoPoint;
use shared_kernel::errors::Result;
use crate::domain::search::SearchQuery;
use crate::domain::value_objects::{ServiceId, SubscriptionTier};

/// Paramètres bruts d'une recherche, tels que reçus par la couche API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchProvidersQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub service_ids: Option<Vec<String>>,
    #[serde(default)]
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub tiers: Option<Vec<String>>,
    #[serde(default)]
    pub skip: Option<i64>,
    #[serde(default)]
    pub take: Option<i64>,
}

impl SearchProvidersQuery {
    pub const DEFAULT_TAKE: i64 = 20;

    pub fn new(latitude: f64, longitude: f64, radius_km: f64) -> Self {
        Self {
            latitude,
            longitude,
            radius_km,
            term: None,
            service_ids: None,
            min_rating: None,
            tiers: None,
            skip: None,
            take: None,
        }
    }

    /// Validation à la frontière : toute valeur invalide produit une `DomainError::Validation`.
    pub fn to_search_query(&self) -> Result<SearchQuery> {
        let origin = GeoPoint::try_new(self.latitude, self.longitude)?;

        let service_ids = self
            .service_ids
            .as_ref()
            .map(|ids| ids.iter().map(|s| ServiceId::from_str(s)).collect::<Result<BTreeSet<_>>>())
            .transpose()?;

        let tiers = self
            .tiers
            .as_ref()
            .map(|names| names.iter().map(|s| SubscriptionTier::from_str(s)).collect::<Result<BTreeSet<_>>>())
            .transpose()?;

        let page = PageRequest::try_new(
            self.skip.unwrap_or(0),
            self.take.unwrap_or(Self::DEFAULT_TAKE),
        )?;

        SearchQuery::builder(origin, self.radius_km)
            .with_term(self.term.clone())
            .with_service_ids(service_ids)
            .with_min_rating(self.min_rating)
            .with_tiers(tiers)
            .with_page(page)
            .build()
    }
}
