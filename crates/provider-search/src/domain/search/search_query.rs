// crates/provider-search/src/domain/search/search_query.rs

use std::collections::BTreeSet;
use shared_kernel::domain::pagination::PageRequest;
use shared_kernel::domain::value_objects::GeoPoint;
use shared_kernel::errors::{DomainError, Result};
use crate::domain::value_objects::{ServiceId, SubscriptionTier};

/// Requête de recherche validée. Tous les filtres sauf le rayon sont optionnels.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    origin: GeoPoint,
    radius_km: f64,
    term: Option<String>,
    service_ids: Option<BTreeSet<ServiceId>>,
    min_rating: Option<f64>,
    subscription_tiers: Option<BTreeSet<SubscriptionTier>>,
    page: PageRequest,
}

impl SearchQuery {
    pub fn builder(origin: GeoPoint, radius_km: f64) -> SearchQueryBuilder {
        SearchQueryBuilder::new(origin, radius_km)
    }

    pub fn origin(&self) -> &GeoPoint { &self.origin }
    pub fn radius_km(&self) -> f64 { self.radius_km }
    pub fn service_ids(&self) -> Option<&BTreeSet<ServiceId>> { self.service_ids.as_ref() }
    pub fn min_rating(&self) -> Option<f64> { self.min_rating }
    pub fn subscription_tiers(&self) -> Option<&BTreeSet<SubscriptionTier>> { self.subscription_tiers.as_ref() }
    pub fn page(&self) -> PageRequest { self.page }

    /// Terme brut tel que fourni par l'appelant
    pub fn term(&self) -> Option<&str> { self.term.as_deref() }

    /// Terme effectif : trim + minuscules, `None` s'il est vide
    pub fn normalized_term(&self) -> Option<String> {
        self.term
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }
}

pub struct SearchQueryBuilder {
    origin: GeoPoint,
    radius_km: f64,
    term: Option<String>,
    service_ids: Option<BTreeSet<ServiceId>>,
    min_rating: Option<f64>,
    subscription_tiers: Option<BTreeSet<SubscriptionTier>>,
    page: PageRequest,
}

impl SearchQueryBuilder {
    pub fn new(origin: GeoPoint, radius_km: f64) -> Self {
        Self {
            origin,
            radius_km,
            term: None,
            service_ids: None,
            min_rating: None,
            subscription_tiers: None,
            page: PageRequest::default(),
        }
    }

    pub fn with_term(mut self, term: Option<String>) -> Self {
        self.term = term;
        self
    }

    pub fn with_service_ids(mut self, service_ids: Option<BTreeSet<ServiceId>>) -> Self {
        self.service_ids = service_ids;
        self
    }

    pub fn with_min_rating(mut self, min_rating: Option<f64>) -> Self {
        self.min_rating = min_rating;
        self
    }

    pub fn with_tiers(mut self, tiers: Option<BTreeSet<SubscriptionTier>>) -> Self {
        self.subscription_tiers = tiers;
        self
    }

    pub fn with_page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }

    pub fn build(self) -> Result<SearchQuery> {
        if !self.radius_km.is_finite() || self.radius_km < 0.0 {
            return Err(DomainError::Validation {
                field: "radius_km",
                reason: "Radius must be a finite number >= 0".to_string(),
            });
        }

        if let Some(min) = self.min_rating {
            if !min.is_finite() {
                return Err(DomainError::Validation {
                    field: "min_rating",
                    reason: "Minimum rating must be a finite number".to_string(),
                });
            }
        }

        Ok(SearchQuery {
            origin: self.origin,
            radius_km: self.radius_km,
            term: self.term,
            service_ids: self.service_ids,
            min_rating: self.min_rating,
            subscription_tiers: self.subscription_tiers,
            page: self.page,
        })
    }
}
