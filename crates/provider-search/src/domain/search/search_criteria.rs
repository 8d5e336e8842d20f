// crates/provider-search/src/domain/search/search_criteria.rs

use std::collections::BTreeSet;
use shared_kernel::domain::value_objects::{distance_km, GeoPoint};
use crate::domain::entities::SearchableProvider;
use crate::domain::search::SearchQuery;
use crate::domain::value_objects::{ServiceId, SubscriptionTier};

/// Prédicat conjonctif dérivé d'une `SearchQuery`.
pub struct SearchCriteria<'q> {
    origin: &'q GeoPoint,
    radius_km: f64,
    term: Option<String>,
    service_ids: Option<&'q BTreeSet<ServiceId>>,
    min_rating: Option<f64>,
    tiers: Option<&'q BTreeSet<SubscriptionTier>>,
}

impl<'q> SearchCriteria<'q> {
    pub fn from_query(query: &'q SearchQuery) -> Self {
        Self {
            origin: query.origin(),
            radius_km: query.radius_km(),
            term: query.normalized_term(),
            service_ids: query.service_ids(),
            min_rating: query.min_rating(),
            tiers: query.subscription_tiers(),
        }
    }

    /// Retourne la distance si la fiche passe tous les filtres.
    pub fn evaluate(&self, provider: &SearchableProvider) -> Option<f64> {
        // 1. Géospatial : inégalité stricte, un rayon nul ne retient rien
        let distance = distance_km(self.origin, provider.location());
        if distance.is_nan() || distance >= self.radius_km {
            return None;
        }

        // 2. Terme (sous-chaîne, insensible à la casse)
        if let Some(term) = &self.term {
            if !provider.name().as_str().to_lowercase().contains(term.as_str()) {
                return None;
            }
        }

        // 3. Services : intersection non vide
        if let Some(wanted) = self.service_ids {
            if wanted.is_disjoint(provider.service_ids()) {
                return None;
            }
        }

        // 4. Note minimale
        if let Some(min) = self.min_rating {
            if provider.rating().value() < min {
                return None;
            }
        }

        // 5. Niveaux d'abonnement
        if let Some(tiers) = self.tiers {
            if !tiers.contains(&provider.subscription_tier()) {
                return None;
            }
        }

        Some(distance)
    }
}
