// crates/provider-search/src/domain/params/provider_profile.rs

use shared_kernel::domain::value_objects::GeoPoint;
use crate::domain::value_objects::{ProviderName, Rating, SubscriptionTier};

/// Champs descriptifs d'une fiche, remplacés en bloc par `update_profile`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderProfile {
    pub name: ProviderName,
    pub location: GeoPoint,
    pub tier: SubscriptionTier,
    pub rating: Rating,
    pub city: Option<String>,
    pub state: Option<String>,
    pub description: Option<String>,
}
