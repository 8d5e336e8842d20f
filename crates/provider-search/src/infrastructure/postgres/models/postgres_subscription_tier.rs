// crates/provider-search/src/infrastructure/postgres/models/postgres_subscription_tier.rs

use sqlx::Type;
use crate::domain::value_objects::SubscriptionTier;

/// Représentation technique du niveau d'abonnement pour PostgreSQL.
/// L'ordre de l'enum SQL suit l'ordre métier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Type)]
#[sqlx(type_name = "subscription_tier", rename_all = "lowercase")]
pub enum PostgresSubscriptionTier {
    Free,
    Standard,
    Gold,
    Platinum,
}

// --- CONVERSIONS ---

/// DB -> DOMAINE (Lecture)
impl From<PostgresSubscriptionTier> for SubscriptionTier {
    fn from(sql_tier: PostgresSubscriptionTier) -> Self {
        match sql_tier {
            PostgresSubscriptionTier::Free => SubscriptionTier::Free,
            PostgresSubscriptionTier::Standard => SubscriptionTier::Standard,
            PostgresSubscriptionTier::Gold => SubscriptionTier::Gold,
            PostgresSubscriptionTier::Platinum => SubscriptionTier::Platinum,
        }
    }
}

/// DOMAINE -> DB (Écriture)
impl From<SubscriptionTier> for PostgresSubscriptionTier {
    fn from(tier: SubscriptionTier) -> Self {
        match tier {
            SubscriptionTier::Free => PostgresSubscriptionTier::Free,
            SubscriptionTier::Standard => PostgresSubscriptionTier::Standard,
            SubscriptionTier::Gold => PostgresSubscriptionTier::Gold,
            SubscriptionTier::Platinum => PostgresSubscriptionTier::Platinum,
        }
    }
}
