// crates/provider-search/src/infrastructure/postgres/rows/postgres_searchable_provider_row.rs

use std::collections::BTreeSet;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;
use shared_kernel::domain::value_objects::GeoPoint;
use shared_kernel::errors::{DomainError, Result};
use crate::domain::entities::SearchableProvider;
use crate::domain::search::SearchHit;
use crate::domain::value_objects::{ProviderName, Rating, SearchableProviderId, ServiceId};
use crate::infrastructure::postgres::models::PostgresSubscriptionTier;

#[derive(Debug, FromRow)]
pub struct PostgresSearchableProviderRow {
    pub id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub subscription_tier: PostgresSubscriptionTier,
    pub rating: f64,
    pub service_ids: Vec<Uuid>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub version: i32,
}

/// Ligne de résultat de recherche : fiche + distance calculée en SQL.
#[derive(Debug, FromRow)]
pub struct PostgresSearchHitRow {
    #[sqlx(flatten)]
    pub provider: PostgresSearchableProviderRow,
    pub distance_km: f64,
}

impl TryFrom<PostgresSearchableProviderRow> for SearchableProvider {
    type Error = DomainError;

    fn try_from(row: PostgresSearchableProviderRow) -> Result<Self> {
        // Les contraintes SQL garantissent déjà les invariants : mapping direct
        Ok(SearchableProvider::restore(
            SearchableProviderId::from(row.id),
            ProviderName::from_raw(row.name),
            GeoPoint::from_raw(row.latitude, row.longitude),
            row.subscription_tier.into(),
            Rating::from_raw(row.rating),
            row.service_ids.into_iter().map(ServiceId::from).collect::<BTreeSet<_>>(),
            row.city,
            row.state,
            row.description,
            row.updated_at,
            row.version,
        ))
    }
}

impl TryFrom<PostgresSearchHitRow> for SearchHit {
    type Error = DomainError;

    fn try_from(row: PostgresSearchHitRow) -> Result<Self> {
        Ok(SearchHit {
            provider: row.provider.try_into()?,
            distance_km: row.distance_km,
        })
    }
}
