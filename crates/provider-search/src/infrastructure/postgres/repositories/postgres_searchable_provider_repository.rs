// crates/provider-search/src/infrastructure/postgres/repositories/postgres_searchable_provider_repository.rs

use async_trait::async_trait;
use sqlx::{query, query_as, query_scalar, Pool, Postgres};
use uuid::Uuid;
use shared_kernel::domain::entities::AggregateRoot;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::domain::Identifier;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use crate::domain::entities::SearchableProvider;
use crate::domain::repositories::SearchableProviderRepository;
use crate::domain::search::{SearchHit, SearchQuery, SearchResult};
use crate::domain::value_objects::SearchableProviderId;
use crate::infrastructure::postgres::models::PostgresSubscriptionTier;
use crate::infrastructure::postgres::rows::{PostgresSearchHitRow, PostgresSearchableProviderRow};

const PROVIDER_COLUMNS: &str = r#"
    id, name, latitude, longitude, subscription_tier, rating,
    service_ids, city, state, description, updated_at, version
"#;

/// Candidats filtrés avec leur distance haversine (R = 6371 km, terme borné à [0, 1]).
/// `ST_DWithin` sert uniquement de préfiltre indexé, élargi de 1 % car il
/// mesure sur l'ellipsoïde ; la borne stricte porte sur `distance_km`.
///
/// $1 lat, $2 lon, $3 rayon km, $4 terme normalisé, $5 services, $6 note min, $7 niveaux
const CANDIDATES_CTE: &str = r#"
    WITH prefiltered AS (
        SELECT sp.*,
               GREATEST(0.0::float8, LEAST(1.0::float8,
                   power(sin(radians(sp.latitude - $1) / 2), 2)
                     + cos(radians($1)) * cos(radians(sp.latitude))
                     * power(sin(radians(sp.longitude - $2) / 2), 2)
               )) AS hav
        FROM searchable_providers sp
        WHERE ST_DWithin(
                  sp.location,
                  ST_SetSRID(ST_MakePoint($2, $1), 4326)::geography,
                  $3 * 1000.0 * 1.01
              )
          AND ($4::text IS NULL OR strpos(lower(sp.name), $4) > 0)
          AND ($5::uuid[] IS NULL OR sp.service_ids && $5)
          AND ($6::float8 IS NULL OR sp.rating >= $6)
          AND ($7::subscription_tier[] IS NULL OR sp.subscription_tier = ANY($7))
    ),
    candidates AS (
        SELECT prefiltered.*,
               2 * 6371.0 * atan2(sqrt(hav), sqrt(1 - hav)) AS distance_km
        FROM prefiltered
    )
"#;

/// Paramètres de filtre possédés, bindés à l'identique sur le count et la page.
struct SearchBinds {
    lat: f64,
    lon: f64,
    radius_km: f64,
    term: Option<String>,
    service_ids: Option<Vec<Uuid>>,
    min_rating: Option<f64>,
    tiers: Option<Vec<PostgresSubscriptionTier>>,
}

impl SearchBinds {
    fn from_query(q: &SearchQuery) -> Self {
        Self {
            lat: q.origin().lat(),
            lon: q.origin().lon(),
            radius_km: q.radius_km(),
            term: q.normalized_term(),
            service_ids: q.service_ids().map(|ids| ids.iter().map(|s| s.as_uuid()).collect()),
            min_rating: q.min_rating(),
            tiers: q.subscription_tiers().map(|t| t.iter().copied().map(Into::into).collect()),
        }
    }
}

macro_rules! bind_filters {
    ($q:expr, $b:expr) => {
        $q.bind($b.lat)
            .bind($b.lon)
            .bind($b.radius_km)
            .bind($b.term.clone())
            .bind($b.service_ids.clone())
            .bind($b.min_rating)
            .bind($b.tiers.clone())
    };
}

pub struct PostgresSearchableProviderRepository {
    pool: Pool<Postgres>,
}

impl PostgresSearchableProviderRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SearchableProviderRepository for PostgresSearchableProviderRepository {
    // --- RECHERCHE ---

    #[tracing::instrument(name = "postgres.search_providers", skip(self, q), fields(radius_km = q.radius_km()))]
    async fn search(&self, q: &SearchQuery) -> Result<SearchResult> {
        let binds = SearchBinds::from_query(q);
        let page = q.page();

        let count_sql = format!("{CANDIDATES_CTE} SELECT COUNT(*) FROM candidates WHERE distance_km < $3");
        let page_sql = format!(
            r#"{CANDIDATES_CTE}
            SELECT {PROVIDER_COLUMNS}, distance_km
            FROM candidates
            WHERE distance_km < $3
            ORDER BY subscription_tier DESC, rating DESC, distance_km ASC, id ASC
            OFFSET $8 LIMIT $9"#
        );

        // Count et page lus sur le même snapshot
        let mut tx = self.pool.begin().await.map_domain_infra("SearchBegin")?;

        query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_domain_infra("SearchSnapshot")?;

        let total: i64 = bind_filters!(query_scalar::<Postgres, i64>(&count_sql), binds)
            .fetch_one(&mut *tx)
            .await
            .map_domain::<SearchableProvider>()?;

        let rows = bind_filters!(query_as::<Postgres, PostgresSearchHitRow>(&page_sql), binds)
            .bind(page.skip() as i64)
            .bind(page.take() as i64)
            .fetch_all(&mut *tx)
            .await
            .map_domain::<SearchableProvider>()?;

        tx.commit().await.map_domain_infra("SearchCommit")?;

        let hits = rows
            .into_iter()
            .map(SearchHit::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(SearchResult {
            hits,
            total_count: u64::try_from(total).unwrap_or_default(),
        })
    }

    // --- LECTURE UNITAIRE ---

    async fn find_by_id(
        &self,
        id: &SearchableProviderId,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<Option<SearchableProvider>> {
        let uid = id.as_uuid();
        let has_tx = tx.is_some();

        let row = <dyn Transaction>::execute_on(&self.pool, tx, |conn| {
            Box::pin(async move {
                // Verrou de ligne dans une transaction : sérialise les écrivains concurrents
                let sql = if has_tx {
                    format!("SELECT {PROVIDER_COLUMNS} FROM searchable_providers WHERE id = $1 FOR UPDATE")
                } else {
                    format!("SELECT {PROVIDER_COLUMNS} FROM searchable_providers WHERE id = $1")
                };

                query_as::<_, PostgresSearchableProviderRow>(&sql)
                    .bind(uid)
                    .fetch_optional(conn)
                    .await
                    .map_domain::<SearchableProvider>()
            })
        })
        .await?;

        row.map(SearchableProvider::try_from).transpose()
    }

    // --- ÉCRITURES ---

    async fn add(&self, provider: &SearchableProvider, tx: Option<&mut dyn Transaction>) -> Result<()> {
        let p = provider.clone();

        <dyn Transaction>::execute_on(&self.pool, tx, |conn| {
            Box::pin(async move {
                query(
                    r#"
                    INSERT INTO searchable_providers (
                        id, name, latitude, longitude, location,
                        subscription_tier, rating, service_ids,
                        city, state, description, updated_at, version
                    )
                    VALUES (
                        $1, $2, $3, $4,
                        ST_SetSRID(ST_MakePoint($4, $3), 4326)::geography,
                        $5, $6, $7, $8, $9, $10, $11, $12
                    )
                    "#,
                )
                    .bind(p.id().as_uuid())
                    .bind(p.name().as_str())
                    .bind(p.location().lat())
                    .bind(p.location().lon())
                    .bind(PostgresSubscriptionTier::from(p.subscription_tier()))
                    .bind(p.rating().value())
                    .bind(p.service_ids().iter().map(|s| s.as_uuid()).collect::<Vec<_>>())
                    .bind(p.city())
                    .bind(p.state())
                    .bind(p.description())
                    .bind(p.updated_at())
                    .bind(p.version())
                    .execute(conn)
                    .await
                    .map_domain::<SearchableProvider>()
            })
        })
        .await?;

        Ok(())
    }

    async fn update(&self, provider: &SearchableProvider, tx: Option<&mut dyn Transaction>) -> Result<()> {
        let p = provider.clone();

        let affected = <dyn Transaction>::execute_on(&self.pool, tx, |conn| {
            Box::pin(async move {
                // OCC : la ligne doit encore porter la version précédente
                let res = query(
                    r#"
                    UPDATE searchable_providers SET
                        name = $2,
                        latitude = $3,
                        longitude = $4,
                        location = ST_SetSRID(ST_MakePoint($4, $3), 4326)::geography,
                        subscription_tier = $5,
                        rating = $6,
                        service_ids = $7,
                        city = $8,
                        state = $9,
                        description = $10,
                        updated_at = $11,
                        version = $12
                    WHERE id = $1 AND version = $12 - 1
                    "#,
                )
                    .bind(p.id().as_uuid())
                    .bind(p.name().as_str())
                    .bind(p.location().lat())
                    .bind(p.location().lon())
                    .bind(PostgresSubscriptionTier::from(p.subscription_tier()))
                    .bind(p.rating().value())
                    .bind(p.service_ids().iter().map(|s| s.as_uuid()).collect::<Vec<_>>())
                    .bind(p.city())
                    .bind(p.state())
                    .bind(p.description())
                    .bind(p.updated_at())
                    .bind(p.version())
                    .execute(conn)
                    .await
                    .map_domain::<SearchableProvider>()?;

                Ok(res.rows_affected())
            })
        })
        .await?;

        if affected == 0 {
            return Err(DomainError::ConcurrencyConflict {
                reason: format!(
                    "SearchableProvider {} was modified or removed (expected version {})",
                    provider.id(),
                    provider.version() - 1
                ),
            });
        }

        Ok(())
    }

    async fn delete(&self, id: &SearchableProviderId, tx: Option<&mut dyn Transaction>) -> Result<()> {
        let uid = id.as_uuid();

        <dyn Transaction>::execute_on(&self.pool, tx, |conn| {
            Box::pin(async move {
                query("DELETE FROM searchable_providers WHERE id = $1")
                    .bind(uid)
                    .execute(conn)
                    .await
                    .map_domain::<SearchableProvider>()
            })
        })
        .await?;

        Ok(())
    }
}
