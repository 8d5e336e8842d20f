// crates/provider-search/tests/infrastructure/common/setup_postgres_test_db.rs

use shared_kernel::domain::value_objects::GeoPoint;
use shared_kernel::infrastructure::postgres::utils::PostgresTestContext;
use provider_search::domain::entities::SearchableProvider;
use provider_search::domain::value_objects::{ProviderName, Rating, SearchableProviderId, SubscriptionTier};

pub const SAO_PAULO: (f64, f64) = (-23.5505, -46.6333);
pub const RIO: (f64, f64) = (-22.9068, -43.1729);
pub const BELO_HORIZONTE: (f64, f64) = (-19.9167, -43.9345);

pub async fn setup_postgres_test_db() -> PostgresTestContext {
    PostgresTestContext::builder()
        .with_migrations(&["./migrations/postgres"])
        .build()
        .await
}

pub fn point((lat, lon): (f64, f64)) -> GeoPoint {
    GeoPoint::try_new(lat, lon).unwrap()
}

pub fn provider(name: &str, at: (f64, f64), tier: SubscriptionTier, rating: f64) -> SearchableProvider {
    SearchableProvider::builder(
        SearchableProviderId::new(),
        ProviderName::try_new(name).unwrap(),
        point(at),
        tier,
    )
        .with_rating(Rating::try_new(rating).unwrap())
        .build()
}
