// crates/provider-search/tests/infrastructure/postgres_searchable_provider_repository_it.rs

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use chrono::Utc;
use shared_kernel::domain::entities::AggregateRoot;
use shared_kernel::domain::pagination::PageRequest;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::errors::DomainError;
use shared_kernel::infrastructure::postgres::PostgresTransactionManager;
use provider_search::application::sync_projection::ProjectionSynchronizer;
use provider_search::domain::entities::SearchableProvider;
use provider_search::domain::events::ProviderEvent;
use provider_search::domain::repositories::SearchableProviderRepository;
use provider_search::domain::search::SearchQuery;
use provider_search::domain::value_objects::{ProviderName, Rating, SearchableProviderId, ServiceId, SubscriptionTier};
use provider_search::infrastructure::postgres::PostgresSearchableProviderRepository;
use crate::common::{point, provider, setup_postgres_test_db, BELO_HORIZONTE, RIO, SAO_PAULO};

fn query(origin: (f64, f64), radius_km: f64) -> SearchQuery {
    SearchQuery::builder(point(origin), radius_km).build().unwrap()
}

#[tokio::test]
async fn test_provider_lifecycle() {
    // Arrange
    let ctx = setup_postgres_test_db().await;
    let repo = PostgresSearchableProviderRepository::new(ctx.pool());

    let service = ServiceId::new();
    let p = SearchableProvider::builder(
        SearchableProviderId::new(),
        ProviderName::try_new("Eletricista Souza").unwrap(),
        point(SAO_PAULO),
        SubscriptionTier::Gold,
    )
        .with_rating(Rating::try_new(4.7).unwrap())
        .with_service_ids([service])
        .with_city(Some("São Paulo".into()))
        .with_state(Some("SP".into()))
        .build();

    // Act 1 : insertion
    repo.add(&p, None).await.unwrap();

    // Assert 1
    let found = repo.find_by_id(p.id(), None).await.unwrap().expect("Should find provider");
    assert_eq!(found.name().as_str(), "Eletricista Souza");
    assert_eq!(found.subscription_tier(), SubscriptionTier::Gold);
    assert_eq!(found.service_ids(), &BTreeSet::from([service]));
    assert_eq!(found.city(), Some("São Paulo"));
    assert_eq!(found.version(), 1);

    // Act 2 : mise à jour
    let mut modified = found.clone();
    modified.update_services(BTreeSet::new());
    repo.update(&modified, None).await.unwrap();

    let reloaded = repo.find_by_id(p.id(), None).await.unwrap().unwrap();
    assert!(reloaded.service_ids().is_empty());
    assert_eq!(reloaded.version(), 2);

    // Act 3 : suppression
    repo.delete(p.id(), None).await.unwrap();
    assert!(repo.find_by_id(p.id(), None).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_insert_is_already_exists() {
    let ctx = setup_postgres_test_db().await;
    let repo = PostgresSearchableProviderRepository::new(ctx.pool());
    let p = provider("Dup", SAO_PAULO, SubscriptionTier::Free, 0.0);

    repo.add(&p, None).await.unwrap();
    let res = repo.add(&p, None).await;

    assert!(matches!(res, Err(DomainError::AlreadyExists { field: "id", .. })));
}

#[tokio::test]
async fn test_stale_update_is_rejected() {
    let ctx = setup_postgres_test_db().await;
    let repo = PostgresSearchableProviderRepository::new(ctx.pool());
    let p = provider("Race", SAO_PAULO, SubscriptionTier::Free, 0.0);
    repo.add(&p, None).await.unwrap();

    let mut first = repo.find_by_id(p.id(), None).await.unwrap().unwrap();
    let mut second = first.clone();
    first.update_services(BTreeSet::from([ServiceId::new()]));
    second.update_services(BTreeSet::from([ServiceId::new()]));

    repo.update(&first, None).await.unwrap();
    let res = repo.update(&second, None).await;

    assert!(matches!(res, Err(DomainError::ConcurrencyConflict { .. })));
}

#[tokio::test]
async fn test_brazilian_cities_radius() {
    // Arrange
    let ctx = setup_postgres_test_db().await;
    let repo = PostgresSearchableProviderRepository::new(ctx.pool());
    for p in [
        provider("SP", SAO_PAULO, SubscriptionTier::Free, 0.0),
        provider("Rio", RIO, SubscriptionTier::Free, 0.0),
        provider("BH", BELO_HORIZONTE, SubscriptionTier::Free, 0.0),
    ] {
        repo.add(&p, None).await.unwrap();
    }

    // Act
    let wide = repo.search(&query(SAO_PAULO, 1000.0)).await.unwrap();
    let narrow = repo.search(&query(SAO_PAULO, 50.0)).await.unwrap();
    let zero = repo.search(&query(SAO_PAULO, 0.0)).await.unwrap();

    // Assert
    assert_eq!(wide.total_count, 3);
    assert_eq!(narrow.total_count, 1);
    assert_eq!(narrow.hits[0].provider.name().as_str(), "SP");
    assert!(narrow.hits[0].distance_km < 0.001);
    assert_eq!(zero.total_count, 0);
}

#[tokio::test]
async fn test_distances_match_domain_haversine() {
    let ctx = setup_postgres_test_db().await;
    let repo = PostgresSearchableProviderRepository::new(ctx.pool());
    let rio = provider("Rio", RIO, SubscriptionTier::Free, 0.0);
    repo.add(&rio, None).await.unwrap();

    let result = repo.search(&query(SAO_PAULO, 1000.0)).await.unwrap();

    let expected = point(SAO_PAULO).distance_km_to(&point(RIO));
    assert!((result.hits[0].distance_km - expected).abs() < 1e-3);
}

#[tokio::test]
async fn test_antipodal_distance_matches_domain_haversine() {
    // Arrange
    let ctx = setup_postgres_test_db().await;
    let repo = PostgresSearchableProviderRepository::new(ctx.pool());
    let origin = (-12.0, -180.0);
    let antipode = provider("Antipode", (12.0, 0.0), SubscriptionTier::Free, 0.0);
    repo.add(&antipode, None).await.unwrap();

    // Act : un rayon couvrant la sphère entière passe le préfiltre PostGIS
    let result = repo.search(&query(origin, 25_000.0)).await.unwrap();

    // Assert
    let expected = point(origin).distance_km_to(&point((12.0, 0.0)));
    assert_eq!(result.total_count, 1);
    assert!(result.hits[0].distance_km.is_finite());
    assert!((result.hits[0].distance_km - expected).abs() < 1e-3);

    assert_eq!(repo.search(&query(origin, 50.0)).await.unwrap().total_count, 0);
    assert_eq!(repo.search(&query(origin, 0.0)).await.unwrap().total_count, 0);
}

#[tokio::test]
async fn test_ranking_filters_and_pagination() {
    // Arrange
    let ctx = setup_postgres_test_db().await;
    let repo = PostgresSearchableProviderRepository::new(ctx.pool());

    for i in 0..15 {
        let tier = SubscriptionTier::ALL[i % 4];
        let p = provider(&format!("Pet Shop {i}"), SAO_PAULO, tier, (i % 6) as f64 * 0.9);
        repo.add(&p, None).await.unwrap();
    }
    repo.add(&provider("Padaria", SAO_PAULO, SubscriptionTier::Platinum, 5.0), None).await.unwrap();

    let paged = |skip, take| {
        SearchQuery::builder(point(SAO_PAULO), 1.0)
            .with_term(Some("  pet SHOP ".into()))
            .with_page(PageRequest::try_new(skip, take).unwrap())
            .build()
            .unwrap()
    };

    // Act
    let first = repo.search(&paged(0, 10)).await.unwrap();
    let second = repo.search(&paged(10, 10)).await.unwrap();

    // Assert : 15 correspondances, pages disjointes couvrant l'ensemble
    assert_eq!((first.hits.len(), first.total_count), (10, 15));
    assert_eq!((second.hits.len(), second.total_count), (5, 15));

    let a: HashSet<_> = first.providers().map(|p| *p.id()).collect();
    let b: HashSet<_> = second.providers().map(|p| *p.id()).collect();
    assert!(a.is_disjoint(&b));
    assert_eq!(a.union(&b).count(), 15);

    let all: Vec<_> = first.hits.iter().chain(second.hits.iter()).collect();
    for pair in all.windows(2) {
        let (x, y) = (&pair[0].provider, &pair[1].provider);
        assert!(x.subscription_tier() >= y.subscription_tier());
        if x.subscription_tier() == y.subscription_tier() {
            assert!(x.rating().value() >= y.rating().value());
            if x.rating() == y.rating() {
                assert!(x.id() < y.id());
            }
        }
    }
}

#[tokio::test]
async fn test_service_tier_and_rating_filters() {
    let ctx = setup_postgres_test_db().await;
    let repo = PostgresSearchableProviderRepository::new(ctx.pool());
    let plumbing = ServiceId::new();

    let gold_plumber = SearchableProvider::builder(
        SearchableProviderId::new(),
        ProviderName::try_new("Gold plumber").unwrap(),
        point(RIO),
        SubscriptionTier::Gold,
    ).with_rating(Rating::try_new(4.0).unwrap()).with_service_ids([plumbing]).build();

    repo.add(&gold_plumber, None).await.unwrap();
    repo.add(&provider("Gold other", RIO, SubscriptionTier::Gold, 4.0), None).await.unwrap();
    repo.add(&provider("Free", RIO, SubscriptionTier::Free, 5.0), None).await.unwrap();

    let by_service = SearchQuery::builder(point(RIO), 5.0)
        .with_service_ids(Some(BTreeSet::from([plumbing, ServiceId::new()])))
        .build()
        .unwrap();
    let unknown_service = SearchQuery::builder(point(RIO), 5.0)
        .with_service_ids(Some(BTreeSet::from([ServiceId::new()])))
        .build()
        .unwrap();
    let gold_only = SearchQuery::builder(point(RIO), 5.0)
        .with_tiers(Some(BTreeSet::from([SubscriptionTier::Gold])))
        .build()
        .unwrap();
    let top_rated = SearchQuery::builder(point(RIO), 5.0)
        .with_min_rating(Some(4.5))
        .build()
        .unwrap();

    assert_eq!(repo.search(&by_service).await.unwrap().total_count, 1);
    assert_eq!(repo.search(&unknown_service).await.unwrap().total_count, 0);
    assert_eq!(repo.search(&gold_only).await.unwrap().total_count, 2);
    assert_eq!(repo.search(&top_rated).await.unwrap().total_count, 1);
}

#[tokio::test]
async fn test_transaction_commit_and_rollback() {
    // Arrange
    let ctx = setup_postgres_test_db().await;
    let repo = Arc::new(PostgresSearchableProviderRepository::new(ctx.pool()));
    let tx_manager = PostgresTransactionManager::new(ctx.pool());

    let kept = provider("Kept", SAO_PAULO, SubscriptionTier::Free, 0.0);
    let dropped = provider("Dropped", SAO_PAULO, SubscriptionTier::Free, 0.0);

    // Act 1 : commit explicite
    let (r, k) = (repo.clone(), kept.clone());
    tx_manager
        .run_in_transaction(move |mut tx| async move {
            r.add(&k, Some(&mut *tx)).await?;
            tx.commit().await
        })
        .await
        .unwrap();

    // Act 2 : erreur avant commit
    let (r, d) = (repo.clone(), dropped.clone());
    let res = tx_manager
        .run_in_transaction(move |mut tx| async move {
            r.add(&d, Some(&mut *tx)).await?;
            Err(DomainError::Internal("abort".into()))
        })
        .await;

    // Assert
    assert!(res.is_err());
    assert!(repo.find_by_id(kept.id(), None).await.unwrap().is_some());
    assert!(repo.find_by_id(dropped.id(), None).await.unwrap().is_none());
}

#[tokio::test]
async fn test_concurrent_synchronizers_converge() {
    // Arrange
    let ctx = setup_postgres_test_db().await;
    let repo = Arc::new(PostgresSearchableProviderRepository::new(ctx.pool()));
    let tx_manager: Arc<dyn TransactionManager> = Arc::new(PostgresTransactionManager::new(ctx.pool()));
    let sync = Arc::new(ProjectionSynchronizer::new(repo.clone(), tx_manager));
    let id = SearchableProviderId::new();

    let event = || ProviderEvent::BecameSearchable {
        provider_id: id,
        name: ProviderName::try_new("Vidraçaria Norte").unwrap(),
        location: point(BELO_HORIZONTE),
        tier: SubscriptionTier::Standard,
        service_ids: BTreeSet::new(),
        rating: Some(Rating::try_new(3.5).unwrap()),
        city: None,
        state: None,
        description: None,
        occurred_at: Utc::now(),
    };

    // Act
    let results = futures::future::join_all((0..4).map(|_| {
        let sync = sync.clone();
        let e = event();
        async move { sync.handle(e).await }
    }))
    .await;

    // Assert
    assert!(results.iter().all(|r| r.is_ok()));
    let stored = repo.find_by_id(&id, None).await.unwrap().unwrap();
    assert_eq!(stored.version(), 1);
    assert_eq!(repo.search(&query(BELO_HORIZONTE, 1.0)).await.unwrap().total_count, 1);
}
