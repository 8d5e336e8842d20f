// crates/provider-search/src/application/search_providers/search_providers_use_case_test.rs

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::{Arc, Mutex};
    use shared_kernel::domain::value_objects::GeoPoint;
    use shared_kernel::domain::Identifier;
    use shared_kernel::errors::DomainError;
    use crate::application::search_providers::{SearchProvidersQuery, SearchProvidersUseCase};
    use crate::domain::entities::SearchableProvider;
    use crate::domain::repositories::SearchableProviderRepositoryStub;
    use crate::domain::search::{SearchHit, SearchResult};
    use crate::domain::value_objects::{ProviderName, Rating, SearchableProviderId, ServiceId, SubscriptionTier};

    fn setup(result: SearchResult) -> (SearchProvidersUseCase, Arc<SearchableProviderRepositoryStub>) {
        let repo = Arc::new(SearchableProviderRepositoryStub {
            search_result_to_return: Mutex::new(result),
            ..Default::default()
        });
        (SearchProvidersUseCase::new(repo.clone()), repo)
    }

    fn sample_hit() -> SearchHit {
        let provider = SearchableProvider::builder(
            SearchableProviderId::new(),
            ProviderName::try_new("Lavanderia Express").unwrap(),
            GeoPoint::try_new(-23.56, -46.64).unwrap(),
            SubscriptionTier::Gold,
        )
            .with_rating(Rating::try_new(4.5).unwrap())
            .with_city(Some("São Paulo".into()))
            .build();

        SearchHit { provider, distance_km: 1.25 }
    }

    #[tokio::test]
    async fn test_search_maps_hits_to_dto() {
        // Arrange
        let hit = sample_hit();
        let expected_id = hit.provider.id().as_uuid();
        let (use_case, _) = setup(SearchResult { hits: vec![hit], total_count: 7 });

        // Act
        let dto = use_case
            .execute(SearchProvidersQuery::new(-23.55, -46.63, 10.0))
            .await
            .unwrap();

        // Assert
        assert_eq!(dto.total_count, 7);
        assert_eq!(dto.items.len(), 1);
        let item = &dto.items[0];
        assert_eq!(item.id, expected_id);
        assert_eq!(item.name, "Lavanderia Express");
        assert_eq!(item.tier, SubscriptionTier::Gold);
        assert_eq!(item.rating, 4.5);
        assert_eq!(item.distance_km, 1.25);
        assert_eq!(item.city.as_deref(), Some("São Paulo"));
        assert_eq!(item.latitude, -23.56);
    }

    #[tokio::test]
    async fn test_search_builds_validated_query() {
        // Arrange
        let (use_case, repo) = setup(SearchResult::empty());
        let service = ServiceId::new();

        let mut query = SearchProvidersQuery::new(-23.55, -46.63, 25.0);
        query.term = Some("pet".into());
        query.service_ids = Some(vec![service.to_string()]);
        query.min_rating = Some(3.5);
        query.tiers = Some(vec!["gold".into(), "Platinum".into()]);
        query.skip = Some(10);
        query.take = Some(5);

        // Act
        let dto = use_case.execute(query).await.unwrap();

        // Assert
        assert!(dto.items.is_empty());
        assert_eq!(dto.total_count, 0);

        let sent = repo.last_query.lock().unwrap().clone().unwrap();
        assert_eq!(sent.radius_km(), 25.0);
        assert_eq!(sent.term(), Some("pet"));
        assert_eq!(sent.service_ids(), Some(&BTreeSet::from([service])));
        assert_eq!(sent.min_rating(), Some(3.5));
        assert_eq!(
            sent.subscription_tiers(),
            Some(&BTreeSet::from([SubscriptionTier::Gold, SubscriptionTier::Platinum]))
        );
        assert_eq!(sent.page().skip(), 10);
        assert_eq!(sent.page().take(), 5);
    }

    #[tokio::test]
    async fn test_search_default_page() {
        let (use_case, repo) = setup(SearchResult::empty());

        use_case.execute(SearchProvidersQuery::new(0.0, 0.0, 1.0)).await.unwrap();

        let sent = repo.last_query.lock().unwrap().clone().unwrap();
        assert_eq!(sent.page().skip(), 0);
        assert_eq!(sent.page().take(), SearchProvidersQuery::DEFAULT_TAKE as u64);
    }

    #[tokio::test]
    async fn test_search_rejects_invalid_parameters() {
        let (use_case, repo) = setup(SearchResult::empty());

        let cases = vec![
            SearchProvidersQuery::new(91.0, 0.0, 10.0),
            SearchProvidersQuery::new(0.0, -181.0, 10.0),
            SearchProvidersQuery::new(0.0, 0.0, -3.0),
            SearchProvidersQuery { tiers: Some(vec!["diamond".into()]), ..SearchProvidersQuery::new(0.0, 0.0, 1.0) },
            SearchProvidersQuery { service_ids: Some(vec!["not-a-uuid".into()]), ..SearchProvidersQuery::new(0.0, 0.0, 1.0) },
            SearchProvidersQuery { take: Some(0), ..SearchProvidersQuery::new(0.0, 0.0, 1.0) },
            SearchProvidersQuery { skip: Some(-1), ..SearchProvidersQuery::new(0.0, 0.0, 1.0) },
        ];

        for query in cases {
            let res = use_case.execute(query.clone()).await;
            assert!(
                matches!(res, Err(DomainError::Validation { .. })),
                "Should be rejected: {:?}", query
            );
        }

        // Aucune requête invalide n'atteint le store
        assert!(repo.last_query.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_search_propagates_storage_unavailable() {
        let (use_case, repo) = setup(SearchResult::empty());
        *repo.error_to_return.lock().unwrap() = Some(DomainError::StorageUnavailable("pool timed out".into()));

        let res = use_case.execute(SearchProvidersQuery::new(0.0, 0.0, 1.0)).await;

        assert!(matches!(res, Err(DomainError::StorageUnavailable(_))));
    }
}
