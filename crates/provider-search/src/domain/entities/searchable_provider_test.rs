#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use shared_kernel::domain::entities::AggregateRoot;
    use shared_kernel::domain::value_objects::GeoPoint;
    use crate::domain::entities::SearchableProvider;
    use crate::domain::value_objects::{ProviderName, Rating, SearchableProviderId, ServiceId, SubscriptionTier};

    fn restored_provider(services: BTreeSet<ServiceId>) -> SearchableProvider {
        SearchableProvider::restore(
            SearchableProviderId::new(),
            ProviderName::try_new("Studio Zen").unwrap(),
            GeoPoint::try_new(-23.55, -46.63).unwrap(),
            SubscriptionTier::Standard,
            Rating::try_new(4.2).unwrap(),
            services,
            Some("São Paulo".into()),
            Some("SP".into()),
            None,
            chrono::Utc::now(),
            3,
        )
    }

    #[test]
    fn test_builder_defaults() {
        let provider = SearchableProvider::builder(
            SearchableProviderId::new(),
            ProviderName::try_new("Pet Care").unwrap(),
            GeoPoint::try_new(0.0, 0.0).unwrap(),
            SubscriptionTier::Gold,
        ).build();

        assert_eq!(provider.rating(), Rating::zero());
        assert!(provider.service_ids().is_empty());
        assert_eq!(provider.city(), None);
        assert_eq!(provider.version(), 1);
        assert!(provider.has_changes());
    }

    #[test]
    fn test_builder_deduplicates_service_ids() {
        let s = ServiceId::new();
        let provider = SearchableProvider::builder(
            SearchableProviderId::new(),
            ProviderName::try_new("Pet Care").unwrap(),
            GeoPoint::try_new(0.0, 0.0).unwrap(),
            SubscriptionTier::Free,
        )
            .with_service_ids(vec![s, s, s])
            .build();

        assert_eq!(provider.service_ids().len(), 1);
    }

    #[test]
    fn test_restore_is_clean() {
        let provider = restored_provider(BTreeSet::new());
        assert!(!provider.has_changes());
        assert_eq!(provider.version(), 3);
    }

    #[test]
    fn test_update_services_replaces_set() {
        let (a, b, c) = (ServiceId::new(), ServiceId::new(), ServiceId::new());
        let mut provider = restored_provider(BTreeSet::from([a, b]));

        provider.update_services(BTreeSet::from([c]));

        // Remplacement, pas union
        assert_eq!(provider.service_ids(), &BTreeSet::from([c]));
        assert!(provider.has_changes());
        assert_eq!(provider.version(), 4);
    }

    #[test]
    fn test_update_services_same_set_is_noop() {
        let a = ServiceId::new();
        let mut provider = restored_provider(BTreeSet::from([a]));
        let before = provider.updated_at();

        provider.update_services(BTreeSet::from([a]));

        assert!(!provider.has_changes());
        assert_eq!(provider.version(), 3);
        assert_eq!(provider.updated_at(), before);
    }

    #[test]
    fn test_update_profile_replaces_all_fields() {
        let mut provider = restored_provider(BTreeSet::new());

        let mut profile = provider.profile();
        profile.name = ProviderName::try_new("Studio Zen Premium").unwrap();
        profile.tier = SubscriptionTier::Platinum;
        profile.city = None;
        profile.description = Some("Yoga & pilates".into());

        provider.update_profile(profile);

        assert_eq!(provider.name().as_str(), "Studio Zen Premium");
        assert_eq!(provider.subscription_tier(), SubscriptionTier::Platinum);
        assert_eq!(provider.city(), None);
        assert_eq!(provider.state(), Some("SP"));
        assert_eq!(provider.description(), Some("Yoga & pilates"));
        assert_eq!(provider.version(), 4);
    }

    #[test]
    fn test_update_profile_identical_is_noop() {
        let mut provider = restored_provider(BTreeSet::new());
        let profile = provider.profile();

        provider.update_profile(profile);

        assert!(!provider.has_changes());
    }

    #[test]
    fn test_multiple_mutations_bump_version_once() {
        let mut provider = restored_provider(BTreeSet::new());

        provider.update_services(BTreeSet::from([ServiceId::new()]));
        let mut profile = provider.profile();
        profile.rating = Rating::try_new(5.0).unwrap();
        provider.update_profile(profile);

        assert_eq!(provider.version(), 4);
    }
}
