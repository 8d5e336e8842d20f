#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;
    use shared_kernel::domain::events::EventEnvelope;
    use shared_kernel::domain::value_objects::GeoPoint;
    use shared_kernel::errors::DomainError;
    use crate::domain::events::ProviderEvent;
    use crate::domain::value_objects::{ProviderName, SearchableProviderId, ServiceId, SubscriptionTier};

    fn envelope(event_type: &str, payload: serde_json::Value) -> EventEnvelope {
        EventEnvelope {
            id: Uuid::now_v7(),
            aggregate_type: "provider".into(),
            aggregate_id: Uuid::now_v7().to_string(),
            event_type: event_type.into(),
            payload,
            occurred_at: Utc::now(),
            metadata: None,
        }
    }

    #[test]
    fn test_decode_became_searchable_with_defaults() {
        let id = SearchableProviderId::new();
        let env = envelope("provider.searchable", json!({
            "provider_id": id,
            "name": "Barbearia Central",
            "location": { "latitude": -22.9068, "longitude": -43.1729 },
            "tier": "gold"
        }));

        let event = ProviderEvent::from_envelope(&env).unwrap().unwrap();

        match event {
            ProviderEvent::BecameSearchable { provider_id, tier, service_ids, rating, city, .. } => {
                assert_eq!(provider_id, id);
                assert_eq!(tier, SubscriptionTier::Gold);
                assert!(service_ids.is_empty());
                assert_eq!(rating, None);
                assert_eq!(city, None);
            }
            other => panic!("Unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_decode_unknown_type_is_ignored() {
        let env = envelope("provider.documents.verified", json!({ "anything": true }));
        assert_eq!(ProviderEvent::from_envelope(&env).unwrap(), None);
    }

    #[test]
    fn test_decode_invalid_coordinates_is_validation_error() {
        let env = envelope("provider.searchable", json!({
            "provider_id": SearchableProviderId::new(),
            "name": "Lost Provider",
            "location": { "latitude": 123.0, "longitude": 0.0 },
            "tier": "free"
        }));

        let res = ProviderEvent::from_envelope(&env);
        assert!(matches!(res, Err(DomainError::Validation { field: "payload", .. })));
    }

    #[test]
    fn test_decode_invalid_tier_or_rating_is_validation_error() {
        let bad_tier = envelope("provider.profile.changed", json!({
            "provider_id": SearchableProviderId::new(),
            "tier": "diamond"
        }));
        assert!(ProviderEvent::from_envelope(&bad_tier).unwrap_err().is_validation());

        let bad_rating = envelope("provider.profile.changed", json!({
            "provider_id": SearchableProviderId::new(),
            "rating": -4.0
        }));
        assert!(ProviderEvent::from_envelope(&bad_rating).unwrap_err().is_validation());
    }

    #[test]
    fn test_envelope_wrap_then_decode() {
        let event = ProviderEvent::BecameSearchable {
            provider_id: SearchableProviderId::new(),
            name: ProviderName::try_new("Oficina do Zé").unwrap(),
            location: GeoPoint::try_new(-19.9167, -43.9345).unwrap(),
            tier: SubscriptionTier::Standard,
            service_ids: BTreeSet::from([ServiceId::new()]),
            rating: None,
            city: Some("Belo Horizonte".into()),
            state: Some("MG".into()),
            description: None,
            occurred_at: Utc::now(),
        };

        let env = EventEnvelope::wrap(&event);
        assert_eq!(env.event_type, "provider.searchable");
        assert_eq!(env.aggregate_type, "provider");
        assert_eq!(env.aggregate_id, event.provider_id().to_string());

        let decoded = ProviderEvent::from_envelope(&env).unwrap().unwrap();
        assert_eq!(decoded, event);
    }
}
