// crates/provider-search/src/domain/builders/searchable_provider_builder.rs

use std::collections::BTreeSet;
use chrono::{DateTime, Utc};
use shared_kernel::domain::value_objects::GeoPoint;
use crate::domain::entities::SearchableProvider;
use crate::domain::value_objects::{ProviderName, Rating, SearchableProviderId, ServiceId, SubscriptionTier};

pub struct SearchableProviderBuilder {
    id: SearchableProviderId,
    name: ProviderName,
    location: GeoPoint,
    subscription_tier: SubscriptionTier,
    rating: Rating,
    service_ids: BTreeSet<ServiceId>,
    city: Option<String>,
    state: Option<String>,
    description: Option<String>,
    updated_at: DateTime<Utc>,
}

impl SearchableProviderBuilder {
    /// CRÉATION (premier "provider.searchable" reçu)
    pub fn new(id: SearchableProviderId, name: ProviderName, location: GeoPoint, tier: SubscriptionTier) -> Self {
        Self {
            id,
            name,
            location,
            subscription_tier: tier,
            rating: Rating::zero(),
            service_ids: BTreeSet::new(),
            city: None,
            state: None,
            description: None,
            updated_at: Utc::now(),
        }
    }

    // --- SETTERS ---

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_service_ids(mut self, service_ids: impl IntoIterator<Item = ServiceId>) -> Self {
        self.service_ids = service_ids.into_iter().collect();
        self
    }

    pub fn with_city(mut self, city: Option<String>) -> Self {
        self.city = city;
        self
    }

    pub fn with_state(mut self, state: Option<String>) -> Self {
        self.state = state;
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn build(self) -> SearchableProvider {
        SearchableProvider::new_from_builder(
            self.id,
            self.name,
            self.location,
            self.subscription_tier,
            self.rating,
            self.service_ids,
            self.city,
            self.state,
            self.description,
            self.updated_at,
        )
    }
}
