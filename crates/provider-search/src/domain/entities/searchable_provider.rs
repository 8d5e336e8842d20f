// crates/provider-search/src/domain/entities/searchable_provider.rs

use std::collections::BTreeSet;
use chrono::{DateTime, Utc};
use shared_kernel::domain::entities::{AggregateMetadata, AggregateRoot, EntityMetadata};
use shared_kernel::domain::value_objects::GeoPoint;
use shared_kernel::domain::Identifier;
use crate::domain::builders::SearchableProviderBuilder;
use crate::domain::params::ProviderProfile;
use crate::domain::value_objects::{ProviderName, Rating, SearchableProviderId, ServiceId, SubscriptionTier};

/// Projection dénormalisée d'un Provider actif, optimisée pour la recherche.
/// La fiche n'existe que tant que le Provider est publié.
#[derive(Debug, Clone)]
pub struct SearchableProvider {
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
    metadata: AggregateMetadata,
}

impl SearchableProvider {
    pub fn builder(id: SearchableProviderId, name: ProviderName, location: GeoPoint, tier: SubscriptionTier) -> SearchableProviderBuilder {
        SearchableProviderBuilder::new(id, name, location, tier)
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new_from_builder(
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
    ) -> Self {
        Self {
            id,
            name,
            location,
            subscription_tier,
            rating,
            service_ids,
            city,
            state,
            description,
            updated_at,
            metadata: AggregateMetadata::new(1),
        }
    }

    /// Reconstruction depuis le stockage : aucune modification en attente.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
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
        version: i32,
    ) -> Self {
        Self {
            id,
            name,
            location,
            subscription_tier,
            rating,
            service_ids,
            city,
            state,
            description,
            updated_at,
            metadata: AggregateMetadata::restore(version),
        }
    }

    // --- Getters ---

    pub fn id(&self) -> &SearchableProviderId { &self.id }
    pub fn name(&self) -> &ProviderName { &self.name }
    pub fn location(&self) -> &GeoPoint { &self.location }
    pub fn subscription_tier(&self) -> SubscriptionTier { self.subscription_tier }
    pub fn rating(&self) -> Rating { self.rating }
    pub fn service_ids(&self) -> &BTreeSet<ServiceId> { &self.service_ids }
    pub fn city(&self) -> Option<&str> { self.city.as_deref() }
    pub fn state(&self) -> Option<&str> { self.state.as_deref() }
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

    pub fn profile(&self) -> ProviderProfile {
        ProviderProfile {
            name: self.name.clone(),
            location: self.location,
            tier: self.subscription_tier,
            rating: self.rating,
            city: self.city.clone(),
            state: self.state.clone(),
            description: self.description.clone(),
        }
    }

    // --- Logique métier ---

    /// Remplace l'ensemble des services (pas d'union).
    pub fn update_services(&mut self, service_ids: BTreeSet<ServiceId>) {
        if self.service_ids != service_ids {
            self.service_ids = service_ids;
            self.apply_change();
        }
    }

    /// Remplace tous les champs descriptifs en une fois.
    pub fn update_profile(&mut self, profile: ProviderProfile) {
        if self.profile() == profile {
            return;
        }

        let ProviderProfile { name, location, tier, rating, city, state, description } = profile;

        self.name = name;
        self.location = location;
        self.subscription_tier = tier;
        self.rating = rating;
        self.city = city;
        self.state = state;
        self.description = description;

        self.apply_change();
    }

    fn apply_change(&mut self) {
        self.metadata.mark_changed();
        self.updated_at = Utc::now();
    }
}

// --- Trait Implementations ---

impl EntityMetadata for SearchableProvider {
    fn entity_name() -> &'static str { "SearchableProvider" }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "searchable_providers_pkey" => "id",
            _ => "unique_constraint",
        }
    }
}

impl AggregateRoot for SearchableProvider {
    fn id(&self) -> String { self.id.as_string() }
    fn metadata(&self) -> &AggregateMetadata { &self.metadata }
    fn metadata_mut(&mut self) -> &mut AggregateMetadata { &mut self.metadata }
}
