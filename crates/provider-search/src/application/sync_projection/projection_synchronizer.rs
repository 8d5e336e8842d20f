// crates/provider-search/src/application/sync_projection/projection_synchronizer.rs

use std::collections::BTreeSet;
use std::sync::Arc;
use shared_kernel::domain::entities::AggregateRoot;
use shared_kernel::domain::events::DomainEvent;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::domain::utils::{with_retry, RetryConfig};
use shared_kernel::errors::{DomainError, Result};
use crate::domain::entities::SearchableProvider;
use crate::domain::events::ProviderEvent;
use crate::domain::repositories::SearchableProviderRepository;
use crate::domain::value_objects::{SearchableProviderId, ServiceId};

/// Seul writer du modèle de lecture : applique les événements Provider
/// de façon idempotente (un rejeu ne réécrit rien).
pub struct ProjectionSynchronizer {
    repo: Arc<dyn SearchableProviderRepository>,
    tx_manager: Arc<dyn TransactionManager>,
    retry: RetryConfig,
}

impl ProjectionSynchronizer {
    pub fn new(
        repo: Arc<dyn SearchableProviderRepository>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self {
            repo,
            tx_manager,
            retry: RetryConfig::default(),
        }
    }

    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub async fn handle(&self, event: ProviderEvent) -> Result<()> {
        tracing::debug!(
            provider_id = %event.provider_id(),
            event_type = %event.event_type(),
            "Applying provider event"
        );

        with_retry(self.retry, || self.try_handle_once(&event)).await
    }

    async fn try_handle_once(&self, event: &ProviderEvent) -> Result<()> {
        match event.clone() {
            ProviderEvent::BecameSearchable {
                provider_id, name, location, tier, service_ids, rating, city, state, description, ..
            } => {
                let candidate = SearchableProvider::builder(provider_id, name, location, tier)
                    .with_rating(rating.unwrap_or_default())
                    .with_service_ids(service_ids)
                    .with_city(city)
                    .with_state(state)
                    .with_description(description)
                    .build();

                self.upsert(candidate, rating.is_some()).await
            }

            ProviderEvent::ProfileChanged {
                provider_id, name, location, tier, rating, city, state, description, ..
            } => {
                self.modify_existing(provider_id, move |provider| {
                    let mut profile = provider.profile();
                    if let Some(v) = name { profile.name = v; }
                    if let Some(v) = location { profile.location = v; }
                    if let Some(v) = tier { profile.tier = v; }
                    if let Some(v) = rating { profile.rating = v; }
                    if city.is_some() { profile.city = city; }
                    if state.is_some() { profile.state = state; }
                    if description.is_some() { profile.description = description; }
                    provider.update_profile(profile);
                }).await
            }

            ProviderEvent::ServicesChanged { provider_id, service_ids, .. } => {
                self.replace_services(provider_id, service_ids).await
            }

            ProviderEvent::Unsearchable { provider_id, .. } => self.remove(provider_id).await,
        }
    }

    /// Création si absente, sinon remplacement complet.
    /// Sans note dans l'événement, la note déjà connue est conservée.
    async fn upsert(&self, candidate: SearchableProvider, has_rating: bool) -> Result<()> {
        let repo = self.repo.clone();

        self.tx_manager
            .run_in_transaction(move |mut tx| async move {
                let existing = repo.find_by_id(candidate.id(), Some(&mut *tx)).await?;

                match existing {
                    Some(mut provider) => {
                        let mut profile = candidate.profile();
                        if !has_rating {
                            profile.rating = provider.rating();
                        }
                        provider.update_profile(profile);
                        provider.update_services(candidate.service_ids().clone());

                        if !provider.has_changes() {
                            return Ok(());
                        }
                        repo.update(&provider, Some(&mut *tx)).await?;
                    }
                    None => {
                        repo.add(&candidate, Some(&mut *tx)).await?;
                    }
                }

                tx.commit().await
            })
            .await
            .map_err(concurrent_insert_as_conflict)
    }

    async fn replace_services(&self, id: SearchableProviderId, service_ids: BTreeSet<ServiceId>) -> Result<()> {
        self.modify_existing(id, move |provider| provider.update_services(service_ids)).await
    }

    /// Lecture → mutation → écriture ; une fiche absente est ignorée.
    async fn modify_existing<F>(&self, id: SearchableProviderId, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut SearchableProvider) + Send + 'static,
    {
        let repo = self.repo.clone();

        self.tx_manager
            .run_in_transaction(move |mut tx| async move {
                let Some(mut provider) = repo.find_by_id(&id, Some(&mut *tx)).await? else {
                    tracing::debug!(provider_id = %id, "No searchable record, event ignored");
                    return Ok(());
                };

                mutate(&mut provider);

                if !provider.has_changes() {
                    return Ok(());
                }

                repo.update(&provider, Some(&mut *tx)).await?;
                tx.commit().await
            })
            .await
    }

    async fn remove(&self, id: SearchableProviderId) -> Result<()> {
        let repo = self.repo.clone();

        self.tx_manager
            .run_in_transaction(move |mut tx| async move {
                repo.delete(&id, Some(&mut *tx)).await?;
                tx.commit().await
            })
            .await
    }
}

/// Deux "provider.searchable" concurrents : le perdant relit et passe en mise à jour.
fn concurrent_insert_as_conflict(e: DomainError) -> DomainError {
    if e.is_already_exists() {
        DomainError::ConcurrencyConflict {
            reason: format!("Concurrent insert: {}", e),
        }
    } else {
        e
    }
}
