// crates/provider-search/src/domain/events/provider_events.rs

use std::borrow::Cow;
use std::collections::BTreeSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use shared_kernel::domain::events::{DomainEvent, EventEnvelope};
use shared_kernel::domain::value_objects::GeoPoint;
use shared_kernel::errors::{DomainError, Result};
use crate::domain::value_objects::{ProviderName, Rating, SearchableProviderId, ServiceId, SubscriptionTier};

/// Cycle de vie d'un Provider tel que vu par la recherche.
/// Émis par le module Provider, consommé par le synchroniseur de projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ProviderEvent {
    /// Provider activé/publié : création ou mise à jour complète de la fiche
    #[serde(rename = "provider.searchable")]
    BecameSearchable {
        provider_id: SearchableProviderId,
        name: ProviderName,
        location: GeoPoint,
        tier: SubscriptionTier,
        #[serde(default)]
        service_ids: BTreeSet<ServiceId>,
        #[serde(default)]
        rating: Option<Rating>,
        #[serde(default)]
        city: Option<String>,
        #[serde(default)]
        state: Option<String>,
        #[serde(default)]
        description: Option<String>,
        #[serde(default = "Utc::now")]
        occurred_at: DateTime<Utc>,
    },

    /// Modification partielle du profil : seuls les champs présents sont appliqués
    #[serde(rename = "provider.profile.changed")]
    ProfileChanged {
        provider_id: SearchableProviderId,
        #[serde(default)]
        name: Option<ProviderName>,
        #[serde(default)]
        location: Option<GeoPoint>,
        #[serde(default)]
        tier: Option<SubscriptionTier>,
        #[serde(default)]
        rating: Option<Rating>,
        #[serde(default)]
        city: Option<String>,
        #[serde(default)]
        state: Option<String>,
        #[serde(default)]
        description: Option<String>,
        #[serde(default = "Utc::now")]
        occurred_at: DateTime<Utc>,
    },

    #[serde(rename = "provider.services.changed")]
    ServicesChanged {
        provider_id: SearchableProviderId,
        service_ids: BTreeSet<ServiceId>,
        #[serde(default = "Utc::now")]
        occurred_at: DateTime<Utc>,
    },

    /// Désactivation, rejet ou suppression
    #[serde(rename = "provider.unsearchable")]
    Unsearchable {
        provider_id: SearchableProviderId,
        #[serde(default = "Utc::now")]
        occurred_at: DateTime<Utc>,
    },
}

impl ProviderEvent {
    pub const BECAME_SEARCHABLE: &'static str = "provider.searchable";
    pub const PROFILE_CHANGED: &'static str = "provider.profile.changed";
    pub const SERVICES_CHANGED: &'static str = "provider.services.changed";
    pub const UNSEARCHABLE: &'static str = "provider.unsearchable";

    pub fn provider_id(&self) -> &SearchableProviderId {
        match self {
            Self::BecameSearchable { provider_id, .. }
            | Self::ProfileChanged { provider_id, .. }
            | Self::ServicesChanged { provider_id, .. }
            | Self::Unsearchable { provider_id, .. } => provider_id,
        }
    }

    pub fn is_known_type(event_type: &str) -> bool {
        matches!(
            event_type,
            Self::BECAME_SEARCHABLE | Self::PROFILE_CHANGED | Self::SERVICES_CHANGED | Self::UNSEARCHABLE
        )
    }

    /// Décode une enveloppe du bus.
    /// `Ok(None)` pour un type inconnu ; une erreur de validation si le payload est invalide.
    pub fn from_envelope(envelope: &EventEnvelope) -> Result<Option<Self>> {
        if !Self::is_known_type(&envelope.event_type) {
            return Ok(None);
        }

        let tagged = json!({ "type": envelope.event_type, "data": envelope.payload });

        serde_json::from_value(tagged)
            .map(Some)
            .map_err(|e| DomainError::Validation {
                field: "payload",
                reason: format!("Invalid '{}' payload: {}", envelope.event_type, e),
            })
    }
}

impl DomainEvent for ProviderEvent {
    fn event_type(&self) -> Cow<'_, str> {
        match self {
            Self::BecameSearchable { .. } => Cow::Borrowed(Self::BECAME_SEARCHABLE),
            Self::ProfileChanged { .. } => Cow::Borrowed(Self::PROFILE_CHANGED),
            Self::ServicesChanged { .. } => Cow::Borrowed(Self::SERVICES_CHANGED),
            Self::Unsearchable { .. } => Cow::Borrowed(Self::UNSEARCHABLE),
        }
    }

    fn aggregate_type(&self) -> Cow<'_, str> {
        Cow::Borrowed("provider")
    }

    fn aggregate_id(&self) -> String {
        self.provider_id().to_string()
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::BecameSearchable { occurred_at, .. }
            | Self::ProfileChanged { occurred_at, .. }
            | Self::ServicesChanged { occurred_at, .. }
            | Self::Unsearchable { occurred_at, .. } => *occurred_at,
        }
    }

    /// Le payload ne contient que les données ; le type voyage dans `event_type`.
    fn payload(&self) -> Value {
        match json!(self) {
            Value::Object(mut map) => map.remove("data").unwrap_or(Value::Null),
            _ => Value::Null,
        }
    }
}
