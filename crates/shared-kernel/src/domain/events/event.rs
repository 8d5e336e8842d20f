// crates/shared-kernel/src/domain/events/event.rs

use std::borrow::Cow;
use std::fmt::Debug;
use chrono::{DateTime, Utc};
use dyn_clone::DynClone;
use serde_json::Value;
use uuid::Uuid;

/// Événement publiable sur le bus sous forme d'`EventEnvelope`.
pub trait DomainEvent: DynClone + Debug + Send + Sync {
    fn event_id(&self) -> Uuid {
        Uuid::now_v7()
    }

    /// Type stable sur le bus, ex. "provider.profile.changed"
    fn event_type(&self) -> Cow<'_, str>;

    fn aggregate_type(&self) -> Cow<'_, str>;

    fn aggregate_id(&self) -> String;

    fn occurred_at(&self) -> DateTime<Utc>;

    /// Corps métier seul, sans le type
    fn payload(&self) -> Value;

    fn correlation_id(&self) -> Option<Uuid> {
        None
    }
}

dyn_clone::clone_trait_object!(DomainEvent);
