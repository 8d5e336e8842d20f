mod aggregate;
mod entity;

pub use aggregate::{AggregateMetadata, AggregateRoot};
pub use entity::EntityMetadata;
