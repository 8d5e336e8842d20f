mod event;
mod envelope;

pub use event::DomainEvent;
pub use envelope::EventEnvelope;
