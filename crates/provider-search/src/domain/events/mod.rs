mod provider_events;

#[cfg(test)]
mod provider_events_test;

pub use provider_events::ProviderEvent;
