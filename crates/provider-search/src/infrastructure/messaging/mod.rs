mod provider_events_handler;


pub use provider_events_handler::ProviderEventsHandler;
