mod searchable_provider_builder;

pub use searchable_provider_builder::SearchableProviderBuilder;
