mod searchable_provider;

#[cfg(test)]
mod searchable_provider_test;

pub use searchable_provider::SearchableProvider;
