mod provider_name;
mod rating;
mod searchable_provider_id;
mod service_id;
mod subscription_tier;

#[cfg(test)]
mod tests;

pub use provider_name::ProviderName;
pub use rating::Rating;
pub use searchable_provider_id::SearchableProviderId;
pub use service_id::ServiceId;
pub use subscription_tier::SubscriptionTier;
