mod postgres_subscription_tier;

pub use postgres_subscription_tier::PostgresSubscriptionTier;
