mod core;
mod inference;
mod observability;
mod provider;

pub use self::core::Config;
pub use inference::InferenceConfig;
pub use observability::ObservabilityConfig;
pub use provider::ProviderConfig;
