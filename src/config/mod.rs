pub mod schema;

pub use schema::{Config, InferenceConfig, ObservabilityConfig, ProviderConfig};
