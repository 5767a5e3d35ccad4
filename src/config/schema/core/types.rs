use crate::config::schema::{InferenceConfig, ObservabilityConfig, ProviderConfig};
use crate::error::ConfigError;
use crate::llm::KNOWN_PROVIDERS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_USER_ID: &str = "USER_PREFERENCES_001";

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip)]
    pub config_path: PathBuf,
    /// Provider API key. `GEMINI_API_KEY` / `GOOGLE_API_KEY` are used when unset.
    pub api_key: Option<String>,
    /// Written into `metadata.userId` of every inferred profile.
    #[serde(default = "default_user_id")]
    pub user_id: String,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub inference: InferenceConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

fn default_user_id() -> String {
    DEFAULT_USER_ID.into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            api_key: None,
            user_id: default_user_id(),
            provider: ProviderConfig::default(),
            inference: InferenceConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let inference = &self.inference;
        if !(0.0..=2.0).contains(&inference.temperature) {
            return Err(ConfigError::Validation(format!(
                "inference.temperature must be within [0, 2], got {}",
                inference.temperature
            )));
        }
        if inference.max_output_tokens == 0 {
            return Err(ConfigError::Validation(
                "inference.max_output_tokens must be greater than 0".into(),
            ));
        }
        if !(inference.top_p > 0.0 && inference.top_p <= 1.0) {
            return Err(ConfigError::Validation(format!(
                "inference.top_p must be within (0, 1], got {}",
                inference.top_p
            )));
        }
        if !KNOWN_PROVIDERS.contains(&self.provider.name.as_str()) {
            return Err(ConfigError::Validation(format!(
                "provider.name '{}' is not supported (expected one of: {})",
                self.provider.name,
                KNOWN_PROVIDERS.join(", ")
            )));
        }
        if self.user_id.trim().is_empty() {
            return Err(ConfigError::Validation("user_id must not be empty".into()));
        }
        if self.observability.level().is_none() {
            return Err(ConfigError::Validation(format!(
                "observability.log_level '{}' is not a tracing level",
                self.observability.log_level
            )));
        }
        Ok(())
    }
}
