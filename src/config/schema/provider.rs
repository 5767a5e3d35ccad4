use crate::llm::DEFAULT_TIMEOUT_SECS;
use crate::llm::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderConfig {
    /// "gemini" (aliases: "google", "google-gemini")
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_name() -> String {
    "gemini".into()
}

fn default_model() -> String {
    DEFAULT_MODEL.into()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            model: default_model(),
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}
