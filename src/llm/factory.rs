use super::gemini::GeminiProvider;
use super::traits::Provider;
use crate::config::Config;
use std::sync::Arc;

/// Provider names accepted in `[provider] name`.
pub const KNOWN_PROVIDERS: [&str; 3] = ["gemini", "google", "google-gemini"];

/// Build the configured provider, or `None` when the AI path is disabled.
pub fn create_provider(config: &Config) -> anyhow::Result<Option<Arc<dyn Provider>>> {
    if !config.inference.ai_enabled {
        tracing::info!("AI inference disabled; statistical estimator only");
        return Ok(None);
    }

    let provider = &config.provider;
    match provider.name.as_str() {
        "gemini" | "google" | "google-gemini" => {
            let gemini = GeminiProvider::with_base_url(
                config.api_key.as_deref(),
                &provider.model,
                &provider.base_url,
                provider.request_timeout_secs,
            );
            if !gemini.has_api_key() {
                tracing::warn!(
                    provider = %provider.name,
                    "no API key configured; AI calls will fail and fall back"
                );
            }
            Ok(Some(Arc::new(gemini)))
        }
        other => anyhow::bail!(
            "Unknown provider: {other}. Supported: {}",
            KNOWN_PROVIDERS.join(", ")
        ),
    }
}
