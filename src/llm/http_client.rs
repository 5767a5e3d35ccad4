use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Shared client settings. Inference responses are long, so the request
/// timeout is generous while connecting stays short.
pub fn build_provider_client_with_timeout(timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to default HTTP client");
            Client::new()
        })
}
