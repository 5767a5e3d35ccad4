//! Google Gemini `generateContent` provider.
//!
//! API key from config or the `GEMINI_API_KEY` / `GOOGLE_API_KEY` env vars.
//! One request per call; no retries.

use crate::error::LlmError;
use crate::llm::{
    DEFAULT_TIMEOUT_SECS, build_provider_client_with_timeout, sanitize_api_error,
    traits::{GenerationOptions, Provider},
};
use crate::utils::text::char_prefix;
use reqwest::{Client, StatusCode};
use std::future::Future;
use std::pin::Pin;

mod types;
use types::{
    Content, ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    Part,
};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const NAME: &str = "gemini";
const RESPONSE_PREVIEW_CHARS: usize = 500;

pub struct GeminiProvider {
    api_key: Option<String>,
    model: String,
    base_url: String,
    client: Client,
}

impl GeminiProvider {
    /// Create a provider against the public endpoint.
    ///
    /// Key priority: explicit key, then `GEMINI_API_KEY`, then `GOOGLE_API_KEY`.
    pub fn new(api_key: Option<&str>, model: &str) -> Self {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_base_url(
        api_key: Option<&str>,
        model: &str,
        base_url: &str,
        timeout_secs: u64,
    ) -> Self {
        Self {
            api_key: resolve_api_key(api_key),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client: build_provider_client_with_timeout(timeout_secs),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn model_name(model: &str) -> String {
        if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{model}")
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.base_url,
            Self::model_name(&self.model)
        )
    }

    fn build_request(prompt: &str, options: &GenerationOptions) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: options.temperature,
                max_output_tokens: options.max_output_tokens,
                top_p: options.top_p,
                top_k: options.top_k,
            },
        }
    }

    fn status_error(status: StatusCode, body: &str) -> LlmError {
        match status {
            StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimited {
                provider: NAME.into(),
            },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::Auth {
                provider: NAME.into(),
            },
            _ => {
                let message = serde_json::from_str::<ErrorEnvelope>(body)
                    .map_or_else(|_| body.to_string(), |e| e.error.message);
                LlmError::Status {
                    provider: NAME.into(),
                    status: status.as_u16(),
                    message: sanitize_api_error(&message),
                }
            }
        }
    }

    /// Text of the first part of the first candidate. Each missing level of
    /// the envelope has its own message.
    fn extract_text(response: GenerateContentResponse) -> Result<String, LlmError> {
        let Some(candidates) = response.candidates else {
            let reason = response
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .map(|r| format!(" (block reason: {r})"))
                .unwrap_or_default();
            return Err(LlmError::Blocked(format!(
                "API response is missing candidates array. The content may have been blocked or filtered.{reason}"
            )));
        };
        let Some(candidate) = candidates.into_iter().next() else {
            return Err(LlmError::Blocked(
                "API response candidates array is empty. The request may have been rejected.".into(),
            ));
        };
        let finish_reason = candidate.finish_reason;
        let Some(content) = candidate.content else {
            tracing::warn!(provider = NAME, finish_reason = ?finish_reason, "candidate has no content");
            return Err(LlmError::Blocked(
                "API response is missing content. Response may have been blocked.".into(),
            ));
        };
        let Some(part) = content.parts.and_then(|parts| parts.into_iter().next()) else {
            return Err(LlmError::Blocked("API response is missing content parts.".into()));
        };
        match part.text {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(LlmError::Blocked("API response is missing text content.".into())),
        }
    }

    async fn send(&self, prompt: &str, options: &GenerationOptions) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| LlmError::MissingApiKey {
            provider: NAME.into(),
        })?;
        let request = Self::build_request(prompt, options);

        tracing::info!(
            provider = NAME,
            model = %self.model,
            prompt_chars = prompt.len(),
            temperature = options.temperature,
            "sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|err| LlmError::Request {
                provider: NAME.into(),
                message: sanitize_api_error(&err.without_url().to_string()),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| LlmError::Request {
            provider: NAME.into(),
            message: sanitize_api_error(&err.without_url().to_string()),
        })?;

        if !status.is_success() {
            let err = Self::status_error(status, &body);
            tracing::warn!(provider = NAME, status = status.as_u16(), error = %err, "request rejected");
            return Err(err);
        }

        tracing::debug!(
            provider = NAME,
            preview = %char_prefix(&body, RESPONSE_PREVIEW_CHARS),
            "generateContent response"
        );

        let envelope: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|err| LlmError::Request {
                provider: NAME.into(),
                message: format!("malformed response envelope: {err}"),
            })?;
        Self::extract_text(envelope)
    }
}

fn resolve_api_key(explicit: Option<&str>) -> Option<String> {
    if let Some(key) = explicit.map(str::trim).filter(|k| !k.is_empty()) {
        return Some(key.to_string());
    }
    ["GEMINI_API_KEY", "GOOGLE_API_KEY"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

impl Provider for GeminiProvider {
    fn name(&self) -> &str {
        NAME
    }

    fn generate<'a>(
        &'a self,
        prompt: &'a str,
        options: &'a GenerationOptions,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>> {
        Box::pin(async move { Ok(self.send(prompt, options).await?) })
    }
}
