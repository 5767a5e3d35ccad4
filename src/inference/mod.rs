//! Hybrid inference: one AI attempt, statistical fallback.
//!
//! Every failure on the AI path (prompt rendering, provider call, parsing,
//! validation) is logged and swallowed. Only the estimator precondition
//! reaches the caller.

use crate::error::InferenceError;
use crate::estimator;
use crate::llm::{GenerationOptions, Provider};
use crate::parser::{DEFAULT_RAW_PREVIEW_CHARS, parse_with_preview};
use crate::profile::PreferenceProfile;
use crate::prompt::compile_inference_prompt;
use crate::session::SwipeSession;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceResult {
    pub preferences: PreferenceProfile,
    /// Model text, kept whenever the provider answered (even unparseable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
    #[serde(rename = "usedAI")]
    pub used_ai: bool,
    /// Why the AI result was discarded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

/// How the AI attempt ended, before the fallback decision.
enum Attempt {
    Parsed {
        raw: String,
        profile: PreferenceProfile,
    },
    Rejected {
        raw: Option<String>,
        reason: String,
    },
}

pub struct HybridInference {
    provider: Option<Arc<dyn Provider>>,
    options: GenerationOptions,
    raw_preview_chars: usize,
}

impl HybridInference {
    pub fn new(provider: Option<Arc<dyn Provider>>, options: GenerationOptions) -> Self {
        Self {
            provider,
            options,
            raw_preview_chars: DEFAULT_RAW_PREVIEW_CHARS,
        }
    }

    /// Estimator only; no provider is ever called.
    pub fn offline() -> Self {
        Self::new(None, GenerationOptions::default())
    }

    #[must_use]
    pub fn with_raw_preview_chars(mut self, chars: usize) -> Self {
        self.raw_preview_chars = chars;
        self
    }

    pub fn is_offline(&self) -> bool {
        self.provider.is_none()
    }

    pub async fn infer(&self, session: &SwipeSession) -> Result<InferenceResult, InferenceError> {
        if !session.can_infer() {
            return Err(InferenceError::NoLikedSwipes {
                total: session.total(),
            });
        }

        let Some(provider) = self.provider.as_deref() else {
            return Self::fallback(session, None, None);
        };

        match self.attempt_ai(provider, session).await {
            Attempt::Parsed { raw, profile } => {
                tracing::info!(
                    provider = provider.name(),
                    liked = session.liked_count(),
                    total = session.total(),
                    "AI inference succeeded"
                );
                Ok(InferenceResult {
                    preferences: profile,
                    raw_response: Some(raw),
                    used_ai: true,
                    fallback_reason: None,
                })
            }
            Attempt::Rejected { raw, reason } => {
                tracing::warn!(
                    provider = provider.name(),
                    reason = %reason,
                    "AI inference failed, falling back to statistical estimator"
                );
                Self::fallback(session, raw, Some(reason))
            }
        }
    }

    async fn attempt_ai(&self, provider: &dyn Provider, session: &SwipeSession) -> Attempt {
        let prompt = match compile_inference_prompt(session) {
            Ok(prompt) => prompt,
            Err(err) => {
                return Attempt::Rejected {
                    raw: None,
                    reason: format!("prompt rendering failed: {err:#}"),
                };
            }
        };
        tracing::debug!(prompt_chars = prompt.chars().count(), "inference prompt compiled");

        let raw = match provider.generate(&prompt, &self.options).await {
            Ok(raw) => raw,
            Err(err) => {
                return Attempt::Rejected {
                    raw: None,
                    reason: format!("{err:#}"),
                };
            }
        };

        match parse_with_preview(&raw, self.raw_preview_chars) {
            Ok(profile) => Attempt::Parsed { raw, profile },
            Err(err) => Attempt::Rejected {
                raw: Some(raw),
                reason: err.to_string(),
            },
        }
    }

    fn fallback(
        session: &SwipeSession,
        raw_response: Option<String>,
        fallback_reason: Option<String>,
    ) -> Result<InferenceResult, InferenceError> {
        let preferences = estimator::estimate(session)?;
        Ok(InferenceResult {
            preferences,
            raw_response,
            used_ai: false,
            fallback_reason,
        })
    }
}
