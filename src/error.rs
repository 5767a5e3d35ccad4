use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `brandtaste`.
///
/// Each subsystem defines its own error type. Library callers can match on
/// these to decide recovery strategy; application edges keep using
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum BrandtasteError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Catalog / session input ─────────────────────────────────────────
    #[error("catalog: {0}")]
    Catalog(#[from] CatalogError),

    // ── LLM / Provider ──────────────────────────────────────────────────
    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    // ── AI response parsing ─────────────────────────────────────────────
    #[error("parse: {0}")]
    Parse(#[from] ParseError),

    // ── Inference ───────────────────────────────────────────────────────
    #[error("inference: {0}")]
    Inference(#[from] InferenceError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Catalog errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("embedded catalog is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("catalog entry {brand}: {reason}")]
    InvalidEntry { brand: String, reason: String },

    #[error("unknown brand: {0}")]
    UnknownBrand(String),

    #[error("built-in catalog failed to load: {0}")]
    Builtin(String),
}

// ─── LLM / Provider errors ──────────────────────────────────────────────────

/// Failure classes of a single generative-AI call.
///
/// Callers outside the inference core inspect these to produce user-facing
/// guidance; inside the core every variant simply triggers the fallback.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API rate limit reached. Please wait and try again.")]
    RateLimited { provider: String },

    #[error("Invalid API key for {provider}. Check your configuration.")]
    Auth { provider: String },

    #[error("{provider} API key is not configured. Set GEMINI_API_KEY or api_key in config.toml.")]
    MissingApiKey { provider: String },

    #[error("{provider} API error ({status}): {message}")]
    Status {
        provider: String,
        status: u16,
        message: String,
    },

    #[error("{0}")]
    Blocked(String),

    #[error("provider {provider} request failed: {message}")]
    Request { provider: String, message: String },
}

// ─── AI response parsing errors ─────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to parse AI response: No JSON code block found in AI response")]
    NoStructuredBlock,

    #[error("Failed to parse AI response: {source}")]
    Syntax {
        #[from]
        source: serde_json::Error,
    },

    #[error("Validation failed: {path} {reason}")]
    Validation { path: String, reason: String },
}

impl ParseError {
    pub(crate) fn validation(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Dotted path of the offending field, when the failure is a schema violation.
    pub fn field_path(&self) -> Option<&str> {
        match self {
            Self::Validation { path, .. } => Some(path),
            Self::NoStructuredBlock | Self::Syntax { .. } => None,
        }
    }
}

// ─── Inference errors ───────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("at least one liked swipe is required to infer preferences ({total} swipes, 0 liked)")]
    NoLikedSwipes { total: usize },
}
