// ── Infrastructure ───────────────────────────────────────────────────────────
pub mod http_client;
pub mod scrub;
pub mod traits;

// ── Factory ─────────────────────────────────────────────────────────────────
pub mod factory;

// ── Provider implementations ────────────────────────────────────────────────
pub mod gemini;

pub use http_client::{DEFAULT_TIMEOUT_SECS, build_provider_client_with_timeout};
pub use scrub::{sanitize_api_error, scrub_secret_patterns};
pub use traits::{GenerationOptions, Provider};

pub use factory::{KNOWN_PROVIDERS, create_provider};
pub use gemini::GeminiProvider;
