//! AI response parsing: extract, validate, repair, type.

mod coercion;
pub mod extract;
pub mod schema;
mod validate;

pub use extract::{Extracted, Tier, extract_structured_block};
pub use validate::validate_profile;

use crate::error::ParseError;
use crate::profile::PreferenceProfile;
use crate::utils::text::char_prefix;

/// Chars of raw model output written to the log before parsing.
pub const DEFAULT_RAW_PREVIEW_CHARS: usize = 500;

pub type ParsingResult = Result<PreferenceProfile, ParseError>;

pub fn parse_inference_response(raw: &str) -> ParsingResult {
    parse_with_preview(raw, DEFAULT_RAW_PREVIEW_CHARS)
}

/// Parse model output into a validated profile, logging the first
/// `preview_chars` characters of the raw text for diagnosis.
pub fn parse_with_preview(raw: &str, preview_chars: usize) -> ParsingResult {
    tracing::debug!(
        chars = raw.chars().count(),
        preview = %char_prefix(raw, preview_chars),
        "raw AI response"
    );

    let result = extract_and_validate(raw);
    if let Err(err) = &result {
        tracing::warn!(
            path = err.field_path().unwrap_or("-"),
            error = %err,
            preview = %char_prefix(raw, preview_chars),
            "AI response rejected"
        );
    }
    result
}

fn extract_and_validate(raw: &str) -> ParsingResult {
    let extracted = extract_structured_block(raw).ok_or(ParseError::NoStructuredBlock)?;
    tracing::debug!(tier = %extracted.tier, chars = extracted.body.len(), "structured block found");

    let mut value: serde_json::Value = serde_json::from_str(extracted.body)?;
    validate_profile(&mut value)?;

    serde_json::from_value(value)
        .map_err(|err| ParseError::validation("profile", format!("does not match the profile type: {err}")))
}
