use super::coercion::coerce_value;
use super::schema::{FieldKind, FieldRule, PROFILE_SCHEMA};
use crate::catalog::is_hex_color;
use crate::error::ParseError;
use serde_json::Value;

const COUNTS: &str = "metadata.inference";

/// Walk every schema rule over `root`, repairing the overlay intensity in
/// place. Stops at the first violation.
pub fn validate_profile(root: &mut Value) -> Result<(), ParseError> {
    if !root.is_object() {
        return Err(ParseError::validation("profile", "must be a JSON object"));
    }

    for rule in PROFILE_SCHEMA.iter() {
        check_rule(root, rule)?;
    }
    check_swipe_counts(root)
}

fn pointer(path: &str) -> String {
    format!("/{}", path.replace('.', "/"))
}

fn check_rule(root: &mut Value, rule: &FieldRule) -> Result<(), ParseError> {
    let fail = || ParseError::validation(&rule.path, rule.kind.requirement());

    if rule.kind == FieldKind::Intensity {
        let slot = root.pointer_mut(&pointer(&rule.path)).ok_or_else(fail)?;
        let repaired = repair_intensity(slot, &rule.path).ok_or_else(fail)?;
        *slot = repaired;
        return Ok(());
    }

    let value = root.pointer(&pointer(&rule.path));
    if value.is_some_and(|v| matches_kind(v, rule.kind)) {
        Ok(())
    } else {
        tracing::debug!(path = %rule.path, found = ?value, "profile field rejected");
        Err(fail())
    }
}

fn matches_kind(value: &Value, kind: FieldKind) -> bool {
    match kind {
        FieldKind::Object => value.is_object(),
        FieldKind::Text => value.as_str().is_some_and(|s| !s.trim().is_empty()),
        FieldKind::Number { min, max } => value.as_f64().is_some_and(|n| (min..=max).contains(&n)),
        FieldKind::Count => value.as_u64().is_some_and(|n| u32::try_from(n).is_ok()),
        FieldKind::Flag => value.is_boolean(),
        FieldKind::StringList => value
            .as_array()
            .is_some_and(|items| items.iter().all(Value::is_string)),
        FieldKind::OneOf(allowed) => value.as_str().is_some_and(|s| allowed.contains(&s)),
        FieldKind::HexColor => value.as_str().is_some_and(is_hex_color),
        FieldKind::Intensity => value.is_number(),
    }
}

/// Numeric strings become numbers; out-of-range numbers are clamped.
fn repair_intensity(value: &Value, path: &str) -> Option<Value> {
    let coerced = coerce_value(value, "number");
    if value.is_string() && coerced.is_number() {
        tracing::warn!(path, original = %value, "coerced numeric string to number");
    }
    let n = coerced.as_f64()?;
    if (0.0..=1.0).contains(&n) {
        return Some(coerced);
    }
    let clamped = n.clamp(0.0, 1.0);
    tracing::warn!(path, original = n, clamped, "value outside 0-1 range, clamping");
    serde_json::Number::from_f64(clamped).map(Value::Number)
}

fn check_swipe_counts(root: &Value) -> Result<(), ParseError> {
    let count = |field: &str| {
        root.pointer(&pointer(&format!("{COUNTS}.{field}")))
            .and_then(Value::as_u64)
            .unwrap_or_default()
    };
    let (total, liked, disliked) = (
        count("totalSwipes"),
        count("likedCount"),
        count("dislikedCount"),
    );
    if liked + disliked == total {
        Ok(())
    } else {
        Err(ParseError::validation(
            format!("{COUNTS}.totalSwipes"),
            format!(
                "must equal likedCount + dislikedCount ({liked} + {disliked}), found {total}"
            ),
        ))
    }
}
