use serde_json::Value;

/// Coerce a JSON value to match a target schema type.
///
/// Models sometimes quote numbers. String values that parse cleanly are
/// converted; everything else is returned unchanged.
///
/// Only `"number"` is recognised as a target today.
#[must_use]
pub fn coerce_value(value: &Value, target_type: &str) -> Value {
    let Value::String(s) = value else {
        return value.clone();
    };

    match target_type {
        "number" => coerce_number(s).unwrap_or_else(|| value.clone()),
        _ => value.clone(),
    }
}

fn coerce_number(s: &str) -> Option<Value> {
    s.trim()
        .parse::<f64>()
        .ok()
        .and_then(|n| serde_json::Number::from_f64(n).map(Value::Number))
}

#[cfg(test)]
mod tests {
    use super::coerce_value;
    use serde_json::json;

    #[test]
    fn numeric_string_becomes_number() {
        assert_eq!(coerce_value(&json!("1.5"), "number"), json!(1.5));
        assert_eq!(coerce_value(&json!(" 0.4 "), "number"), json!(0.4));
    }

    #[test]
    fn non_numeric_string_is_unchanged() {
        assert_eq!(coerce_value(&json!("strong"), "number"), json!("strong"));
        assert_eq!(coerce_value(&json!(""), "number"), json!(""));
    }

    #[test]
    fn nan_is_not_a_number() {
        // f64 parses "NaN" but JSON cannot hold it.
        assert_eq!(coerce_value(&json!("NaN"), "number"), json!("NaN"));
    }

    #[test]
    fn non_string_passes_through() {
        assert_eq!(coerce_value(&json!(0.7), "number"), json!(0.7));
        assert_eq!(coerce_value(&json!(null), "number"), json!(null));
    }

    #[test]
    fn unknown_target_is_identity() {
        assert_eq!(coerce_value(&json!("7"), "integer"), json!("7"));
    }
}
