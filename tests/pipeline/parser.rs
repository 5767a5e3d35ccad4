use brandtaste::parser::{Tier, extract_structured_block, parse_with_preview};
use brandtaste::{ParseError, estimate, parse_inference_response};
use serde_json::Value;

use crate::swipe_harness::{fenced, profile_value, session};

fn sample() -> Value {
    let s = session(&[("Chanel", true), ("Tesla", true), ("Nike", false)]);
    profile_value(&estimate(&s).unwrap())
}

fn reply_with(value: &Value) -> String {
    format!(
        "STEP 1: the user prefers restraint.\n\n{}",
        fenced("json", &serde_json::to_string_pretty(value).unwrap())
    )
}

mod round_trip {
    use super::*;

    #[test]
    fn well_formed_profile_parses_to_identical_object() {
        let value = sample();
        let profile = parse_inference_response(&reply_with(&value)).unwrap();
        assert_eq!(profile_value(&profile), value);
    }

    #[test]
    fn bare_object_after_prose_is_accepted() {
        let value = sample();
        let raw = format!(
            "Here is the profile: {} Hope it helps.",
            serde_json::to_string(&value).unwrap()
        );
        let profile = parse_inference_response(&raw).unwrap();
        assert_eq!(profile_value(&profile), value);
    }
}

mod repair {
    use super::*;

    #[test]
    fn numeric_string_intensity_is_coerced_and_clamped() {
        let mut value = sample();
        value["imageryAndMedia"]["heroImageOverlay"]["intensity"] = Value::from("1.5");
        let profile = parse_inference_response(&reply_with(&value)).unwrap();
        let intensity = profile.imagery_and_media.hero_image_overlay.intensity;
        assert!((intensity - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_intensity_is_clamped_to_zero() {
        let mut value = sample();
        value["imageryAndMedia"]["heroImageOverlay"]["intensity"] = Value::from(-3);
        let profile = parse_inference_response(&reply_with(&value)).unwrap();
        assert!(profile.imagery_and_media.hero_image_overlay.intensity.abs() < f64::EPSILON);
    }

    #[test]
    fn non_numeric_intensity_is_rejected() {
        let mut value = sample();
        value["imageryAndMedia"]["heroImageOverlay"]["intensity"] = Value::from("strong");
        let err = parse_inference_response(&reply_with(&value)).unwrap_err();
        assert_eq!(
            err.field_path(),
            Some("imageryAndMedia.heroImageOverlay.intensity")
        );
    }
}

mod hard_failures {
    use super::*;

    #[test]
    fn named_color_mentions_color_palette() {
        let mut value = sample();
        value["colorPalette"]["accentColor"] = Value::from("blue");
        let err = parse_inference_response(&reply_with(&value)).unwrap_err();
        assert!(err.to_string().contains("colorPalette"), "{err}");
        assert_eq!(err.field_path(), Some("colorPalette.accentColor"));
    }

    #[test]
    fn mood_value_as_string_is_not_repaired() {
        let mut value = sample();
        value["aestheticAndMood"]["primaryMoods"]["luxury"]["value"] = Value::from("8");
        let err = parse_inference_response(&reply_with(&value)).unwrap_err();
        assert_eq!(
            err.field_path(),
            Some("aestheticAndMood.primaryMoods.luxury.value")
        );
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        let mut value = sample();
        value["layoutAndStructure"]["contentFlow"] = Value::from("masonry");
        let err = parse_inference_response(&reply_with(&value)).unwrap_err();
        assert_eq!(err.field_path(), Some("layoutAndStructure.contentFlow"));
        assert!(err.to_string().contains("singleColumn"));
    }

    #[test]
    fn inconsistent_counts_are_rejected() {
        let mut value = sample();
        value["metadata"]["inference"]["totalSwipes"] = Value::from(9);
        let err = parse_inference_response(&reply_with(&value)).unwrap_err();
        assert_eq!(err.field_path(), Some("metadata.inference.totalSwipes"));
    }

    #[test]
    fn missing_group_is_reported_by_name() {
        let mut value = sample();
        value.as_object_mut().unwrap().remove("typography");
        let err = parse_inference_response(&reply_with(&value)).unwrap_err();
        assert_eq!(err.field_path(), Some("typography"));
    }

    #[test]
    fn prose_only_reply_has_no_block() {
        let err = parse_with_preview("I am unable to analyze these designs.", 10).unwrap_err();
        assert!(matches!(err, ParseError::NoStructuredBlock));
    }
}

mod precedence {
    use super::*;

    #[test]
    fn json_tagged_fence_beats_plain_fence() {
        let value = sample();
        let raw = format!(
            "{}\n\n{}\n\n{}",
            fenced("json", &serde_json::to_string(&value).unwrap()),
            fenced("", "{\"metadata\": \"decoy\"}"),
            "done"
        );
        let extracted = extract_structured_block(&raw).unwrap();
        assert_eq!(extracted.tier, Tier::TaggedFence);
        assert!(parse_inference_response(&raw).is_ok());
    }

    #[test]
    fn first_tagged_fence_is_parsed_when_a_later_one_follows() {
        let value = sample();
        let raw = format!(
            "{}\n\nAppendix:\n{}",
            fenced("json", &serde_json::to_string(&value).unwrap()),
            fenced("json", "{\"parameter\": \"colorScheme\"}")
        );
        let profile = parse_inference_response(&raw).unwrap();
        assert_eq!(profile_value(&profile), value);
    }

    #[test]
    fn plain_fence_beats_bare_object() {
        let raw = format!(
            "{{\"metadata\": 1}}\n{}",
            fenced("", "{\"metadata\": 2}")
        );
        let extracted = extract_structured_block(&raw).unwrap();
        assert_eq!(extracted.tier, Tier::Fence);
        assert_eq!(extracted.body, "{\"metadata\": 2}");
    }
}
