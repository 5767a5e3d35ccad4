use std::sync::Arc;

use brandtaste::llm::GenerationOptions;
use brandtaste::{HybridInference, InferenceError, estimate};

use crate::swipe_harness::{ScriptedProvider, fenced, profile_value, session};

fn engine(provider: &Arc<ScriptedProvider>) -> HybridInference {
    HybridInference::new(Some(provider.clone()), GenerationOptions::default())
}

mod fallback {
    use super::*;

    #[tokio::test]
    async fn rejected_call_uses_estimator() {
        let provider = Arc::new(ScriptedProvider::failing("connection reset"));
        let s = session(&[("Nike", true), ("Chanel", false), ("Tesla", true)]);

        let result = engine(&provider).infer(&s).await.unwrap();
        assert!(!result.used_ai);
        assert!(result.raw_response.is_none());
        assert_eq!(result.fallback_reason.as_deref(), Some("connection reset"));
        assert_eq!(result.preferences, estimate(&s).unwrap());
        result.preferences.check_invariants().unwrap();
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn garbage_reply_is_kept_for_diagnosis() {
        let provider = Arc::new(ScriptedProvider::text("```json\n{ not json\n```"));
        let s = session(&[("Disney", true)]);

        let result = engine(&provider).infer(&s).await.unwrap();
        assert!(!result.used_ai);
        assert_eq!(result.raw_response.as_deref(), Some("```json\n{ not json\n```"));
        assert!(result.fallback_reason.is_some());
        assert_eq!(result.preferences, estimate(&s).unwrap());
    }

    #[tokio::test]
    async fn schema_violation_names_the_field() {
        let s = session(&[("BMW", true)]);
        let mut value = profile_value(&estimate(&s).unwrap());
        value["colorPalette"]["primaryTextColor"] = "white".into();
        let provider = Arc::new(ScriptedProvider::text(fenced(
            "json",
            &value.to_string(),
        )));

        let result = engine(&provider).infer(&s).await.unwrap();
        assert!(!result.used_ai);
        assert!(
            result
                .fallback_reason
                .unwrap()
                .contains("colorPalette.primaryTextColor")
        );
    }
}

mod ai_path {
    use super::*;

    #[tokio::test]
    async fn valid_reply_is_returned_as_is() {
        let s = session(&[("Chanel", true), ("Mercedes", true)]);
        let mut value = profile_value(&estimate(&s).unwrap());
        value["aestheticAndMood"]["primaryMoods"]["luxury"]["value"] = 9.9.into();
        value["metadata"]["inference"]["aiRefined"] = serde_json::json!(["luxury"]);
        let reply = format!("Reasoning...\n{}", fenced("json", &value.to_string()));
        let provider = Arc::new(ScriptedProvider::text(reply.clone()));

        let result = engine(&provider).infer(&s).await.unwrap();
        assert!(result.used_ai);
        assert_eq!(result.raw_response.as_deref(), Some(reply.as_str()));
        assert_eq!(profile_value(&result.preferences), value);
    }

    #[tokio::test]
    async fn provider_receives_compiled_prompt_and_options() {
        let provider = Arc::new(ScriptedProvider::failing("offline"));
        let options = GenerationOptions {
            temperature: 0.4,
            ..GenerationOptions::default()
        };
        let s = session(&[("Coca-Cola", true), ("BMW", false)]);
        HybridInference::new(Some(provider.clone()), options)
            .infer(&s)
            .await
            .unwrap();

        let prompt = provider.last_prompt().unwrap();
        assert!(prompt.contains("Brand: Coca-Cola"));
        assert!(prompt.contains("Brand: BMW"));
        assert_eq!(provider.last_options(), Some(options));
    }
}

mod precondition {
    use super::*;

    #[tokio::test]
    async fn zero_likes_propagate_and_skip_the_provider() {
        let provider = Arc::new(ScriptedProvider::text("unused"));
        let s = session(&[("Nike", false)]);

        let err = engine(&provider).infer(&s).await.unwrap_err();
        assert!(matches!(err, InferenceError::NoLikedSwipes { total: 1 }));
        assert_eq!(provider.calls(), 0);
    }
}
