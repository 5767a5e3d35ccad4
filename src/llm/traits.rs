use std::future::Future;
use std::pin::Pin;

/// Sampling parameters sent with every generation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f64,
    pub max_output_tokens: u32,
    pub top_p: f64,
    pub top_k: u32,
}

impl Default for GenerationOptions {
    /// Low temperature and a large output budget for step-by-step analysis.
    fn default() -> Self {
        Self {
            temperature: 0.2,
            max_output_tokens: 65_536,
            top_p: 0.95,
            top_k: 40,
        }
    }
}

/// Text-in, text-out generative model.
///
/// Failures are `anyhow` errors wrapping [`LlmError`](crate::error::LlmError)
/// where the cause is known, so callers can downcast to classify them.
pub trait Provider: Send + Sync {
    /// Provider identifier (e.g. "gemini").
    fn name(&self) -> &str;

    fn generate<'a>(
        &'a self,
        prompt: &'a str,
        options: &'a GenerationOptions,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl Provider for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn generate<'a>(
            &'a self,
            prompt: &'a str,
            options: &'a GenerationOptions,
        ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>> {
            Box::pin(async move { Ok(format!("{prompt}@{}", options.temperature)) })
        }
    }

    #[test]
    fn default_options_favour_consistency() {
        let options = GenerationOptions::default();
        assert!((options.temperature - 0.2).abs() < f64::EPSILON);
        assert_eq!(options.max_output_tokens, 65_536);
        assert_eq!(options.top_k, 40);
    }

    #[tokio::test]
    async fn trait_object_is_callable() {
        let provider: Box<dyn Provider> = Box::new(Echo);
        let options = GenerationOptions::default();
        let out = provider.generate("hi", &options).await.unwrap();
        assert_eq!(out, "hi@0.2");
        assert_eq!(provider.name(), "echo");
    }
}
