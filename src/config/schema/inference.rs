use crate::llm::GenerationOptions;
use crate::parser::DEFAULT_RAW_PREVIEW_CHARS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InferenceConfig {
    /// When false only the statistical estimator runs.
    #[serde(default = "default_true")]
    pub ai_enabled: bool,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    #[serde(default = "default_top_p")]
    pub top_p: f64,
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    /// Characters of raw model output kept in diagnostic logs.
    #[serde(default = "default_raw_preview_chars")]
    pub raw_preview_chars: usize,
}

fn default_true() -> bool {
    true
}

fn default_temperature() -> f64 {
    GenerationOptions::default().temperature
}

fn default_max_output_tokens() -> u32 {
    GenerationOptions::default().max_output_tokens
}

fn default_top_p() -> f64 {
    GenerationOptions::default().top_p
}

fn default_top_k() -> u32 {
    GenerationOptions::default().top_k
}

fn default_raw_preview_chars() -> usize {
    DEFAULT_RAW_PREVIEW_CHARS
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            ai_enabled: default_true(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            top_p: default_top_p(),
            top_k: default_top_k(),
            raw_preview_chars: default_raw_preview_chars(),
        }
    }
}

impl InferenceConfig {
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
            top_p: self.top_p,
            top_k: self.top_k,
        }
    }
}
