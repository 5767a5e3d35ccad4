//! Prompt templates for the inference round trip.

mod engine;
mod inference;

pub use engine::{INFERENCE_TEMPLATE, PromptEngine};
pub use inference::{compile_for_swipes, compile_inference_prompt};
