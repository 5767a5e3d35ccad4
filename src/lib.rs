#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod estimator;
pub mod inference;
pub mod llm;
pub mod parser;
pub mod profile;
pub mod prompt;
pub mod session;
#[doc(hidden)]
pub mod utils;

pub use catalog::{BrandDesign, Catalog};
pub use config::Config;
pub use error::{BrandtasteError, InferenceError, LlmError, ParseError};
pub use estimator::estimate;
pub use inference::{HybridInference, InferenceResult};
pub use parser::parse_inference_response;
pub use profile::PreferenceProfile;
pub use prompt::compile_inference_prompt;
pub use session::{SwipeLog, SwipeRecord, SwipeResult, SwipeSession};
