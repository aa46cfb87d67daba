//! Core data types for the Resolute LLM gateway library.
//!
//! This crate provides the foundation data types used across all Resolute
//! interfaces.

mod observability;
mod request;
mod result;
mod tokens;

pub use observability::{init_metrics, shutdown_metrics};
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerationOptions, GenerationOptionsBuilder,
    OutputFormat,
};
pub use result::GenerationResult;
pub use tokens::{ModelInfo, ModelInfoBuilder, estimate_tokens};
