//! LLM provider integration for Resolute.
//!
//! Provides the Gemini `generateContent` REST client implementing the
//! [`resolute_interface::GenerationDriver`] seam, plus its configuration.

mod config;
mod gemini;

pub use config::{DEFAULT_BASE_URL, DEFAULT_MODEL, GatewayConfig, GatewayConfigBuilder};
pub use gemini::{
    GeminiCandidate, GeminiClient, GeminiContent, GeminiGenerationConfig, GeminiPart,
    GeminiRequest, GeminiResponse, GeminiUsage,
};
