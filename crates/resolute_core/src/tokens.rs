//! Token estimation and model metadata.

use serde::{Deserialize, Serialize};

/// Estimate the token count of a text.
///
/// Rough approximation at ~4 characters per token for English; used for
/// span payloads, never for billing.
///
/// # Examples
///
/// ```
/// use resolute_core::estimate_tokens;
///
/// assert_eq!(estimate_tokens(""), 0);
/// assert_eq!(estimate_tokens("12345678"), 2);
/// assert_eq!(estimate_tokens("123456789"), 3);
/// ```
pub fn estimate_tokens(text: &str) -> u64 {
    (text.len() as u64).div_ceil(4)
}

/// Static metadata for a generation model.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ModelInfo {
    /// Model identifier.
    model: String,
    /// Maximum input context window, in tokens.
    max_input_tokens: u64,
    /// Maximum output length, in tokens.
    max_output_tokens: u64,
    /// Cost per 1k input tokens, in USD cents.
    cost_per_1k_input_tokens: f64,
    /// Cost per 1k output tokens, in USD cents.
    cost_per_1k_output_tokens: f64,
}

impl ModelInfo {
    /// Creates a builder for ModelInfo.
    pub fn builder() -> ModelInfoBuilder {
        ModelInfoBuilder::default()
    }

    /// Metadata for the default `gemini-2.5-flash-lite` model.
    pub fn gemini_flash_lite() -> Self {
        Self {
            model: "gemini-2.5-flash-lite".to_string(),
            max_input_tokens: 1_000_000,
            max_output_tokens: 16_000,
            cost_per_1k_input_tokens: 0.075,
            cost_per_1k_output_tokens: 0.3,
        }
    }

    /// Flash-lite-family metadata under a specific model name.
    pub fn for_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::gemini_flash_lite()
        }
    }
}
