//! Configuration for the generation API connection.

use derive_getters::Getters;
use resolute_error::{GeminiError, GeminiErrorKind};

/// Default model when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";

/// Default Gemini API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Configuration for the generation API connection.
///
/// One configured client per process is sufficient; the gateway borrows it
/// for every call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GatewayConfig {
    /// API key for the generation service
    api_key: String,
    /// Model identifier to use when requests carry no override
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Base URL of the generation service
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
}

impl GatewayConfig {
    /// Creates a builder for GatewayConfig.
    pub fn builder() -> GatewayConfigBuilder {
        GatewayConfigBuilder::default()
    }

    /// Create config from environment variables
    ///
    /// Reads:
    /// - `GEMINI_API_KEY` (required)
    /// - `RESOLUTE_MODEL` (default: "gemini-2.5-flash-lite")
    /// - `RESOLUTE_BASE_URL` (default: the public Gemini endpoint)
    pub fn from_env() -> Result<Self, GeminiError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        let model = std::env::var("RESOLUTE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url =
            std::env::var("RESOLUTE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(GatewayConfigBuilder::default()
            .api_key(api_key)
            .model(model)
            .base_url(base_url)
            .build()
            .expect("Valid GatewayConfig"))
    }
}
