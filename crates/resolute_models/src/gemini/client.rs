//! Client for the Gemini `generateContent` REST API.

use crate::GatewayConfig;
use crate::gemini::{GeminiResponse, conversions};
use async_trait::async_trait;
use reqwest::Client;
use resolute_core::{GenerationOptions, ModelInfo};
use resolute_error::{GeminiError, GeminiErrorKind, ResoluteResult};
use resolute_interface::GenerationDriver;
use tracing::{debug, error, instrument};

/// Client for the Gemini generation API.
///
/// Holds a configured `reqwest` client; one instance per process is
/// sufficient and calls are independent.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a new client against the public Gemini endpoint.
    #[instrument(skip(api_key), fields(model = %model.as_ref()))]
    pub fn new(api_key: impl Into<String>, model: impl AsRef<str>) -> Self {
        Self::with_base_url(api_key, model.as_ref(), crate::config::DEFAULT_BASE_URL)
    }

    /// Creates a new client against a custom endpoint.
    pub fn with_base_url(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let client = Client::new();
        let model = model.into();
        let base_url = base_url.into();

        debug!(model = %model, url = %base_url, "Created Gemini client");

        Self {
            client,
            api_key: api_key.into(),
            model,
            base_url,
        }
    }

    /// Creates a client from a gateway configuration.
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::with_base_url(
            config.api_key().clone(),
            config.model().clone(),
            config.base_url().clone(),
        )
    }

    /// Static metadata for the configured model.
    pub fn model_info(&self) -> ModelInfo {
        ModelInfo::for_model(self.model.clone())
    }

    /// Generates text for a combined prompt.
    ///
    /// Performs exactly one outbound call; there is no retry.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API reports a non-success
    /// status, or the response carries no candidate text.
    #[instrument(skip(self, prompt, options), fields(model = %self.model))]
    pub async fn generate_text(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, GeminiError> {
        let model = options
            .model()
            .clone()
            .unwrap_or_else(|| self.model.clone());
        let request = conversions::to_gemini_request(prompt, options)?;
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, model
        );

        debug!(model = %model, prompt_len = prompt.len(), "Sending generation request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::ApiRequest(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");

            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message: error_text,
            }));
        }

        let body: GeminiResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        let text = conversions::from_gemini_response(&body)?;

        debug!(response_len = text.len(), "Received generation response");

        Ok(text)
    }
}

#[async_trait]
impl GenerationDriver for GeminiClient {
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> ResoluteResult<String> {
        Ok(self.generate_text(prompt, options).await?)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
