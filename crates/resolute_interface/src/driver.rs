//! Generation driver trait definition.

use async_trait::async_trait;
use resolute_core::GenerationOptions;
use resolute_error::ResoluteResult;

/// Driver for an external text-generation API.
///
/// The contract is deliberately narrow: send a prompt, get text back, or
/// fail with a transport/auth error. Implementations make exactly one
/// outbound call per invocation and do not retry.
#[async_trait]
pub trait GenerationDriver: Send + Sync {
    /// Generate text for the given prompt.
    ///
    /// Options override the driver's defaults for model selection and
    /// sampling where present.
    ///
    /// # Errors
    ///
    /// Returns an error if the outbound call fails (network, auth, rate
    /// limit) or the response carries no text.
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> ResoluteResult<String>;

    /// The model used when no override is supplied.
    fn model_name(&self) -> &str;
}
