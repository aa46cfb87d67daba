//! Lenient prompted-generation gateway.

use crate::prompt::build_simple_prompt;
use resolute_core::GenerationOptions;
use resolute_interface::GenerationDriver;
use tracing::{error, instrument};

/// Sentinel returned by [`SimpleGateway::generate`] on any failure.
pub const GENERATION_ERROR_MESSAGE: &str = "Error generating content. Please try again.";

/// Simplified gateway without tracing.
///
/// Accepts generation options and swallows every failure into a fixed
/// human-readable sentinel string. Callers that cannot tolerate thrown
/// errors depend on this mode; it must not be unified with [`crate::Gateway`].
pub struct SimpleGateway<D: GenerationDriver> {
    driver: D,
}

impl<D: GenerationDriver> SimpleGateway<D> {
    /// Creates a lenient gateway over the given driver.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Generates raw output text for the given prompt pair.
    ///
    /// Never fails: transport errors and empty responses alike resolve to
    /// [`GENERATION_ERROR_MESSAGE`].
    #[instrument(skip_all)]
    pub async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: &GenerationOptions,
    ) -> String {
        let prompt = build_simple_prompt(system_prompt, user_prompt, options);

        match self.driver.generate(&prompt, options).await {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, "LLM generation error");
                GENERATION_ERROR_MESSAGE.to_string()
            }
        }
    }
}
