//! Sequential batch generation.

use crate::Gateway;
use resolute_core::{GenerateRequest, GenerationOptions, GenerationResult};
use resolute_interface::{GenerationDriver, SpanRecord, TraceOutcome};
use serde_json::json;
use tracing::{error, instrument};

/// One prompt pair within a batch.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct BatchPrompt {
    /// Caller-supplied correlation id.
    #[builder(default)]
    id: Option<String>,
    /// System prompt framing the task.
    system: String,
    /// Free-form user prompt.
    user: String,
}

impl BatchPrompt {
    /// Creates a builder for BatchPrompt.
    pub fn builder() -> BatchPromptBuilder {
        BatchPromptBuilder::default()
    }
}

/// Outcome of one batch item.
///
/// Item failures are captured here rather than failing the batch.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct BatchResult {
    /// Correlation id from the prompt, if any.
    id: Option<String>,
    /// The generation result, when the item succeeded.
    output: Option<GenerationResult>,
    /// The failure message, when the item failed.
    error: Option<String>,
}

impl<D: GenerationDriver> Gateway<D> {
    /// Generates results for a batch of prompt pairs, sequentially.
    ///
    /// Each item is an independent traced generation; a failing item is
    /// recorded in its [`BatchResult`] and the batch continues. The batch
    /// itself always completes.
    #[instrument(skip(self, prompts, options), fields(batch_size = prompts.len()))]
    pub async fn generate_batch(
        &self,
        prompts: &[BatchPrompt],
        options: Option<GenerationOptions>,
    ) -> Vec<BatchResult> {
        let trace = self.tracer().start_trace("llm_batch_generation");
        self.tracer().record_span(
            &trace,
            SpanRecord::record("batch_setup", json!({ "prompt_count": prompts.len() })),
        );

        let mut results = Vec::with_capacity(prompts.len());

        for prompt in prompts {
            let mut builder = GenerateRequest::builder();
            builder
                .system_prompt(prompt.system().clone())
                .user_prompt(prompt.user().clone())
                .trace_name("llm_content_generation");
            if let Some(options) = options.clone() {
                builder.options(options);
            }
            let req = builder.build().expect("Valid request");

            match self.generate(&req).await {
                Ok(output) => results.push(BatchResult {
                    id: prompt.id().clone(),
                    output: Some(output),
                    error: None,
                }),
                Err(e) => {
                    error!(id = ?prompt.id(), error = %e, "Batch item failed");
                    results.push(BatchResult {
                        id: prompt.id().clone(),
                        output: None,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        let failed = results.iter().filter(|r| r.error().is_some()).count();
        self.tracer().record_span(
            &trace,
            SpanRecord::record(
                "batch_summary",
                json!({
                    "successful": results.len() - failed,
                    "failed": failed,
                }),
            ),
        );
        self.tracer().end_trace(&trace, TraceOutcome::Success);

        results
    }
}
