//! Strict prompted-generation gateway.

use crate::prompt::build_prompt;
use resolute_core::{GenerateRequest, GenerationResult, estimate_tokens};
use resolute_error::ResoluteResult;
use resolute_interface::{GenerationDriver, NoopTraceSink, SpanRecord, TraceOutcome, TraceSink};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Gateway turning a prompt pair into a best-effort structured result.
///
/// Each call performs exactly one outbound driver call, wrapped in trace
/// telemetry in the fixed order open-trace, input span, generate, output
/// span, close-trace. Transport failures close the trace and propagate
/// unchanged; malformed model output is carried as a raw fallback value,
/// never an error.
///
/// Calls are independent; the gateway holds no mutable state and may be
/// shared across tasks.
pub struct Gateway<D: GenerationDriver> {
    driver: D,
    tracer: Arc<dyn TraceSink>,
}

impl<D: GenerationDriver> Gateway<D> {
    /// Creates a gateway without telemetry.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            tracer: Arc::new(NoopTraceSink),
        }
    }

    /// Creates a gateway emitting telemetry to the given sink.
    pub fn with_tracer(driver: D, tracer: Arc<dyn TraceSink>) -> Self {
        Self { driver, tracer }
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// The telemetry sink.
    pub fn tracer(&self) -> &Arc<dyn TraceSink> {
        &self.tracer
    }

    /// Generates a structured result for the given request.
    ///
    /// # Errors
    ///
    /// Returns an error only when the outbound generation call itself
    /// fails; the error is re-raised unchanged after the trace closes.
    #[instrument(skip(self, req), fields(trace_name = %req.trace_name()))]
    pub async fn generate(&self, req: &GenerateRequest) -> ResoluteResult<GenerationResult> {
        let trace = self.tracer.start_trace(req.trace_name());

        let prompt = build_prompt(
            req.system_prompt(),
            req.user_prompt(),
            req.options().as_ref(),
        );

        self.tracer.record_span(
            &trace,
            SpanRecord::record(
                "llm_input",
                json!({
                    "system": req.system_prompt(),
                    "user": req.user_prompt(),
                    "estimated_input_tokens": estimate_tokens(&prompt),
                }),
            ),
        );

        let options = req.options().clone().unwrap_or_default();

        match self.driver.generate(&prompt, &options).await {
            Ok(text) => {
                let result = GenerationResult::from_text(text);

                self.tracer.record_span(
                    &trace,
                    SpanRecord::record(
                        "llm_output",
                        json!({
                            "output": result.to_value(),
                            "structured": result.is_structured(),
                        }),
                    ),
                );
                self.tracer.end_trace(&trace, TraceOutcome::Success);

                debug!(structured = result.is_structured(), "Generation completed");

                Ok(result)
            }
            Err(e) => {
                self.tracer
                    .end_trace(&trace, TraceOutcome::Error(e.to_string()));
                Err(e)
            }
        }
    }
}
