//! Resolution analyzer.

use crate::SmartGoalAnalysis;
use resolute_core::{GenerateRequest, GenerationResult};
use resolute_error::ResoluteResult;
use resolute_gateway::Gateway;
use resolute_interface::{GenerationDriver, TemplateStore};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Version-stamped name of the analyzer prompt template.
pub const ANALYZER_TEMPLATE: &str = "resolution_analyzer_v1_2026-01-22";

/// Trace name grouping analyzer telemetry.
pub const ANALYZER_TRACE_NAME: &str = "Resolution Analyzer";

/// Applies the analyzer prompt template to a user resolution and delegates
/// to the gateway.
///
/// Adds no error handling of its own: a missing template and a failed
/// generation call both surface to the caller unchanged.
pub struct ResolutionAnalyzer<D: GenerationDriver> {
    gateway: Gateway<D>,
    templates: Arc<dyn TemplateStore>,
}

impl<D: GenerationDriver> ResolutionAnalyzer<D> {
    /// Creates an analyzer over the given gateway and template store.
    pub fn new(gateway: Gateway<D>, templates: Arc<dyn TemplateStore>) -> Self {
        Self { gateway, templates }
    }

    /// The underlying gateway.
    pub fn gateway(&self) -> &Gateway<D> {
        &self.gateway
    }

    /// Analyzes a free-form resolution statement.
    ///
    /// The user prompt is the raw text followed by a labeled context line,
    /// with the literal marker "None" when no context is supplied.
    ///
    /// # Errors
    ///
    /// Returns a template error when the analyzer template cannot be
    /// loaded, or the gateway's error when the generation call fails.
    #[instrument(skip_all, fields(raw_len = raw_text.len()))]
    pub async fn analyze(
        &self,
        raw_text: &str,
        context: Option<&str>,
    ) -> ResoluteResult<GenerationResult> {
        let template = self.templates.load(ANALYZER_TEMPLATE)?;
        let user_prompt = build_user_prompt(raw_text, context);

        debug!(template = ANALYZER_TEMPLATE, "Analyzing resolution");

        let req = GenerateRequest::builder()
            .system_prompt(template)
            .user_prompt(user_prompt)
            .trace_name(ANALYZER_TRACE_NAME)
            .build()
            .expect("Valid request");

        self.gateway.generate(&req).await
    }

    /// Analyzes a resolution and decodes the SMART-goal view.
    ///
    /// The decode is best-effort: a result that is raw text or lacks the
    /// expected shape yields `None` alongside the untouched result.
    pub async fn analyze_smart(
        &self,
        raw_text: &str,
        context: Option<&str>,
    ) -> ResoluteResult<(GenerationResult, Option<SmartGoalAnalysis>)> {
        let result = self.analyze(raw_text, context).await?;
        let smart = SmartGoalAnalysis::from_result(&result);
        Ok((result, smart))
    }
}

fn build_user_prompt(raw_text: &str, context: Option<&str>) -> String {
    format!("{raw_text}\nContext: {}", context.unwrap_or("None"))
}
