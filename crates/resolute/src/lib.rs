//! Unified interface for the Resolute LLM gateway and resolution analysis.
//!
//! Re-exports the public surface of the workspace crates:
//!
//! - request/result types from [`resolute_core`]
//! - trait seams from [`resolute_interface`]
//! - the Gemini driver from [`resolute_models`]
//! - the strict and lenient gateways from [`resolute_gateway`]
//! - the resolution analyzer from [`resolute_analysis`]

pub mod cli;

pub use resolute_analysis::{
    ANALYZER_TEMPLATE, ANALYZER_TRACE_NAME, FileTemplateStore, InMemoryTemplateStore,
    ResolutionAnalyzer, SmartGoalAnalysis,
};
pub use resolute_core::{
    GenerateRequest, GenerationOptions, GenerationResult, ModelInfo, OutputFormat,
    estimate_tokens, init_metrics, shutdown_metrics,
};
pub use resolute_error::{
    ConfigError, GeminiError, GeminiErrorKind, HttpError, ResoluteError, ResoluteErrorKind,
    ResoluteResult, TemplateError, TemplateErrorKind, TraceError,
};
pub use resolute_gateway::{
    BatchPrompt, BatchResult, GENERATION_ERROR_MESSAGE, Gateway, LogTraceSink, SimpleGateway,
};
pub use resolute_interface::{
    GenerationDriver, NoopTraceSink, SpanRecord, TemplateStore, TraceHandle, TraceOutcome,
    TraceSink,
};
pub use resolute_models::{GatewayConfig, GeminiClient};
