//! Request types for prompted generation.

use serde::{Deserialize, Serialize};

/// Output format requested from the model.
///
/// Controls the formatting instruction appended to the combined prompt.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, no formatting instruction.
    Text,
    /// JSON-only output.
    Json,
    /// Markdown-formatted output.
    Markdown,
}

impl OutputFormat {
    /// The instruction appended to the combined prompt for this format.
    pub fn instruction(&self) -> &'static str {
        match self {
            OutputFormat::Json => {
                "\nOutput ONLY valid JSON, no markdown formatting or explanations."
            }
            OutputFormat::Markdown => "\nFormat your response with appropriate markdown.",
            OutputFormat::Text => "",
        }
    }
}

/// Caller-supplied generation options.
///
/// When present, these override the gateway's defaults for model selection,
/// sampling, and output formatting.
///
/// # Examples
///
/// ```
/// use resolute_core::{GenerationOptions, OutputFormat};
///
/// let options = GenerationOptions::builder()
///     .model(Some("gemini-2.5-flash-lite".to_string()))
///     .temperature(Some(0.2))
///     .format(Some(OutputFormat::Json))
///     .build()
///     .expect("Valid options");
///
/// assert_eq!(options.temperature(), &Some(0.2));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct GenerationOptions {
    /// Model identifier override.
    model: Option<String>,
    /// Sampling temperature.
    temperature: Option<f32>,
    /// Maximum tokens to generate.
    max_output_tokens: Option<u32>,
    /// Requested output format.
    format: Option<OutputFormat>,
}

impl GenerationOptions {
    /// Creates a builder for GenerationOptions.
    pub fn builder() -> GenerationOptionsBuilder {
        GenerationOptionsBuilder::default()
    }
}

/// A single prompted-generation request.
///
/// Each request is independent; nothing persists across calls.
///
/// # Examples
///
/// ```
/// use resolute_core::GenerateRequest;
///
/// let request = GenerateRequest::builder()
///     .system_prompt("Return JSON only.")
///     .user_prompt("2+2")
///     .trace_name("test")
///     .build()
///     .expect("Valid request");
///
/// assert_eq!(request.user_prompt(), "2+2");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// System prompt framing the task.
    system_prompt: String,
    /// Free-form user prompt.
    user_prompt: String,
    /// Trace name grouping telemetry for this call.
    trace_name: String,
    /// Optional generation overrides.
    #[builder(default)]
    options: Option<GenerationOptions>,
}

impl GenerateRequest {
    /// Creates a builder for GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}
