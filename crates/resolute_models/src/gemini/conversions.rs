//! Conversions between Resolute requests and the Gemini wire format.

use crate::gemini::{GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiRequest};
use resolute_core::GenerationOptions;
use resolute_error::{GeminiError, GeminiErrorKind};

/// Builds a Gemini request for a single combined prompt.
pub fn to_gemini_request(
    prompt: &str,
    options: &GenerationOptions,
) -> Result<GeminiRequest, GeminiError> {
    let contents = vec![GeminiContent {
        role: "user".to_string(),
        parts: vec![GeminiPart {
            text: prompt.to_string(),
        }],
    }];

    let mut builder = GeminiRequest::builder();
    builder.contents(contents);

    if options.temperature().is_some() || options.max_output_tokens().is_some() {
        let config = GeminiGenerationConfig::builder()
            .temperature(*options.temperature())
            .max_output_tokens(*options.max_output_tokens())
            .build()
            .map_err(|e| {
                GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                    "Failed to build generation config: {}",
                    e
                )))
            })?;
        builder.generation_config(Some(config));
    }

    builder.build().map_err(|e| {
        GeminiError::new(GeminiErrorKind::ApiRequest(format!(
            "Failed to build request: {}",
            e
        )))
    })
}

/// Extracts the generated text from a Gemini response.
///
/// Concatenates the text parts of the first candidate.
pub fn from_gemini_response(
    response: &crate::gemini::GeminiResponse,
) -> Result<String, GeminiError> {
    let text = response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(GeminiError::new(GeminiErrorKind::EmptyResponse));
    }

    Ok(text)
}
