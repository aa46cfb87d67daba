//! The tagged result of a prompted-generation call.

use regex::Regex;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::sync::LazyLock;

// First balanced-looking brace block in the response text.
static JSON_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"));

/// Best-effort structured result from a generation call.
///
/// Model output is parsed as JSON when possible and carried raw otherwise.
/// Malformed output is the dominant expected failure mode of calling a
/// generative model and is never an error.
///
/// # Examples
///
/// ```
/// use resolute_core::GenerationResult;
/// use serde_json::json;
///
/// let structured = GenerationResult::from_text(r#"{"answer": 4}"#);
/// assert_eq!(structured, GenerationResult::Structured(json!({"answer": 4})));
///
/// let raw = GenerationResult::from_text("hello world");
/// assert_eq!(raw, GenerationResult::Raw("hello world".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, derive_more::From)]
pub enum GenerationResult {
    /// The output text parsed as JSON.
    Structured(serde_json::Value),
    /// The output text did not parse; carried verbatim.
    Raw(String),
}

impl GenerationResult {
    /// Parse model output text into a result.
    ///
    /// Attempts a direct JSON parse, then extraction of the first `{...}`
    /// block (models often wrap JSON in prose or code fences), and finally
    /// falls back to the raw text.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();

        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) {
            return GenerationResult::Structured(value);
        }

        if let Some(block) = JSON_BLOCK.find(&text)
            && let Ok(value) = serde_json::from_str::<serde_json::Value>(block.as_str())
        {
            return GenerationResult::Structured(value);
        }

        GenerationResult::Raw(text)
    }

    /// Whether the output parsed as JSON.
    pub fn is_structured(&self) -> bool {
        matches!(self, GenerationResult::Structured(_))
    }

    /// The parsed JSON value, if structured.
    pub fn as_structured(&self) -> Option<&serde_json::Value> {
        match self {
            GenerationResult::Structured(value) => Some(value),
            GenerationResult::Raw(_) => None,
        }
    }

    /// The raw output text, if unparsed.
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            GenerationResult::Structured(_) => None,
            GenerationResult::Raw(text) => Some(text),
        }
    }

    /// The result as a JSON value: the parsed payload, or `{"raw": <text>}`.
    pub fn to_value(&self) -> serde_json::Value {
        match self {
            GenerationResult::Structured(value) => value.clone(),
            GenerationResult::Raw(text) => serde_json::json!({ "raw": text }),
        }
    }
}

// Structured results serialize as the payload itself so that callers see
// exactly what the model produced; raw results wrap under a known field.
impl Serialize for GenerationResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            GenerationResult::Structured(value) => value.serialize(serializer),
            GenerationResult::Raw(text) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("raw", text)?;
                map.end()
            }
        }
    }
}
