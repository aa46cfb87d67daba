//! Prompt template error types.

/// Kinds of template errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TemplateErrorKind {
    /// Template not found in the asset store
    #[display("Template not found: {}", _0)]
    NotFound(String),
    /// I/O error reading the template
    #[display("I/O error: {}", _0)]
    Io(String),
    /// Template is not valid UTF-8 text
    #[display("Template is not valid UTF-8: {}", _0)]
    InvalidUtf8(String),
}

/// Template error with location tracking.
///
/// Surfaced when the read-only prompt asset store cannot produce a
/// requested template. The analysis façade does not catch this.
///
/// # Examples
///
/// ```
/// use resolute_error::{TemplateError, TemplateErrorKind};
///
/// let err = TemplateError::new(TemplateErrorKind::NotFound(
///     "resolution_analyzer_v1_2026-01-22".to_string(),
/// ));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Template Error: {} at line {} in {}", kind, line, file)]
pub struct TemplateError {
    /// The kind of error that occurred
    pub kind: TemplateErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TemplateError {
    /// Create a new template error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TemplateErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
