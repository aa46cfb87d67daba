//! Error types for the Resolute library.
//!
//! This crate provides the foundation error types used throughout the
//! Resolute ecosystem.

mod config;
mod gemini;
mod http;
mod template;
mod trace;

pub use config::ConfigError;
pub use gemini::{GeminiError, GeminiErrorKind};
pub use http::HttpError;
pub use template::{TemplateError, TemplateErrorKind};
pub use trace::TraceError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum ResoluteErrorKind {
    /// Gemini API error
    Gemini(GeminiError),
    /// HTTP error
    Http(HttpError),
    /// Configuration error
    Config(ConfigError),
    /// Prompt template error
    Template(TemplateError),
    /// Trace capability error
    Trace(TraceError),
}

impl std::fmt::Display for ResoluteErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResoluteErrorKind::Gemini(e) => write!(f, "{}", e),
            ResoluteErrorKind::Http(e) => write!(f, "{}", e),
            ResoluteErrorKind::Config(e) => write!(f, "{}", e),
            ResoluteErrorKind::Template(e) => write!(f, "{}", e),
            ResoluteErrorKind::Trace(e) => write!(f, "{}", e),
        }
    }
}

/// Resolute error with kind discrimination.
#[derive(Debug)]
pub struct ResoluteError(Box<ResoluteErrorKind>);

impl ResoluteError {
    /// Create a new error from a kind.
    pub fn new(kind: ResoluteErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ResoluteErrorKind {
        &self.0
    }
}

impl std::fmt::Display for ResoluteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Resolute Error: {}", self.0)
    }
}

impl std::error::Error for ResoluteError {}

// Generic From implementation for any type that converts to ResoluteErrorKind
impl<T> From<T> for ResoluteError
where
    T: Into<ResoluteErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Resolute operations.
pub type ResoluteResult<T> = std::result::Result<T, ResoluteError>;
