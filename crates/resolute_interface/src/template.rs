//! Prompt template store trait definition.

use resolute_error::ResoluteResult;

/// Read-only lookup of prompt templates by versioned name.
///
/// Templates are opaque external assets keyed by a version-stamped name
/// (e.g. `resolution_analyzer_v1_2026-01-22`). A missing or unreadable
/// template is a hard failure; there is no fallback template.
pub trait TemplateStore: Send + Sync {
    /// Load the template with the given name as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns a template error when the name is unknown or the asset
    /// cannot be read.
    fn load(&self, name: &str) -> ResoluteResult<String>;
}
