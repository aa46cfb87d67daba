//! Resolution analysis façade for the Resolute library.
//!
//! Applies a version-stamped prompt template to a free-form resolution
//! statement and delegates to the gateway; the gateway's result and
//! failures pass through unchanged.

mod analyzer;
mod smart_goal;
mod store;

pub use analyzer::{ANALYZER_TEMPLATE, ANALYZER_TRACE_NAME, ResolutionAnalyzer};
pub use smart_goal::SmartGoalAnalysis;
pub use store::{FileTemplateStore, InMemoryTemplateStore};
