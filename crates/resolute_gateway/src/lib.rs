//! Prompted-generation gateway for the Resolute library.
//!
//! Two policy modes front the same driver seam and are deliberately kept
//! distinct:
//!
//! - [`Gateway`] is strict: transport failures propagate to the caller
//!   unchanged, and every call is wrapped in trace telemetry.
//! - [`SimpleGateway`] is lenient: any failure collapses to a fixed,
//!   human-readable sentinel string, with no tracing.
//!
//! Malformed model output is never an error in either mode; it is carried
//! as a raw-text fallback value.

mod batch;
mod gateway;
mod log_sink;
mod prompt;
mod simple;

pub use batch::{BatchPrompt, BatchPromptBuilder, BatchResult};
pub use gateway::Gateway;
pub use log_sink::LogTraceSink;
pub use simple::{GENERATION_ERROR_MESSAGE, SimpleGateway};
