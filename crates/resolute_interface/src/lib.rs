//! Trait definitions for the Resolute LLM gateway library.
//!
//! The gateway is programmed against these seams: a [`GenerationDriver`]
//! that talks to the external generation API, a [`TraceSink`] capability
//! for per-call telemetry, and a [`TemplateStore`] for read-only prompt
//! assets.

mod driver;
mod template;
mod trace;

pub use driver::GenerationDriver;
pub use template::TemplateStore;
pub use trace::{NoopTraceSink, SpanRecord, TraceHandle, TraceOutcome, TraceSink};
