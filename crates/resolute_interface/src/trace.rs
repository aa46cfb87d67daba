//! Trace capability for observing gateway calls.
//!
//! Tracing is an optional cross-cutting capability, modeled as an
//! injectable trait with a no-op default so that a failed telemetry setup
//! cannot affect generation at call time.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Handle for one logical trace, scoped to a single gateway invocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct TraceHandle {
    /// Unique trace identifier.
    id: Uuid,
    /// Trace name used for observability grouping.
    name: String,
}

impl TraceHandle {
    /// Creates a new handle with a fresh identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// A recorded sub-step within a trace.
///
/// Spans record their payload at creation and close immediately; both
/// timestamps are stamped up front.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct SpanRecord {
    /// Span name.
    name: String,
    /// Arbitrary key/value payload.
    input: serde_json::Value,
    /// When the span opened.
    started_at: DateTime<Utc>,
    /// When the span closed.
    ended_at: DateTime<Utc>,
}

impl SpanRecord {
    /// Record a span carrying the given payload, closed immediately.
    pub fn record(name: impl Into<String>, input: serde_json::Value) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            input,
            started_at: now,
            ended_at: now,
        }
    }
}

/// Terminal status of a trace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TraceOutcome {
    /// The generation call completed.
    Success,
    /// The generation call failed with the given message.
    Error(String),
}

/// Sink for trace telemetry emitted around gateway calls.
///
/// Implementations must tolerate concurrent calls; each trace lives within
/// a single invocation and is never shared across calls.
pub trait TraceSink: Send + Sync {
    /// Open a trace with the given name.
    fn start_trace(&self, name: &str) -> TraceHandle;

    /// Record a span within an open trace.
    fn record_span(&self, trace: &TraceHandle, span: SpanRecord);

    /// Close a trace with its terminal outcome.
    fn end_trace(&self, trace: &TraceHandle, outcome: TraceOutcome);
}

/// Default trace sink that records nothing.
///
/// Used when tracing is not configured or its backend failed to
/// initialize; generation outcomes are identical either way.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTraceSink;

impl TraceSink for NoopTraceSink {
    fn start_trace(&self, name: &str) -> TraceHandle {
        TraceHandle::new(name)
    }

    fn record_span(&self, _trace: &TraceHandle, _span: SpanRecord) {}

    fn end_trace(&self, _trace: &TraceHandle, _outcome: TraceOutcome) {}
}
