//! Trace sink backed by the `tracing` stack.

use resolute_interface::{SpanRecord, TraceHandle, TraceOutcome, TraceSink};
use tracing::{debug, warn};

/// Trace sink emitting structured `tracing` events.
///
/// Stands in for an external tracing backend: traces and spans become
/// field-structured log events that subscribers can export. Construction
/// is infallible; when telemetry setup fails upstream, callers fall back
/// to [`resolute_interface::NoopTraceSink`] and generation proceeds
/// unaffected.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTraceSink;

impl LogTraceSink {
    /// Creates a new log-backed trace sink.
    pub fn new() -> Self {
        Self
    }
}

impl TraceSink for LogTraceSink {
    fn start_trace(&self, name: &str) -> TraceHandle {
        let trace = TraceHandle::new(name);
        debug!(trace_id = %trace.id(), trace = name, "Trace started");
        trace
    }

    fn record_span(&self, trace: &TraceHandle, span: SpanRecord) {
        debug!(
            trace_id = %trace.id(),
            span = %span.name(),
            payload = %span.input(),
            "Span recorded"
        );
    }

    fn end_trace(&self, trace: &TraceHandle, outcome: TraceOutcome) {
        match outcome {
            TraceOutcome::Success => {
                debug!(trace_id = %trace.id(), trace = %trace.name(), "Trace completed");
            }
            TraceOutcome::Error(message) => {
                warn!(trace_id = %trace.id(), trace = %trace.name(), error = %message, "Trace failed");
            }
        }
    }
}
