//! Test utilities for gateway tests.
//!
//! Provides a scriptable mock driver and a recording trace sink.
#![allow(dead_code)]

use async_trait::async_trait;
use resolute_core::GenerationOptions;
use resolute_error::{GeminiError, GeminiErrorKind, ResoluteResult};
use resolute_interface::{
    GenerationDriver, SpanRecord, TraceHandle, TraceOutcome, TraceSink,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One scripted reply from the mock driver.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this text.
    Text(String),
    /// Fail with an API-request error carrying this message.
    Error(String),
}

/// Mock generation driver with scripted replies.
///
/// Records every prompt it receives; replies are consumed in order, with
/// the fallback reply repeating once the script is exhausted.
pub struct MockDriver {
    replies: Mutex<VecDeque<MockReply>>,
    fallback: MockReply,
    prompts: Mutex<Vec<String>>,
}

impl MockDriver {
    /// Driver that always returns the given text.
    pub fn replying(text: &str) -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            fallback: MockReply::Text(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Driver that always fails with the given message.
    pub fn failing(message: &str) -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            fallback: MockReply::Error(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Driver that plays the given replies in order, then fails.
    pub fn with_replies(replies: Vec<MockReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            fallback: MockReply::Error("reply script exhausted".to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationDriver for MockDriver {
    async fn generate(&self, prompt: &str, _options: &GenerationOptions) -> ResoluteResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());

        match reply {
            MockReply::Text(text) => Ok(text),
            MockReply::Error(message) => {
                Err(GeminiError::new(GeminiErrorKind::ApiRequest(message)).into())
            }
        }
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Events observed by the recording trace sink.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    /// A trace opened with this name.
    Started(String),
    /// A span with this name was recorded.
    Span(String),
    /// The trace closed with this outcome.
    Ended(TraceOutcome),
}

/// Trace sink that records events for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingTraceSink {
    events: Arc<Mutex<Vec<TraceEvent>>>,
    spans: Arc<Mutex<Vec<SpanRecord>>>,
}

impl RecordingTraceSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events observed so far, in order.
    pub fn events(&self) -> Vec<TraceEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Full span records observed so far.
    pub fn spans(&self) -> Vec<SpanRecord> {
        self.spans.lock().unwrap().clone()
    }
}

impl TraceSink for RecordingTraceSink {
    fn start_trace(&self, name: &str) -> TraceHandle {
        self.events
            .lock()
            .unwrap()
            .push(TraceEvent::Started(name.to_string()));
        TraceHandle::new(name)
    }

    fn record_span(&self, _trace: &TraceHandle, span: SpanRecord) {
        self.events
            .lock()
            .unwrap()
            .push(TraceEvent::Span(span.name().clone()));
        self.spans.lock().unwrap().push(span);
    }

    fn end_trace(&self, _trace: &TraceHandle, outcome: TraceOutcome) {
        self.events.lock().unwrap().push(TraceEvent::Ended(outcome));
    }
}
