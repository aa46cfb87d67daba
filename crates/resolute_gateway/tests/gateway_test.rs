//! Tests for the strict gateway.

mod test_utils;

use resolute_core::{GenerateRequest, GenerationOptions, GenerationResult, OutputFormat};
use resolute_error::ResoluteErrorKind;
use resolute_gateway::Gateway;
use serde_json::json;
use std::sync::Arc;
use test_utils::{MockDriver, RecordingTraceSink, TraceEvent};

fn request(system: &str, user: &str, trace: &str) -> GenerateRequest {
    GenerateRequest::builder()
        .system_prompt(system)
        .user_prompt(user)
        .trace_name(trace)
        .build()
        .expect("Valid request")
}

#[tokio::test]
async fn valid_json_parses_to_structured() {
    let gateway = Gateway::new(MockDriver::replying(r#"{"answer": 4}"#));

    let result = gateway
        .generate(&request("Return JSON only.", "2+2", "test"))
        .await
        .expect("Generation succeeded");

    assert_eq!(result, GenerationResult::Structured(json!({"answer": 4})));
}

#[tokio::test]
async fn round_trips_mock_api_text() {
    let text = r#"{"specific": "Run a marathon", "time_bound": "by October"}"#;
    let gateway = Gateway::new(MockDriver::replying(text));

    let result = gateway
        .generate(&request("Analyze.", "Run a marathon", "test"))
        .await
        .expect("Generation succeeded");

    let expected: serde_json::Value = serde_json::from_str(text).unwrap();
    assert_eq!(result.as_structured(), Some(&expected));
}

#[tokio::test]
async fn non_json_falls_back_to_raw() {
    let gateway = Gateway::new(MockDriver::replying("hello world"));

    let result = gateway
        .generate(&request("Return JSON only.", "greet me", "test"))
        .await
        .expect("Generation succeeded");

    assert_eq!(result, GenerationResult::Raw("hello world".to_string()));
    assert_eq!(result.to_value(), json!({"raw": "hello world"}));
}

#[tokio::test]
async fn transport_failure_propagates() {
    let gateway = Gateway::new(MockDriver::failing("connection refused"));

    let err = gateway
        .generate(&request("system", "user", "test"))
        .await
        .expect_err("Generation failed");

    match err.kind() {
        ResoluteErrorKind::Gemini(e) => {
            assert!(e.to_string().contains("connection refused"));
        }
        other => panic!("Unexpected error kind: {:?}", other),
    }
}

#[tokio::test]
async fn default_prompt_carries_json_instruction() {
    let driver = MockDriver::replying("{}");
    let gateway = Gateway::new(driver);

    gateway
        .generate(&request("Return JSON only.", "2+2", "test"))
        .await
        .expect("Generation succeeded");

    let prompts = gateway.driver().prompts();
    assert_eq!(
        prompts[0],
        "Return JSON only.\n\nUser input: 2+2\nOutput as JSON only."
    );
}

#[tokio::test]
async fn options_override_prompt_and_model() {
    let driver = MockDriver::replying("plain text");
    let gateway = Gateway::new(driver);

    let options = GenerationOptions::builder()
        .model(Some("gemini-2.0-flash".to_string()))
        .format(Some(OutputFormat::Markdown))
        .build()
        .expect("Valid options");
    let req = GenerateRequest::builder()
        .system_prompt("system")
        .user_prompt("user")
        .trace_name("test")
        .options(options)
        .build()
        .expect("Valid request");

    gateway.generate(&req).await.expect("Generation succeeded");

    let prompts = gateway.driver().prompts();
    assert!(prompts[0].contains("appropriate markdown"));
    assert!(!prompts[0].contains("Output as JSON only."));
}

#[tokio::test]
async fn spans_record_in_fixed_order() {
    let tracer = RecordingTraceSink::new();
    let gateway = Gateway::with_tracer(
        MockDriver::replying(r#"{"ok": true}"#),
        Arc::new(tracer.clone()),
    );

    gateway
        .generate(&request("system", "user", "Resolution Analyzer"))
        .await
        .expect("Generation succeeded");

    assert_eq!(
        tracer.events(),
        vec![
            TraceEvent::Started("Resolution Analyzer".to_string()),
            TraceEvent::Span("llm_input".to_string()),
            TraceEvent::Span("llm_output".to_string()),
            TraceEvent::Ended(resolute_interface::TraceOutcome::Success),
        ]
    );

    let spans = tracer.spans();
    assert_eq!(spans[0].input()["system"], "system");
    assert_eq!(spans[0].input()["user"], "user");
    assert_eq!(spans[1].input()["output"], json!({"ok": true}));
}

#[tokio::test]
async fn failed_call_closes_trace_with_error() {
    let tracer = RecordingTraceSink::new();
    let gateway = Gateway::with_tracer(MockDriver::failing("boom"), Arc::new(tracer.clone()));

    gateway
        .generate(&request("system", "user", "test"))
        .await
        .expect_err("Generation failed");

    let events = tracer.events();
    assert_eq!(events[0], TraceEvent::Started("test".to_string()));
    assert_eq!(events[1], TraceEvent::Span("llm_input".to_string()));
    match events.last().expect("trace closed") {
        TraceEvent::Ended(resolute_interface::TraceOutcome::Error(message)) => {
            assert!(message.contains("boom"));
        }
        other => panic!("Unexpected terminal event: {:?}", other),
    }
}

#[tokio::test]
async fn tracing_failure_never_changes_the_outcome() {
    // A failed telemetry setup degrades to the no-op sink; results must
    // match a traced gateway exactly.
    let traced = Gateway::with_tracer(
        MockDriver::replying(r#"{"answer": 4}"#),
        Arc::new(RecordingTraceSink::new()),
    );
    let untraced = Gateway::new(MockDriver::replying(r#"{"answer": 4}"#));

    let req = request("Return JSON only.", "2+2", "test");
    let with_tracing = traced.generate(&req).await.expect("Generation succeeded");
    let without_tracing = untraced.generate(&req).await.expect("Generation succeeded");

    assert_eq!(with_tracing, without_tracing);
}
