//! Tests for the lenient gateway.

mod test_utils;

use resolute_core::{GenerationOptions, OutputFormat};
use resolute_gateway::{GENERATION_ERROR_MESSAGE, SimpleGateway};
use test_utils::MockDriver;

#[tokio::test]
async fn returns_raw_text_on_success() {
    let gateway = SimpleGateway::new(MockDriver::replying("Sure, here is a plan."));

    let output = gateway
        .generate("Be helpful.", "Plan my week", &GenerationOptions::default())
        .await;

    assert_eq!(output, "Sure, here is a plan.");
}

#[tokio::test]
async fn any_failure_resolves_to_the_sentinel() {
    let gateway = SimpleGateway::new(MockDriver::failing("rate limited"));

    let output = gateway
        .generate("Be helpful.", "Plan my week", &GenerationOptions::default())
        .await;

    assert_eq!(output, GENERATION_ERROR_MESSAGE);
    assert_eq!(output, "Error generating content. Please try again.");
}

#[tokio::test]
async fn prompt_labels_the_user_turn() {
    let driver = MockDriver::replying("ok");
    let gateway = SimpleGateway::new(driver);

    gateway
        .generate("system", "hello", &GenerationOptions::default())
        .await;

    assert_eq!(gateway.driver().prompts()[0], "system\n\nUser: hello");
}

#[tokio::test]
async fn format_option_appends_instruction() {
    let driver = MockDriver::replying("{}");
    let gateway = SimpleGateway::new(driver);

    let options = GenerationOptions::builder()
        .format(Some(OutputFormat::Json))
        .build()
        .expect("Valid options");

    gateway.generate("system", "hello", &options).await;

    assert!(
        gateway.driver().prompts()[0].contains("Output ONLY valid JSON")
    );
}
