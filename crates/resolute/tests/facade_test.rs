//! End-to-end tests through the facade crate's re-exported surface.

use async_trait::async_trait;
use resolute::{
    ANALYZER_TEMPLATE, FileTemplateStore, GatewayConfig, Gateway, GeminiClient, GenerationDriver,
    GenerationOptions, GenerationResult, InMemoryTemplateStore, ResolutionAnalyzer, ResoluteResult,
};
use serde_json::json;
use std::sync::Arc;

struct CannedDriver(String);

#[async_trait]
impl GenerationDriver for CannedDriver {
    async fn generate(&self, _prompt: &str, _options: &GenerationOptions) -> ResoluteResult<String> {
        Ok(self.0.clone())
    }

    fn model_name(&self) -> &str {
        "canned-model"
    }
}

#[tokio::test]
async fn facade_wires_the_full_stack() {
    let templates = InMemoryTemplateStore::new();
    templates.insert(ANALYZER_TEMPLATE, "Decompose into SMART fields.");

    let driver = CannedDriver(r#"{"specific": "Run the city marathon"}"#.to_string());
    let analyzer = ResolutionAnalyzer::new(Gateway::new(driver), Arc::new(templates));

    let result = analyzer
        .analyze("Run a marathon", None)
        .await
        .expect("Analysis succeeded");

    assert_eq!(
        result,
        GenerationResult::Structured(json!({"specific": "Run the city marathon"}))
    );
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_live_resolution_analysis() {
    dotenvy::dotenv().ok();
    let config = GatewayConfig::from_env().expect("GEMINI_API_KEY must be set for API tests");

    let client = GeminiClient::from_config(&config);
    let templates = Arc::new(FileTemplateStore::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../prompts"
    )));
    let analyzer = ResolutionAnalyzer::new(Gateway::new(client), templates);

    let (result, smart) = analyzer
        .analyze_smart("Run a marathon", Some("first race, 6 months out"))
        .await
        .expect("API call succeeded");

    println!("Result: {:?}", result.to_value());
    println!("SMART: {:?}", smart);
}
