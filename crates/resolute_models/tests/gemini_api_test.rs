use resolute_core::GenerationOptions;
use resolute_interface::GenerationDriver;
use resolute_models::GeminiClient;
use std::env;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_gemini_simple_generation() {
    dotenvy::dotenv().ok();
    let api_key = env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set for API tests");

    let client = GeminiClient::new(api_key, "gemini-2.5-flash-lite");

    let response = client
        .generate("Say 'test' and nothing else.", &GenerationOptions::default())
        .await
        .expect("API call succeeded");

    assert!(!response.is_empty());
    println!("Response: {:?}", response);
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_gemini_with_options() {
    dotenvy::dotenv().ok();
    let api_key = env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set for API tests");

    let client = GeminiClient::new(api_key, "gemini-2.5-flash-lite");

    let options = GenerationOptions::builder()
        .temperature(Some(0.5))
        .max_output_tokens(Some(64u32))
        .build()
        .expect("Valid options");

    let response = client
        .generate("Count to 3.", &options)
        .await
        .expect("API call succeeded");

    assert!(!response.is_empty());
    println!("Response with options: {:?}", response);
}
