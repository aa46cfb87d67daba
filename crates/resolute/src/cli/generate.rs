//! Generate command handler.

use anyhow::Context;
use resolute_core::{GenerateRequest, GenerationOptions, OutputFormat};
use resolute_gateway::{Gateway, LogTraceSink, SimpleGateway};
use resolute_models::{GatewayConfig, GeminiClient};
use std::str::FromStr;
use std::sync::Arc;

/// Handles the generate command.
///
/// Strict mode prints the structured-or-raw result as JSON and exits
/// nonzero on transport failure; lenient mode prints whatever text the
/// simple gateway resolves to, including its fixed error sentinel.
#[tracing::instrument(skip_all)]
pub async fn handle_generate_command(
    system: String,
    user: String,
    format: Option<String>,
    temperature: Option<f32>,
    max_output_tokens: Option<u32>,
    lenient: bool,
) -> anyhow::Result<()> {
    let format = format
        .map(|f| OutputFormat::from_str(&f))
        .transpose()
        .context("Unknown output format")?;

    let options = GenerationOptions::builder()
        .format(format)
        .temperature(temperature)
        .max_output_tokens(max_output_tokens)
        .build()
        .context("Generation options")?;

    let config = GatewayConfig::from_env().context("Gateway configuration")?;
    let client = GeminiClient::from_config(&config);

    if lenient {
        let gateway = SimpleGateway::new(client);
        let output = gateway.generate(&system, &user, &options).await;
        println!("{output}");
        return Ok(());
    }

    let gateway = Gateway::with_tracer(client, Arc::new(LogTraceSink::new()));
    let req = GenerateRequest::builder()
        .system_prompt(system)
        .user_prompt(user)
        .trace_name("llm_content_generation")
        .options(options)
        .build()
        .context("Generation request")?;

    let result = gateway.generate(&req).await?;
    println!("{}", serde_json::to_string_pretty(&result.to_value())?);

    Ok(())
}
