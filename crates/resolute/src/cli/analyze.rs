//! Analyze command handler.

use anyhow::Context;
use resolute_analysis::{FileTemplateStore, ResolutionAnalyzer};
use resolute_gateway::{Gateway, LogTraceSink};
use resolute_models::{GatewayConfig, GeminiClient};
use std::path::PathBuf;
use std::sync::Arc;

/// Handles the analyze command.
///
/// Builds the gateway from environment configuration, runs the analyzer,
/// and prints the result as pretty JSON.
#[tracing::instrument(skip_all)]
pub async fn handle_analyze_command(
    text: String,
    context: Option<String>,
    template_dir: PathBuf,
    model: Option<String>,
) -> anyhow::Result<()> {
    let mut config = GatewayConfig::from_env().context("Gateway configuration")?;
    if let Some(model) = model {
        config = GatewayConfig::builder()
            .api_key(config.api_key().clone())
            .model(model)
            .base_url(config.base_url().clone())
            .build()
            .context("Gateway configuration")?;
    }

    let client = GeminiClient::from_config(&config);
    let gateway = Gateway::with_tracer(client, Arc::new(LogTraceSink::new()));
    let templates = Arc::new(FileTemplateStore::new(template_dir));
    let analyzer = ResolutionAnalyzer::new(gateway, templates);

    let (result, smart) = analyzer.analyze_smart(&text, context.as_deref()).await?;

    println!("{}", serde_json::to_string_pretty(&result.to_value())?);

    if let Some(smart) = smart
        && !smart.is_complete()
    {
        tracing::warn!("Analysis is missing one or more SMART fields");
    }

    Ok(())
}
