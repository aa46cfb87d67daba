//! Resolute binary entry point.

use clap::Parser;
use resolute::cli::{Cli, Commands, handle_analyze_command, handle_generate_command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            text,
            context,
            template_dir,
            model,
        } => handle_analyze_command(text, context, template_dir, model).await,
        Commands::Generate {
            system,
            user,
            format,
            temperature,
            max_output_tokens,
            lenient,
        } => {
            handle_generate_command(system, user, format, temperature, max_output_tokens, lenient)
                .await
        }
    }
}
