//! CLI argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// LLM-backed resolution analysis and prompted generation.
#[derive(Debug, Parser)]
#[command(name = "resolute", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze a resolution into SMART-goal components
    Analyze {
        /// The resolution statement to analyze
        text: String,
        /// Optional context for the analysis
        #[arg(long)]
        context: Option<String>,
        /// Directory holding prompt template assets
        #[arg(long, default_value = "prompts")]
        template_dir: PathBuf,
        /// Model override
        #[arg(long)]
        model: Option<String>,
    },
    /// Send a raw prompt pair through the gateway
    Generate {
        /// System prompt framing the task
        #[arg(long)]
        system: String,
        /// User prompt
        #[arg(long)]
        user: String,
        /// Output format: text, json, or markdown
        #[arg(long)]
        format: Option<String>,
        /// Sampling temperature
        #[arg(long)]
        temperature: Option<f32>,
        /// Maximum output tokens
        #[arg(long)]
        max_output_tokens: Option<u32>,
        /// Swallow failures into a fixed error message instead of exiting
        #[arg(long)]
        lenient: bool,
    },
}
