//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! resolute binary.

mod analyze;
mod commands;
mod generate;

pub use analyze::handle_analyze_command;
pub use commands::{Cli, Commands};
pub use generate::handle_generate_command;
