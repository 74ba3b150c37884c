//! CLI module.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version and help display
//! - The non-interactive `--print` mode
//!
//! # Usage
//!
//! The CLI dispatcher is called early in main() to handle command-line
//! flags before initializing the TUI:
//!
//! ```ignore
//! use hnr::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command.clone(), &config, &settings).await {
//!     // CLI command was executed, exit with result
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod print;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use print::{handle_print_command, print_category};
pub use version::{handle_version_command, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::settings::Settings;
use crate::startup::AppConfig;

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - If a CLI command executed successfully
/// * `Some(Err(e))` - If a CLI command failed
///
/// # Note
///
/// The `Version` command never returns as it calls `std::process::exit(0)`.
pub async fn run_cli_command(
    command: CliCommand,
    config: &AppConfig,
    settings: &Settings,
) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            handle_version_command();
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Print { category } => {
            let category = category.unwrap_or(settings.category);
            Some(handle_print_command(config, category).await)
        }
        CliCommand::Invalid(message) => Some(Err(eyre!("{}\n\n{}", message, USAGE))),
        CliCommand::RunTui { .. } => None,
    }
}
