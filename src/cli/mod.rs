//! CLI module for Luxxor.
//!
//! Flags are handled before the TUI starts:
//!
//! ```ignore
//! use luxxor::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command) {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod catalog;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use catalog::{catalog_json, handle_catalog_command};
pub use version::{handle_version_command, VERSION};

use color_eyre::Result;

/// Run a CLI command if applicable.
///
/// Returns `None` for [`CliCommand::RunTui`], otherwise the command's result.
pub fn run_cli_command(command: CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => Some(handle_version_command(&mut std::io::stdout())),
        CliCommand::Catalog => Some(handle_catalog_command(&mut std::io::stdout())),
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::RunTui => None,
    }
}
