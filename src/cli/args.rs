//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Print the course catalog as JSON
    Catalog,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui,
}

pub const USAGE: &str = "\
Usage: luxxor [OPTIONS]

Options:
  -V, --version   Print version and exit
      --catalog   Print the course catalog as JSON and exit
  -h, --help      Print this help and exit

Environment:
  LUXXOR_LOG              tracing filter (default: info)
  LUXXOR_FORM_ENDPOINT    contact form relay URL
  LUXXOR_FORM_ACCESS_KEY  contact form access key
  LUXXOR_NO_MOUSE         set to 1 to leave mouse selection to the terminal";

/// Parse command-line arguments. The first flag that names a command wins;
/// unknown arguments are ignored.
///
/// # Examples
///
/// ```
/// use luxxor::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["luxxor".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--catalog" => return CliCommand::Catalog,
            "--help" | "-h" => return CliCommand::Help,
            _ => {}
        }
    }
    CliCommand::RunTui
}
