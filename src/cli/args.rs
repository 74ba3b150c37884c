//! Command-line argument parsing.

use crate::models::Category;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Print the first batch of a category and exit
    Print { category: Option<Category> },
    /// Run the TUI application (default)
    RunTui { category: Option<Category> },
    /// Arguments could not be parsed
    Invalid(String),
}

pub const USAGE: &str = "\
Usage: hnr [OPTIONS]

Options:
  -c, --category <name>   Start on a category (top, new, best, ask, show, job)
      --print [<name>]    Print the first page of a category and exit
  -V, --version           Print version
  -h, --help              Print this help

Environment:
  HNR_API_URL, HNR_BATCH_SIZE, HNR_PACING_MS, HNR_LOG, HNR_HOME";

/// Parse command-line arguments and return the appropriate command.
///
/// `--version` and `--help` win over everything else. An unknown flag or
/// category yields [`CliCommand::Invalid`].
///
/// # Examples
///
/// ```
/// use hnr::cli::args::{parse_args, CliCommand};
/// use hnr::models::Category;
///
/// let args = vec!["hnr".to_string(), "-c".to_string(), "ask".to_string()];
/// assert_eq!(
///     parse_args(args.into_iter()),
///     CliCommand::RunTui { category: Some(Category::Ask) }
/// );
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut args = args.skip(1).peekable();
    let mut category = None;
    let mut print = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--category" | "-c" => {
                let Some(value) = args.next() else {
                    return CliCommand::Invalid(format!("{} needs a category name", arg));
                };
                match value.parse::<Category>() {
                    Ok(c) => category = Some(c),
                    Err(e) => return CliCommand::Invalid(e.to_string()),
                }
            }
            "--print" => {
                print = true;
                // Optional positional category
                if let Some(next) = args.peek() {
                    if !next.starts_with('-') {
                        match next.parse::<Category>() {
                            Ok(c) => category = Some(c),
                            Err(e) => return CliCommand::Invalid(e.to_string()),
                        }
                        args.next();
                    }
                }
            }
            other => return CliCommand::Invalid(format!("unexpected argument '{}'", other)),
        }
    }

    if print {
        CliCommand::Print { category }
    } else {
        CliCommand::RunTui { category }
    }
}
