//! Command-line argument parsing.
//!
//! ```text
//! chanview                  interactive browser
//! chanview .                print boards
//! chanview <board>          print threads of a board
//! chanview <board> <thread> print posts of a thread
//! ```

use crate::error::InputParseError;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Run the TUI application (default)
    RunTui,
    ListBoards,
    ListThreads { board: String },
    ListPosts { board: String, thread: u64 },
    /// Show version information
    Version,
    /// Show usage
    Help,
}

impl CliCommand {
    /// Whether the command prints fetched data.
    pub fn is_query(&self) -> bool {
        matches!(
            self,
            CliCommand::ListBoards | CliCommand::ListThreads { .. } | CliCommand::ListPosts { .. }
        )
    }
}

/// Parse command-line arguments, program name first.
///
/// # Examples
///
/// ```
/// use chanview::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["chanview".to_string(), "b".to_string()];
/// assert_eq!(
///     parse_args(args.into_iter()),
///     Ok(CliCommand::ListThreads { board: "b".to_string() })
/// );
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, InputParseError>
where
    I: Iterator<Item = String>,
{
    let mut positional = Vec::new();
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    match (positional.next(), positional.next(), positional.len()) {
        (None, _, _) => Ok(CliCommand::RunTui),
        (Some(board), None, _) if board == "." => Ok(CliCommand::ListBoards),
        (Some(board), None, _) => Ok(CliCommand::ListThreads { board }),
        (Some(board), Some(thread), 0) => {
            let number = thread
                .trim()
                .parse::<u64>()
                .map_err(|_| InputParseError::InvalidThreadId(thread.clone()))?;
            Ok(CliCommand::ListPosts {
                board,
                thread: number,
            })
        }
        (Some(_), Some(_), rest) => Err(InputParseError::TooManyArguments(rest + 2)),
    }
}
