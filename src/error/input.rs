//! Command-line input errors.

use thiserror::Error;

/// Arguments that cannot be turned into a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputParseError {
    #[error("cannot parse thread id {0:?}: expected a non-negative integer")]
    InvalidThreadId(String),

    #[error("expected at most 2 arguments, got {0}")]
    TooManyArguments(usize),
}

impl InputParseError {
    pub fn user_message(&self) -> String {
        match self {
            InputParseError::InvalidThreadId(raw) => format!("Cannot parse thread {raw:?}."),
            InputParseError::TooManyArguments(_) => {
                "Too many arguments. Run with --help for usage.".to_string()
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            InputParseError::InvalidThreadId(_) => "E_INPUT_THREAD",
            InputParseError::TooManyArguments(_) => "E_INPUT_ARGS",
        }
    }
}
