//! CLI-specific error types with exit codes.
//!
//! Usage errors (a missing or invalid `--shell` value, unknown flags) are
//! reported by clap before the pipeline runs and exit with clap's own code.
//! The errors here cover what can go wrong after argument parsing.

use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// The environment provided an unusable value.
    InvalidEnvironment(String),

    /// I/O error while writing the result.
    Io(std::io::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 2: Usage error (reported by clap, not through this type)
    /// - 3: Unusable environment value
    /// - 4: I/O error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidEnvironment(_) => 3,
            CliError::Io(_) => 4,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidEnvironment(msg) => write!(f, "Invalid environment: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::InvalidEnvironment(_) => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
