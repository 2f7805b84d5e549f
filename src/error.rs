//! Error types and handling infrastructure for matcher.
//!
//! A single `thiserror` enum covers every failure the client can hit. In practice
//! only terminal I/O and configuration loading can fail; unrecognized menu input
//! is never an error.

use thiserror::Error;

/// The main error type for matcher operations.
#[derive(Error, Debug)]
pub enum MatcherError {
    /// Reading from or writing to the console failed
    #[error("Terminal I/O failed: {message}")]
    TerminalError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be read, parsed, or validated
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Invalid command line arguments or bootstrap values
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The interactive worker could not be started or vanished without a result
    #[error("Session worker failed: {message}")]
    SessionError { message: String },
}

/// Standard Result type for matcher operations.
pub type Result<T> = std::result::Result<T, MatcherError>;

impl MatcherError {
    /// Create a TerminalError from an io::Error with additional context
    pub fn terminal(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::TerminalError {
            message: message.into(),
            source,
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a SessionError with a descriptive message
    pub fn session(message: impl Into<String>) -> Self {
        Self::SessionError {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for MatcherError {
    fn from(err: std::io::Error) -> Self {
        let message = match err.kind() {
            std::io::ErrorKind::UnexpectedEof => "Console input closed unexpectedly",
            std::io::ErrorKind::BrokenPipe => "Console output closed",
            _ => "Console operation failed",
        };
        Self::TerminalError {
            message: message.to_string(),
            source: err,
        }
    }
}
