//! Custom error types for ql
//!
//! Every failure the tool can hit ends up in [`QlError`]. Which variants are
//! retried and which terminate the run is decided where they are raised;
//! `main` only maps the terminal ones to messages and exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for ql operations
#[derive(Error, Debug)]
pub enum QlError {
    /// Settings file could not be located or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Neither the command line nor the settings file names a ledger file
    #[error("Error! No ledger file configured in {}", .0.display())]
    NoLedgerConfigured(PathBuf),

    /// The configured ledger file does not exist
    #[error("Error! Cannot find {}", .0.display())]
    LedgerNotFound(PathBuf),

    /// A path typed in during first-run setup does not exist
    #[error("File not found.")]
    ManualPathNotFound(PathBuf),

    /// The ledger file could not be opened for appending
    #[error("Cannot write to {}. Permission error!", .0.display())]
    PermissionDenied(PathBuf),

    /// The user pressed Ctrl-C or closed the input stream
    #[error("User exit.")]
    Cancelled,
}

impl QlError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Cancelled => 130,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for QlError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for ql operations
pub type QlResult<T> = Result<T, QlError>;
