//! Error types and handling for dotclaude
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for dotclaude operations
#[derive(Error, Diagnostic, Debug)]
pub enum DotclaudeError {
    // Registry errors
    #[error("Unknown item: {name}")]
    #[diagnostic(
        code(dotclaude::registry::item_not_found),
        help("Run 'dotclaude list' to see available items")
    )]
    ItemNotFound { name: String },

    // Remote content errors
    #[error("Failed to fetch {path}: {status}")]
    #[diagnostic(
        code(dotclaude::remote::fetch_failed),
        help("Check that the remote path exists and is accessible")
    )]
    FetchFailed { path: String, status: String },

    #[error("Failed to list {path}: {status}")]
    #[diagnostic(
        code(dotclaude::remote::list_failed),
        help("Check that the remote directory exists and is accessible")
    )]
    ListFailed { path: String, status: String },

    #[error("Request failed: {message}")]
    #[diagnostic(code(dotclaude::remote::transport))]
    HttpTransport { message: String },

    #[error("Failed to parse directory listing for {path}")]
    #[diagnostic(code(dotclaude::remote::parse_failed))]
    ListingParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(dotclaude::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(dotclaude::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(dotclaude::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for DotclaudeError {
    fn from(err: std::io::Error) -> Self {
        DotclaudeError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for DotclaudeError {
    fn from(err: reqwest::Error) -> Self {
        DotclaudeError::HttpTransport {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for DotclaudeError {
    fn from(err: inquire::InquireError) -> Self {
        DotclaudeError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DotclaudeError>;
