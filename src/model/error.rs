//! Error types for the postwall shell.
//!
//! The layout engine itself has no failure modes: a recompute either
//! runs to completion or is skipped, and the worst observable outcome is
//! a stale layout. Errors exist only at the shell boundary — reading the
//! posts payload, parsing it, and writing rendered output — and are
//! modeled as a small `thiserror` hierarchy composing via `?` and
//! `From` conversions.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error for the CLI shell.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the posts payload from file or stdin.
    #[error("Failed to read posts: {0}")]
    Input(#[from] InputError),

    /// Payload was readable but not a valid posts document.
    #[error("Failed to parse posts payload: {0}")]
    Parse(#[from] ParseError),

    /// Failed to write rendered output.
    #[error("Output error: {0}")]
    Render(#[from] std::io::Error),
}

/// Errors encountered when reading the posts payload.
#[derive(Debug, Error)]
pub enum InputError {
    /// The payload file does not exist at the given path.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No payload source: no file argument and stdin is a terminal.
    #[error("No input source: provide a posts file or pipe JSON to stdin")]
    NoInput,

    /// Generic I/O error reading from the payload source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when parsing the posts payload.
///
/// The payload is a single JSON array of post objects, so unlike a
/// line-oriented format there is no partial recovery: a malformed
/// document is rejected whole.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The payload is not a valid JSON array of posts.
    #[error("Invalid posts payload: {message}")]
    InvalidPayload {
        /// The JSON parser's description of what went wrong.
        message: String,
    },
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::InvalidPayload {
            message: err.to_string(),
        }
    }
}
