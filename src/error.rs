//! Error types for the synparse library.
//!
//! All errors are represented by the [`SynparseError`] enum. A query either
//! compiles completely or fails with one of these errors; there is no partial
//! result.
//!
//! # Examples
//!
//! ```
//! use synparse::error::{Result, SynparseError};
//!
//! fn reject() -> Result<()> {
//!     Err(SynparseError::unsupported("Wildcard queries not allowed"))
//! }
//!
//! match reject() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for synparse operations.
#[derive(Error, Debug)]
pub enum SynparseError {
    /// Malformed query syntax.
    #[error("Syntax error: {0}")]
    Syntax(String),

    /// The analyzer failed while producing tokens.
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A query construction strategy rejected the construct.
    #[error("Unsupported construct: {0}")]
    Unsupported(String),

    /// A range bound could not be interpreted for its field.
    #[error("Ambiguous range: {0}")]
    AmbiguousRange(String),

    /// The parser configuration is contradictory.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O errors (config and synonym files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SynparseError.
pub type Result<T> = std::result::Result<T, SynparseError>;

impl SynparseError {
    /// Create a new syntax error.
    pub fn syntax<S: Into<String>>(msg: S) -> Self {
        SynparseError::Syntax(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SynparseError::Analysis(msg.into())
    }

    /// Create a new unsupported-construct error.
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        SynparseError::Unsupported(msg.into())
    }

    /// Create a new ambiguous range error.
    pub fn ambiguous_range<S: Into<String>>(msg: S) -> Self {
        SynparseError::AmbiguousRange(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SynparseError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SynparseError::Other(msg.into())
    }

    /// Whether this error came from the query syntax itself.
    pub fn is_syntax(&self) -> bool {
        matches!(self, SynparseError::Syntax(_))
    }
}
