//! Error types for catalog-relay

use crate::types::DataKind;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Detail carried by a failed webhook response
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    /// The response body parsed as JSON
    Json(serde_json::Value),
    /// The raw response text (not JSON)
    Text(String),
}

impl ErrorBody {
    /// Classify a raw response body
    pub fn from_text(text: String) -> Self {
        match serde_json::from_str(&text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text),
        }
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) if text.is_empty() => write!(f, "<empty body>"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

/// Errors raised by the relay pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// No webhook secret was configured
    #[error("WEBHOOK_SECRET is not set")]
    MissingSecret,

    /// Invalid configuration value
    #[error("configuration error: {0}")]
    Config(String),

    /// A required cache document does not exist
    #[error("cache file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A cache document exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Offending file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A cache document is not valid JSON of the expected shape
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// Offending file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The webhook answered with a non-2xx status
    #[error("webhook returned {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Parsed error body, or the raw text
        body: ErrorBody,
    },

    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose body could not be understood
    #[error("invalid webhook response: {0}")]
    InvalidResponse(String),

    /// A per-semester envelope was built without a semester id
    #[error("{0} envelope requires a semester id")]
    MissingSemester(DataKind),

    /// A semesters envelope was given a semester id
    #[error("semesters envelope must not carry a semester id")]
    UnexpectedSemester,

    /// Payload serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for catalog-relay
pub type Result<T> = std::result::Result<T, Error>;
