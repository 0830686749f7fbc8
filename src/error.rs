//! Error handling for the Semleaf client

use std::fmt;
use thiserror::Error;

/// Message carried by [`Error::Unauthorized`].
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Unified error type for the Semleaf client
#[derive(Error, Debug)]
pub enum Error {
    /// The server reported that the session is missing or expired (HTTP 401).
    ///
    /// The application shell reacts to this variant by switching to the
    /// login page.
    #[error("Unauthorized")]
    Unauthorized,

    /// The server rejected the request with a non-success status.
    ///
    /// `message` is the server's `error` field when present, otherwise the
    /// status reason text.
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human readable message
        message: String,
    },

    /// Network or HTTP transport errors
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Client-side validation failures
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new API error
    pub fn api<T: fmt::Display>(status: u16, msg: T) -> Self {
        Error::Api {
            status,
            message: msg.to_string(),
        }
    }

    /// Create a new validation error
    pub fn validation<T: fmt::Display>(msg: T) -> Self {
        Error::Validation(msg.to_string())
    }

    /// Create a new configuration error
    pub fn config<T: fmt::Display>(msg: T) -> Self {
        Error::Config(msg.to_string())
    }

    /// Whether the server reported an expired or missing session
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized)
    }

    /// HTTP status attached to this error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Unauthorized => Some(401),
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
