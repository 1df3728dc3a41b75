//! Error types for the tsuru admin client

use thiserror::Error;

/// Errors that can occur when using the tsuru admin client
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// No API target configured
    #[error("no target defined; set one with TSURU_TARGET or --target")]
    MissingTarget,

    /// API returned an error status
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from server
        message: String,
    },
}

impl ClientError {
    /// HTTP status carried by an API error
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server refused a change that needs explicit confirmation (412)
    #[must_use]
    pub fn is_precondition_failed(&self) -> bool {
        self.status() == Some(412)
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
