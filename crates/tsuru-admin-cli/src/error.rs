//! Error types for command execution

use thiserror::Error;
use tsuru_admin_client::ClientError;

/// Errors returned by the dispatcher and by commands
#[derive(Error, Debug)]
pub enum CommandError {
    /// Bad arguments, detected before any request is sent
    #[error("{0}")]
    Usage(String),

    /// Transport, status or decode failure from the API client
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Reading the prompt answer or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The server accepted the request but the command did not succeed
    #[error("{0}")]
    Failed(String),
}

impl CommandError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Process exit code: 2 for usage errors, 1 otherwise
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            _ => 1,
        }
    }
}

/// Result type for command execution
pub type Result<T> = std::result::Result<T, CommandError>;
