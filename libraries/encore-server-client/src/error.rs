//! Error types for the Encore server client.

use encore_core::EncoreError;
use thiserror::Error;

/// Errors that can occur when fetching a library.
#[derive(Error, Debug)]
pub enum ServerClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Authentication required but no (valid) token available
    #[error("Authentication required")]
    AuthRequired,

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response or library file
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// IO error reading a library file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for server client operations.
pub type Result<T> = std::result::Result<T, ServerClientError>;

impl From<ServerClientError> for EncoreError {
    fn from(err: ServerClientError) -> Self {
        match err {
            ServerClientError::Request(e) => EncoreError::network(e.to_string()),
            ServerClientError::Io(e) => EncoreError::Io(e),
            other => EncoreError::sync(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_become_sync_errors() {
        let err: EncoreError = ServerClientError::ServerError {
            status: 500,
            message: "boom".into(),
        }
        .into();

        assert!(matches!(err, EncoreError::Sync(ref msg) if msg.contains("500")));
    }

    #[test]
    fn io_errors_stay_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: EncoreError = ServerClientError::Io(io).into();
        assert!(matches!(err, EncoreError::Io(_)));
    }
}
