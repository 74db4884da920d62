/// Core error types for Encore
use thiserror::Error;

/// Result type alias using `EncoreError`
pub type Result<T> = std::result::Result<T, EncoreError>;

/// Core error type for Encore
#[derive(Error, Debug)]
pub enum EncoreError {
    /// Library sync failed (remote answered, but not with a library)
    #[error("Library sync error: {0}")]
    Sync(String),

    /// Network error (remote unreachable, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl EncoreError {
    /// Create a library sync error
    pub fn sync(msg: impl Into<String>) -> Self {
        Self::Sync(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity() {
        let err = EncoreError::not_found("Track", "t42");
        assert_eq!(err.to_string(), "Track not found: t42");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: EncoreError = io.into();
        assert!(matches!(err, EncoreError::Io(_)));
    }
}
