//! Error types for playback sequencing

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No track is currently loaded
    #[error("No track loaded")]
    NoTrackLoaded,

    /// Index out of bounds
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// The host refused to start playback (e.g. autoplay policy)
    #[error("Playback denied: {0}")]
    PlaybackDenied(String),

    /// Transport failed to load or control a track
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
