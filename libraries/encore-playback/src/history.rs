//! Playback history tracking
//!
//! Stack of previously played tracks for "previous" navigation

use encore_core::Track;

/// Playback history
///
/// Push at the end, pop from the end. Growth is unbounded; the history
/// is only emptied at session boundaries (logout, leaving guest mode).
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Most recent = last
    tracks: Vec<Track>,
}

impl History {
    /// Create empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Add track to history
    pub fn push(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Get most recent track (without removing)
    pub fn peek(&self) -> Option<&Track> {
        self.tracks.last()
    }

    /// Pop most recent track from history
    pub fn pop(&mut self) -> Option<Track> {
        self.tracks.pop()
    }

    /// Get all history tracks (oldest first)
    pub fn get_all(&self) -> Vec<&Track> {
        self.tracks.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.tracks.clear();
    }
}
