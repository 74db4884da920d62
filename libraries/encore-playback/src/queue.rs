//! Manual and shuffled queues
//!
//! ```text
//! Currently Playing: Track A
//! ─────────────────────────────
//! Manual Queue (user "play next", FIFO):
//!   - Track B
//!   - Track C
//! ─────────────────────────────
//! Shuffle off: library after Track A, minus skipped
//! Shuffle on:  Shuffled Queue, materialized once, consumed head-first
//! ```

use encore_core::{Track, TrackId};
use std::collections::VecDeque;

/// User-requested "play next" additions
///
/// Append-only, except head removal on consumption and index removal
/// when the user deletes an entry.
#[derive(Debug, Clone, Default)]
pub struct ManualQueue {
    tracks: VecDeque<Track>,
}

impl ManualQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add track to end of queue
    pub fn push(&mut self, track: Track) {
        self.tracks.push_back(track);
    }

    /// Remove track by index
    pub fn remove(&mut self, index: usize) -> Option<Track> {
        self.tracks.remove(index)
    }

    /// Remove the first entry with this id
    ///
    /// Called whenever a track becomes current, so a queued entry never
    /// plays twice.
    pub fn remove_first(&mut self, id: &TrackId) -> Option<Track> {
        let index = self.tracks.iter().position(|t| &t.id == id)?;
        self.tracks.remove(index)
    }

    pub fn front(&self) -> Option<&Track> {
        self.tracks.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }
}

/// Materialized shuffle order for one shuffle session
///
/// Empty whenever shuffle is off.
#[derive(Debug, Clone, Default)]
pub struct ShuffledQueue {
    tracks: VecDeque<Track>,
}

impl ShuffledQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace contents with an already shuffled order
    pub fn replace(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks.into();
    }

    /// Append to the tail (new additions are not inserted randomly)
    pub fn push(&mut self, track: Track) {
        self.tracks.push_back(track);
    }

    pub fn pop_front(&mut self) -> Option<Track> {
        self.tracks.pop_front()
    }

    pub fn remove(&mut self, index: usize) -> Option<Track> {
        self.tracks.remove(index)
    }

    pub fn front(&self) -> Option<&Track> {
        self.tracks.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }
}
