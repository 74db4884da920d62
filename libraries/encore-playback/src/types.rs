//! Core types for playback sequencing

use encore_core::{Track, TrackId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Nothing loaded yet
    #[default]
    Idle,

    /// Currently playing
    Playing,

    /// Paused (mid-track, after exhausting the queue, or after a blocked start)
    Paused,
}

/// What the transport layer has to do after a sequencer decision
///
/// The sequencer never touches audio itself; every navigation method
/// returns one of these and the caller applies it.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Load this track and start playing it
    Load(Track),

    /// Load this track without starting playback
    Cue(Track),

    /// Resume the already loaded track
    Resume,

    /// Seek the current track back to zero
    Restart,

    /// Stop producing audio; the current track stays loaded
    Stop,

    /// Nothing to do
    None,
}

impl Transition {
    /// Track to load, if this transition loads one
    pub fn track(&self) -> Option<&Track> {
        match self {
            Transition::Load(track) | Transition::Cue(track) => Some(track),
            _ => None,
        }
    }
}

/// Outcome of removing an entry from "up next"
#[derive(Debug, Clone, PartialEq)]
pub enum Removal {
    /// Entry was taken out of the manual queue
    Queued(Track),

    /// Entry was taken out of the shuffled queue
    Shuffled(Track),

    /// Entry came from the library and is now suppressed
    Skipped(TrackId),
}

/// Configuration for the sequencer and player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Elapsed time past which "previous" restarts the current track (default: 3s)
    pub restart_threshold: Duration,

    /// Initial volume in [0, 1] (default: 1.0)
    pub volume: f32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            restart_threshold: Duration::from_secs(3),
            volume: 1.0,
        }
    }
}
