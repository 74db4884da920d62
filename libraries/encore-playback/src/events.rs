//! Sequencer Events
//!
//! Change notifications for UI synchronization. The sequencer queues an
//! event whenever observable state changes; the UI layer drains them
//! instead of the sequencer reaching into rendering state.

use crate::types::PlaybackState;
use encore_core::TrackId;
use serde::{Deserialize, Serialize};

/// Events emitted by the sequencer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequencerEvent {
    /// Current track changed
    TrackChanged {
        /// ID of the new current track (None when cleared)
        track_id: Option<TrackId>,
        /// ID of the previous current track (if any)
        previous_track_id: Option<TrackId>,
    },

    /// Playback state changed (idle, playing, paused)
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// The derived "up next" list changed
    UpNextChanged {
        /// New "up next" length
        length: usize,
    },

    /// Shuffle toggled
    ShuffleChanged { enabled: bool },

    /// Repeat toggled
    RepeatChanged { enabled: bool },

    /// Library replaced or extended
    LibraryReplaced {
        /// New library length
        length: usize,
    },

    /// Session ended; all state reset
    SessionCleared,
}
