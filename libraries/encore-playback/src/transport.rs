//! Platform-agnostic transport trait
//!
//! Abstracts the audio-playback primitive (an audio element, a native
//! player, a test double) that sequencer decisions are applied to.

use crate::error::Result;
use encore_core::Track;
use std::time::Duration;

/// Audio playback primitive
///
/// Implementors load a track's source and control playback. The sequencer
/// never calls this directly; [`Player`](crate::Player) applies
/// [`Transition`](crate::Transition)s to it.
pub trait Transport {
    /// Load a track's source, replacing whatever was loaded
    ///
    /// # Returns
    /// * `Err(_)` - Source could not be loaded; the player skips the track
    fn load(&mut self, track: &Track) -> Result<()>;

    /// Start or resume playback of the loaded source
    ///
    /// The host may refuse (autoplay policy). Refusal can be reported here
    /// as `PlaybackError::PlaybackDenied`, or later through
    /// [`TransportEvent::PlayRejected`].
    fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the position
    fn pause(&mut self);

    /// Seek to position in the loaded track
    fn seek(&mut self, position: Duration) -> Result<()>;

    /// Set output volume in [0, 1]
    fn set_volume(&mut self, volume: f32);
}

/// Notifications emitted by a transport
#[derive(Debug, Clone, PartialEq)]
pub enum TransportEvent {
    /// Playback position advanced
    TimeUpdate(Duration),

    /// Duration of the loaded source became known
    DurationKnown(Duration),

    /// The loaded track played to its end
    Ended,

    /// Decode or network failure during playback
    PlaybackError(String),

    /// An earlier `play()` was refused asynchronously by the host
    PlayRejected(String),
}
