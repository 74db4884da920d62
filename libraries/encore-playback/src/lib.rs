//! Encore - Playback Sequencing
//!
//! Platform-agnostic playback sequencing for Encore.
//!
//! This crate provides:
//! - Manual "play next" queue
//! - Shuffle (uniform Fisher-Yates, materialized once per shuffle session)
//! - Repeat (restart current track at end)
//! - Playback history for "previous"
//! - Skip suppression of library tracks from "up next"
//! - A derived, read-only "up next" projection
//!
//! # Architecture
//!
//! `encore-playback` performs no I/O:
//! - [`Sequencer`] holds all state and returns a [`Transition`] from every
//!   navigation method
//! - [`Player`] applies transitions to a platform [`Transport`] and sends
//!   user-facing messages to a `NotificationSink`
//! - Libraries come from any `encore_core::LibrarySync`
//!
//! # Example: Sequencing
//!
//! ```rust
//! use encore_core::{Track, UserId};
//! use encore_playback::{Sequencer, Transition};
//!
//! let owner = UserId::new("alice");
//! let track = |id: &str| Track::new(id, id, "Artist", format!("/music/{id}.mp3"), owner.clone());
//!
//! let mut sequencer = Sequencer::default();
//! sequencer.set_library(vec![track("x"), track("y"), track("z")]);
//! sequencer.select_track(track("x"));
//! sequencer.add_to_queue(track("a"));
//!
//! let up_next: Vec<&str> = sequencer.compute_up_next().iter().map(|t| t.id.as_str()).collect();
//! assert_eq!(up_next, ["a", "y", "z"]);
//!
//! match sequencer.play_next() {
//!     Transition::Load(next) => assert_eq!(next.id.as_str(), "a"),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

mod error;
mod events;
mod history;
mod player;
mod queue;
mod sequencer;
mod shuffle;
mod skip;
mod transport;
pub mod types;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::SequencerEvent;
pub use player::Player;
pub use sequencer::Sequencer;
pub use shuffle::{shuffle_tracks, shuffle_tracks_with};
pub use transport::{Transport, TransportEvent};
pub use types::{PlaybackConfig, PlaybackState, Removal, Transition};
