//! Playback sequencer - core orchestration
//!
//! Decides which track plays next or previous and how the library, manual
//! queue, shuffled queue, history and skipped set change as the user skips,
//! queues, shuffles or removes tracks. Performs no I/O: every navigation
//! returns a [`Transition`] for the transport layer to apply.

use crate::{
    error::{PlaybackError, Result},
    events::SequencerEvent,
    history::History,
    queue::{ManualQueue, ShuffledQueue},
    shuffle::shuffle_tracks_with,
    skip::SkippedSet,
    types::{PlaybackConfig, PlaybackState, Removal, Transition},
};
use encore_core::{Track, TrackId};
use rand::{thread_rng, Rng};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

/// Central playback sequencing state
///
/// Owns:
/// - Library (natural order, replaced wholesale on sync)
/// - Manual queue (user "play next" FIFO)
/// - Shuffled queue (one materialized order per shuffle session)
/// - History (for "previous")
/// - Skipped set (library tracks suppressed from natural order)
/// - Current track, playback state, shuffle and repeat flags
#[derive(Debug, Clone)]
pub struct Sequencer {
    // Inputs
    library: Arc<[Track]>,
    manual: ManualQueue,
    shuffled: ShuffledQueue,
    history: History,
    skipped: SkippedSet,

    // State
    current: Option<Track>,
    state: PlaybackState,
    shuffle: bool,
    repeat: bool,

    restart_threshold: Duration,

    // Event queue for UI synchronization
    pending_events: Vec<SequencerEvent>,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(&PlaybackConfig::default())
    }
}

impl Sequencer {
    /// Create an idle sequencer with empty library and queues
    pub fn new(config: &PlaybackConfig) -> Self {
        Self {
            library: Arc::from(Vec::new()),
            manual: ManualQueue::new(),
            shuffled: ShuffledQueue::new(),
            history: History::new(),
            skipped: SkippedSet::new(),
            current: None,
            state: PlaybackState::Idle,
            shuffle: false,
            repeat: false,
            restart_threshold: config.restart_threshold,
            pending_events: Vec::new(),
        }
    }

    // ===== Navigation =====

    /// Advance to the next track
    ///
    /// Shuffled: head of the shuffled queue (and the matching manual queue
    /// entry is consumed too). Ordered: head of the manual queue, then the
    /// library after the current track, skipping suppressed entries. No
    /// wraparound: running off the end pauses with the current track kept.
    pub fn play_next(&mut self) -> Transition {
        let next = if self.shuffle {
            self.next_from_shuffle()
        } else {
            self.manual
                .front()
                .cloned()
                .or_else(|| self.natural_order().next().cloned())
        };

        match next {
            Some(track) => self.advance_to(track, true),
            None => self.exhausted(),
        }
    }

    /// Go back
    ///
    /// Past the restart threshold the current track restarts. Otherwise the
    /// most recent history entry plays; with no history, the previous library
    /// track plays, or the current one restarts when it is first.
    pub fn play_previous(&mut self, elapsed: Duration) -> Transition {
        if self.current.is_some() && elapsed > self.restart_threshold {
            debug!(elapsed_ms = elapsed.as_millis() as u64, "Restarting current track");
            return Transition::Restart;
        }

        if let Some(track) = self.history.pop() {
            return self.advance_to(track, false);
        }

        let Some(current) = &self.current else {
            return Transition::None;
        };

        match self.library_index_of(&current.id) {
            Some(index) if index > 0 => {
                let track = self.library[index - 1].clone();
                self.advance_to(track, false)
            }
            _ => Transition::Restart,
        }
    }

    /// Play a track the user picked from the library view
    ///
    /// Explicit selection leaves shuffle entirely and forgets skipped
    /// entries. Plain next/previous keep both.
    pub fn select_track(&mut self, track: Track) -> Transition {
        self.skipped.clear();
        if self.shuffle {
            self.shuffle = false;
            self.shuffled.clear();
            self.emit(SequencerEvent::ShuffleChanged { enabled: false });
        }
        self.advance_to(track, true)
    }

    /// React to the transport reporting the end of the current track
    ///
    /// Repeat takes precedence over shuffle and changes no sequencer state.
    pub fn on_track_ended(&mut self) -> Transition {
        if self.repeat && self.current.is_some() {
            debug!("Repeat enabled, restarting current track");
            Transition::Restart
        } else {
            self.play_next()
        }
    }

    /// Pause playback. Returns false if nothing was playing.
    pub fn pause(&mut self) -> bool {
        if self.state == PlaybackState::Playing {
            self.set_state(PlaybackState::Paused);
            true
        } else {
            false
        }
    }

    /// Start or resume playback
    ///
    /// A loaded, paused track resumes; with nothing loaded this behaves like
    /// `play_next`.
    pub fn resume(&mut self) -> Transition {
        match (self.state, self.current.is_some()) {
            (PlaybackState::Playing, _) => Transition::None,
            (_, true) => {
                self.set_state(PlaybackState::Playing);
                Transition::Resume
            }
            (_, false) => self.play_next(),
        }
    }

    /// Revert a Playing intent after the host refused to start audio
    ///
    /// Queue and history changes already applied are kept. Returns false
    /// when nothing was playing.
    pub fn revert_to_paused(&mut self) -> bool {
        if self.state == PlaybackState::Playing {
            self.set_state(PlaybackState::Paused);
            true
        } else {
            false
        }
    }

    // ===== Queue Management =====

    /// Append a track to the manual queue
    ///
    /// While shuffled, the track also goes to the tail of the shuffled queue.
    pub fn add_to_queue(&mut self, track: Track) {
        debug!(track_id = %track.id, shuffled = self.shuffle, "Queueing track");
        if self.shuffle {
            self.shuffled.push(track.clone());
        }
        self.manual.push(track);
        self.emit_up_next_changed();
    }

    /// Remove the entry at `index` of [`compute_up_next`](Self::compute_up_next)
    ///
    /// Library-derived entries cannot be deleted from the library, so they
    /// are suppressed through the skipped set instead.
    pub fn remove_from_up_next(&mut self, index: usize) -> Result<Removal> {
        let removal = if self.shuffle {
            self.shuffled
                .remove(index)
                .map(Removal::Shuffled)
                .ok_or(PlaybackError::IndexOutOfBounds(index))?
        } else if index < self.manual.len() {
            self.manual
                .remove(index)
                .map(Removal::Queued)
                .ok_or(PlaybackError::IndexOutOfBounds(index))?
        } else {
            let id = self
                .natural_order()
                .nth(index - self.manual.len())
                .map(|t| t.id.clone())
                .ok_or(PlaybackError::IndexOutOfBounds(index))?;
            self.skipped.insert(id.clone());
            Removal::Skipped(id)
        };

        trace!(index, ?removal, "Removed from up next");
        self.emit_up_next_changed();
        Ok(removal)
    }

    /// Clear the manual queue (and the shuffled queue, if shuffled)
    pub fn clear_queue(&mut self) {
        self.manual.clear();
        self.shuffled.clear();
        self.emit_up_next_changed();
    }

    /// Derived "up next" list
    ///
    /// Shuffled: the shuffled queue verbatim. Ordered: manual queue followed
    /// by library tracks after the current one, minus skipped entries.
    pub fn compute_up_next(&self) -> Vec<&Track> {
        if self.shuffle {
            self.shuffled.iter().collect()
        } else {
            self.manual.iter().chain(self.natural_order()).collect()
        }
    }

    // ===== Modes =====

    /// Toggle shuffle using the thread-local RNG
    pub fn toggle_shuffle(&mut self) -> bool {
        let mut rng = thread_rng();
        self.toggle_shuffle_with(&mut rng)
    }

    /// Toggle shuffle with a caller-supplied RNG
    ///
    /// Turning on materializes a uniform permutation of the manual queue
    /// followed by the remaining natural order. Turning off discards it.
    pub fn toggle_shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.shuffle {
            self.shuffle = false;
            self.shuffled.clear();
        } else {
            let mut tracks: Vec<Track> = self
                .manual
                .iter()
                .chain(self.natural_order())
                .cloned()
                .collect();
            shuffle_tracks_with(&mut tracks, rng);
            self.shuffled.replace(tracks);
            self.shuffle = true;
        }

        debug!(enabled = self.shuffle, length = self.shuffled.len(), "Shuffle toggled");
        self.emit(SequencerEvent::ShuffleChanged {
            enabled: self.shuffle,
        });
        self.emit_up_next_changed();
        self.shuffle
    }

    /// Toggle repeat. Only consulted at end of track.
    pub fn toggle_repeat(&mut self) -> bool {
        self.repeat = !self.repeat;
        self.emit(SequencerEvent::RepeatChanged {
            enabled: self.repeat,
        });
        self.repeat
    }

    // ===== Library & Session =====

    /// Replace the library wholesale
    ///
    /// Skipped entries that no longer exist in the library are dropped. The
    /// shuffled queue keeps its materialized order.
    pub fn set_library(&mut self, tracks: impl Into<Arc<[Track]>>) {
        self.library = tracks.into();
        let library = Arc::clone(&self.library);
        self.skipped
            .retain(|id| library.iter().any(|track| &track.id == id));

        debug!(length = self.library.len(), "Library replaced");
        self.emit(SequencerEvent::LibraryReplaced {
            length: self.library.len(),
        });
        self.emit_up_next_changed();
    }

    /// Append a freshly uploaded track to the library
    ///
    /// If nothing is loaded, the track becomes current without starting
    /// playback.
    pub fn append_to_library(&mut self, track: Track) -> Transition {
        let mut tracks = self.library.to_vec();
        tracks.push(track.clone());
        self.set_library(tracks);

        if self.current.is_some() {
            return Transition::None;
        }

        self.emit(SequencerEvent::TrackChanged {
            track_id: Some(track.id.clone()),
            previous_track_id: None,
        });
        self.current = Some(track.clone());
        self.set_state(PlaybackState::Paused);
        self.emit_up_next_changed();
        Transition::Cue(track)
    }

    /// Reset everything at a session boundary (logout, leaving guest mode)
    pub fn end_session(&mut self) -> Transition {
        let had_track = self.current.is_some();

        self.library = Arc::from(Vec::new());
        self.manual.clear();
        self.shuffled.clear();
        self.history.clear();
        self.skipped.clear();
        self.current = None;
        self.state = PlaybackState::Idle;
        self.shuffle = false;
        self.repeat = false;

        debug!("Session ended, sequencer reset");
        self.emit(SequencerEvent::SessionCleared);

        if had_track {
            Transition::Stop
        } else {
            Transition::None
        }
    }

    // ===== State Queries =====

    pub fn current_track(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffle
    }

    pub fn is_repeat(&self) -> bool {
        self.repeat
    }

    pub fn library(&self) -> &[Track] {
        &self.library
    }

    pub fn manual_queue(&self) -> Vec<&Track> {
        self.manual.iter().collect()
    }

    pub fn shuffled_queue(&self) -> Vec<&Track> {
        self.shuffled.iter().collect()
    }

    /// Get playback history (oldest first)
    pub fn history(&self) -> Vec<&Track> {
        self.history.get_all()
    }

    pub fn is_skipped(&self, id: &TrackId) -> bool {
        self.skipped.contains(id)
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn restart_threshold(&self) -> Duration {
        self.restart_threshold
    }

    /// Check if `play_next` would find a track
    pub fn has_next(&self) -> bool {
        self.peek_next().is_some()
    }

    /// Check if `play_previous` would move to another track
    pub fn has_previous(&self) -> bool {
        !self.history.is_empty()
            || self
                .current
                .as_ref()
                .and_then(|t| self.library_index_of(&t.id))
                .is_some_and(|index| index > 0)
    }

    /// Track `play_next` would select, without consuming it
    pub fn peek_next(&self) -> Option<&Track> {
        if self.shuffle {
            self.shuffled.front()
        } else {
            self.manual.front().or_else(|| self.natural_order().next())
        }
    }

    // ===== Events =====

    /// Drain all pending events
    pub fn drain_events(&mut self) -> Vec<SequencerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    /// Library tracks after the current one, excluding skipped entries
    ///
    /// Starts at index 0 when nothing is current or the current track is
    /// not part of the library.
    fn natural_order(&self) -> impl Iterator<Item = &Track> {
        let start = self
            .current
            .as_ref()
            .and_then(|t| self.library_index_of(&t.id))
            .map_or(0, |index| index + 1);

        self.library
            .iter()
            .skip(start)
            .filter(move |track| !self.skipped.contains(&track.id))
    }

    fn library_index_of(&self, id: &TrackId) -> Option<usize> {
        self.library.iter().position(|t| &t.id == id)
    }

    fn next_from_shuffle(&mut self) -> Option<Track> {
        self.shuffled.pop_front()
    }

    /// Make `track` current and start playing it
    ///
    /// A track leaves the manual queue once it is current, whichever path
    /// (queue head, shuffle, selection, history) brought it there.
    fn advance_to(&mut self, track: Track, record_history: bool) -> Transition {
        if self.manual.remove_first(&track.id).is_some() {
            trace!(track_id = %track.id, "Consumed manual queue entry");
        }

        let previous = self.current.take();
        let previous_track_id = previous.as_ref().map(|t| t.id.clone());

        if record_history {
            if let Some(previous) = previous {
                self.history.push(previous);
            }
        }

        debug!(
            track_id = %track.id,
            previous = ?previous_track_id,
            history = self.history.len(),
            "Advancing"
        );

        self.emit(SequencerEvent::TrackChanged {
            track_id: Some(track.id.clone()),
            previous_track_id,
        });
        self.current = Some(track.clone());
        self.set_state(PlaybackState::Playing);
        self.emit_up_next_changed();

        Transition::Load(track)
    }

    /// Nothing left to play: pause, keep the current track
    fn exhausted(&mut self) -> Transition {
        if self.current.is_none() {
            return Transition::None;
        }

        debug!(shuffled = self.shuffle, "Nothing left to play");
        self.set_state(PlaybackState::Paused);
        Transition::Stop
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.emit(SequencerEvent::StateChanged { state });
        }
    }

    fn emit_up_next_changed(&mut self) {
        let length = if self.shuffle {
            self.shuffled.len()
        } else {
            self.manual.len() + self.natural_order().count()
        };
        self.emit(SequencerEvent::UpNextChanged { length });
    }

    fn emit(&mut self, event: SequencerEvent) {
        self.pending_events.push(event);
    }
}
