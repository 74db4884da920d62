//! Player - binds the sequencer to a transport and a notification sink
//!
//! Every external event (user intent, transport notification, library
//! refresh result) is processed to completion before the next one: the
//! sequencer decides, the player applies the resulting transition.

use crate::{
    error::{PlaybackError, Result},
    events::SequencerEvent,
    sequencer::Sequencer,
    transport::{Transport, TransportEvent},
    types::{PlaybackConfig, PlaybackState, Removal, Transition},
};
use encore_core::{LibrarySync, Notification, NotificationSink, Track, UserId};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Playback controller
///
/// Owns the [`Sequencer`] and applies its decisions to a [`Transport`].
/// User-visible outcomes (queued confirmation, blocked autoplay, skipped
/// broken track) go to the [`NotificationSink`].
pub struct Player<T: Transport, N: NotificationSink> {
    sequencer: Sequencer,
    transport: T,
    notifier: N,

    // Transport clock, as last reported
    elapsed: Duration,
    duration: Option<Duration>,

    volume: f32,
}

impl<T: Transport, N: NotificationSink> Player<T, N> {
    /// Create a new player
    pub fn new(config: &PlaybackConfig, mut transport: T, notifier: N) -> Self {
        let volume = clamp_volume(config.volume).unwrap_or(1.0);
        transport.set_volume(volume);

        Self {
            sequencer: Sequencer::new(config),
            transport,
            notifier,
            elapsed: Duration::ZERO,
            duration: None,
            volume,
        }
    }

    // ===== User Intents =====

    /// Skip to next track
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        let transition = self.sequencer.play_next();
        self.apply(transition);
    }

    /// Go to previous track (or restart the current one)
    pub fn previous(&mut self) {
        let transition = self.sequencer.play_previous(self.elapsed);
        self.apply(transition);
    }

    /// Play a track picked from the library view
    pub fn select_track(&mut self, track: Track) {
        let transition = self.sequencer.select_track(track);
        self.apply(transition);
    }

    /// Queue a track to play next and confirm it to the user
    pub fn add_to_queue(&mut self, track: Track) {
        let message = format!("Added \"{}\" to queue", track.name);
        self.sequencer.add_to_queue(track);
        self.notifier.notify(Notification::success(message));
    }

    /// Remove an entry from "up next" by its displayed index
    pub fn remove_from_up_next(&mut self, index: usize) -> Result<Removal> {
        self.sequencer.remove_from_up_next(index)
    }

    pub fn toggle_shuffle(&mut self) -> bool {
        self.sequencer.toggle_shuffle()
    }

    pub fn toggle_repeat(&mut self) -> bool {
        self.sequencer.toggle_repeat()
    }

    pub fn clear_queue(&mut self) {
        self.sequencer.clear_queue();
    }

    /// Pause playback
    pub fn pause(&mut self) {
        if self.sequencer.pause() {
            self.transport.pause();
        }
    }

    /// Start or resume playback
    pub fn resume(&mut self) {
        let transition = self.sequencer.resume();
        self.apply(transition);
    }

    /// Seek within the current track
    ///
    /// Positions past a known duration are clamped to it.
    pub fn seek(&mut self, position: Duration) -> Result<()> {
        if self.sequencer.current_track().is_none() {
            return Err(PlaybackError::NoTrackLoaded);
        }

        let position = match self.duration {
            Some(duration) => position.min(duration),
            None => position,
        };

        self.transport.seek(position)?;
        self.elapsed = position;
        Ok(())
    }

    /// Set volume; values are clamped to [0, 1] and NaN is ignored
    pub fn set_volume(&mut self, volume: f32) {
        if let Some(volume) = clamp_volume(volume) {
            self.volume = volume;
            self.transport.set_volume(volume);
        }
    }

    // ===== Transport Events =====

    /// React to a transport notification
    pub fn handle_event(&mut self, event: TransportEvent) {
        match event {
            TransportEvent::TimeUpdate(position) => {
                self.elapsed = position;
            }
            TransportEvent::DurationKnown(duration) => {
                self.duration = Some(duration);
            }
            TransportEvent::Ended => {
                let transition = self.sequencer.on_track_ended();
                self.apply(transition);
            }
            TransportEvent::PlaybackError(cause) => {
                self.skip_broken_track(&cause);
            }
            TransportEvent::PlayRejected(cause) => {
                self.playback_denied(&cause);
            }
        }
    }

    // ===== Library & Session =====

    /// Fetch the library and replace the current one
    ///
    /// Failures are logged and the existing library is kept. Returns
    /// whether the library was replaced.
    pub async fn refresh_library<S>(&mut self, sync: &S, user: &UserId) -> bool
    where
        S: LibrarySync + ?Sized,
    {
        debug!(user = %user, "Refreshing library");
        let result = sync.fetch(user).await;
        self.apply_library(result)
    }

    /// Apply the result of a library fetch
    ///
    /// A stale result simply overwrites the library; replacing is idempotent.
    pub fn apply_library(&mut self, result: encore_core::Result<Vec<Track>>) -> bool {
        match result {
            Ok(tracks) => {
                info!(tracks = tracks.len(), "Library refreshed");
                self.sequencer.set_library(tracks);
                true
            }
            Err(err) => {
                warn!(error = %err, "Library refresh failed, keeping existing library");
                false
            }
        }
    }

    /// Hand-off from the upload pipeline
    pub fn append_uploaded(&mut self, track: Track) {
        let transition = self.sequencer.append_to_library(track);
        self.apply(transition);
    }

    /// Session boundary (logout, leaving guest mode)
    pub fn end_session(&mut self) {
        let transition = self.sequencer.end_session();
        self.apply(transition);
        self.elapsed = Duration::ZERO;
        self.duration = None;
    }

    // ===== State Queries =====

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn up_next(&self) -> Vec<&Track> {
        self.sequencer.compute_up_next()
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.sequencer.current_track()
    }

    pub fn state(&self) -> PlaybackState {
        self.sequencer.state()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Drain sequencer change notifications for the UI
    pub fn drain_events(&mut self) -> Vec<SequencerEvent> {
        self.sequencer.drain_events()
    }

    // ===== Internal =====

    /// Apply a sequencer decision to the transport
    fn apply(&mut self, transition: Transition) {
        let mut transition = transition;
        loop {
            match transition {
                Transition::Load(track) => {
                    self.reset_clock(&track);
                    if let Err(err) = self.transport.load(&track) {
                        warn!(track_id = %track.id, error = %err, "Failed to load track");
                        self.notify_skipped(&track);
                        transition = self.sequencer.play_next();
                        continue;
                    }
                    self.start_playback();
                }
                Transition::Cue(track) => {
                    self.reset_clock(&track);
                    if let Err(err) = self.transport.load(&track) {
                        warn!(track_id = %track.id, error = %err, "Failed to cue track");
                    }
                }
                Transition::Resume => self.start_playback(),
                Transition::Restart => {
                    self.elapsed = Duration::ZERO;
                    if let Err(err) = self.transport.seek(Duration::ZERO) {
                        warn!(error = %err, "Failed to restart track");
                    }
                    if self.sequencer.state() == PlaybackState::Playing {
                        self.start_playback();
                    }
                }
                Transition::Stop => self.transport.pause(),
                Transition::None => {}
            }
            break;
        }
    }

    fn start_playback(&mut self) {
        if let Err(err) = self.transport.play() {
            self.playback_denied(&err.to_string());
        }
    }

    /// Host refused to start audio: back to paused, navigation stands
    fn playback_denied(&mut self, cause: &str) {
        if !self.sequencer.revert_to_paused() {
            debug!(cause, "Ignoring refusal, nothing is playing");
            return;
        }

        info!(cause, "Playback start was refused");
        self.notifier.notify(Notification::info(
            "Playback was blocked. Press play to start.",
        ));
    }

    /// Decode/network failure: skip ahead, do not halt
    fn skip_broken_track(&mut self, cause: &str) {
        if let Some(track) = self.sequencer.current_track().cloned() {
            warn!(track_id = %track.id, cause, "Playback error, skipping track");
            self.notify_skipped(&track);
        }
        let transition = self.sequencer.play_next();
        self.apply(transition);
    }

    fn notify_skipped(&self, track: &Track) {
        self.notifier.notify(Notification::error(format!(
            "Couldn't play \"{}\", skipping",
            track.name
        )));
    }

    fn reset_clock(&mut self, track: &Track) {
        self.elapsed = Duration::ZERO;
        self.duration = track.has_known_duration().then_some(track.duration);
    }
}

fn clamp_volume(volume: f32) -> Option<f32> {
    if volume.is_nan() {
        None
    } else {
        Some(volume.clamp(0.0, 1.0))
    }
}
