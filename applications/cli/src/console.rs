//! Console-backed collaborators
//!
//! A simulated transport that logs what an audio element would do, and a
//! notification sink that prints toasts and forgets them after a timeout.

use encore_core::{Notification, NotificationSink, Severity, Track};
use encore_playback::Transport;
use std::cell::RefCell;
use std::time::{Duration, Instant};
use tracing::info;

/// Transport that only records state
#[derive(Debug, Default)]
pub struct ConsoleTransport {
    loaded: Option<String>,
    playing: bool,
    position: Duration,
    volume: f32,
}

impl ConsoleTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loaded(&self) -> Option<&str> {
        self.loaded.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn position(&self) -> Duration {
        self.position
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }
}

impl Transport for ConsoleTransport {
    fn load(&mut self, track: &Track) -> encore_playback::Result<()> {
        info!(track_id = %track.id, source = %track.source, "load");
        self.loaded = Some(track.id.to_string());
        self.playing = false;
        self.position = Duration::ZERO;
        Ok(())
    }

    fn play(&mut self) -> encore_playback::Result<()> {
        info!(track = ?self.loaded, "play");
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        info!(track = ?self.loaded, "pause");
        self.playing = false;
    }

    fn seek(&mut self, position: Duration) -> encore_playback::Result<()> {
        info!(position_ms = position.as_millis() as u64, "seek");
        self.position = position;
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) {
        info!(volume, "volume");
        self.volume = volume;
    }
}

/// Prints notifications and keeps them visible for a fixed interval
#[derive(Debug)]
pub struct ConsoleSink {
    timeout: Duration,
    shown: RefCell<Vec<(Instant, Notification)>>,
}

impl ConsoleSink {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            shown: RefCell::new(Vec::new()),
        }
    }

    /// Notifications that have not been dismissed yet
    pub fn active(&self) -> Vec<Notification> {
        self.active_at(Instant::now())
    }

    fn active_at(&self, now: Instant) -> Vec<Notification> {
        self.dismiss_expired(now);
        self.shown.borrow().iter().map(|(_, n)| n.clone()).collect()
    }

    fn dismiss_expired(&self, now: Instant) {
        self.shown
            .borrow_mut()
            .retain(|(at, _)| now.saturating_duration_since(*at) < self.timeout);
    }
}

impl NotificationSink for ConsoleSink {
    fn notify(&self, notification: Notification) {
        let tag = match notification.severity {
            Severity::Info => "info",
            Severity::Success => " ok ",
            Severity::Error => "FAIL",
        };
        println!("[{}] {}", tag, notification.message);

        let now = Instant::now();
        self.dismiss_expired(now);
        self.shown.borrow_mut().push((now, notification));
    }
}
