//! Interactive session: one player, one user, one library source

use crate::command::{Command, HELP};
use crate::console::{ConsoleSink, ConsoleTransport};
use encore_core::{LibrarySync, Track, UserId};
use encore_playback::{PlaybackConfig, Player, Removal, TransportEvent};
use std::fmt::Write as _;
use std::time::Duration;
use tracing::{debug, warn};

/// Whether the read loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    player: Player<ConsoleTransport, ConsoleSink>,
    library: Box<dyn LibrarySync>,
    user: UserId,
}

impl Session {
    pub fn new(
        config: &PlaybackConfig,
        notification_timeout: Duration,
        library: Box<dyn LibrarySync>,
        user: UserId,
    ) -> Self {
        Self {
            player: Player::new(
                config,
                ConsoleTransport::new(),
                ConsoleSink::new(notification_timeout),
            ),
            library,
            user,
        }
    }

    pub fn player(&self) -> &Player<ConsoleTransport, ConsoleSink> {
        &self.player
    }

    /// Log in: fetch the library for the session user
    pub async fn login(&mut self) -> bool {
        self.player.refresh_library(self.library.as_ref(), &self.user).await
    }

    /// Run one command, returning what to print
    pub async fn execute(&mut self, command: Command) -> (Flow, String) {
        debug!(?command, "Executing");
        let mut out = String::new();

        match command {
            Command::Next => self.player.next(),
            Command::Previous => self.player.previous(),
            Command::Queue(id) => match self.find(&id) {
                Some(track) => self.player.add_to_queue(track),
                None => out = format!("no track {:?} in library", id),
            },
            Command::Remove(index) => match self.player.remove_from_up_next(index) {
                Ok(Removal::Queued(track) | Removal::Shuffled(track)) => {
                    out = format!("removed {}", track.name);
                }
                Ok(Removal::Skipped(id)) => out = format!("skipping {}", id),
                Err(err) => out = err.to_string(),
            },
            Command::Select(id) => match self.find(&id) {
                Some(track) => self.player.select_track(track),
                None => out = format!("no track {:?} in library", id),
            },
            Command::Shuffle => {
                let on = self.player.toggle_shuffle();
                out = format!("shuffle {}", if on { "on" } else { "off" });
            }
            Command::Repeat => {
                let on = self.player.toggle_repeat();
                out = format!("repeat {}", if on { "on" } else { "off" });
            }
            Command::Pause => self.player.pause(),
            Command::Resume => self.player.resume(),
            Command::Seek(position) => {
                if let Err(err) = self.player.seek(position) {
                    out = err.to_string();
                }
            }
            Command::Tick(position) => self.player.handle_event(TransportEvent::TimeUpdate(position)),
            Command::End => self.player.handle_event(TransportEvent::Ended),
            Command::Error(cause) => self.player.handle_event(TransportEvent::PlaybackError(cause)),
            Command::Reject => self
                .player
                .handle_event(TransportEvent::PlayRejected("simulated autoplay policy".into())),
            Command::Volume(volume) => self.player.set_volume(volume),
            Command::Refresh => {
                if !self.login().await {
                    warn!("Refresh failed; library unchanged");
                }
            }
            Command::Logout => {
                self.player.end_session();
                out = "session ended".to_string();
            }
            Command::UpNext => out = self.render_up_next(),
            Command::Status => out = self.render_status(),
            Command::Help => out = HELP.to_string(),
            Command::Quit => return (Flow::Quit, out),
        }

        for event in self.player.drain_events() {
            debug!(?event, "Sequencer event");
        }

        (Flow::Continue, out)
    }

    fn find(&self, id: &str) -> Option<Track> {
        self.player
            .sequencer()
            .library()
            .iter()
            .find(|t| t.id.as_str() == id)
            .cloned()
    }

    pub fn render_up_next(&self) -> String {
        let up_next = self.player.up_next();
        if up_next.is_empty() {
            return "up next: (empty)".to_string();
        }

        let mut out = String::from("up next:");
        for (index, track) in up_next.iter().enumerate() {
            let _ = write!(out, "\n  {:>2}. {} - {} [{}]", index, track.artist, track.name, track.id);
        }
        out
    }

    pub fn render_status(&self) -> String {
        let sequencer = self.player.sequencer();
        let current = sequencer
            .current_track()
            .map_or_else(|| "-".to_string(), |t| format!("{} [{}]", t.name, t.id));

        let mut out = format!(
            "{:?} | {} | {:.1}s | shuffle {} | repeat {} | history {} | skipped {}",
            sequencer.state(),
            current,
            self.player.elapsed().as_secs_f64(),
            sequencer.is_shuffled(),
            sequencer.is_repeat(),
            sequencer.history().len(),
            sequencer.skipped_count(),
        );
        for notification in self.player.notifier().active() {
            let _ = write!(out, "\n  ! {}", notification.message);
        }
        out
    }
}
