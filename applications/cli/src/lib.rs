//! Encore CLI - line-oriented driver for the playback sequencer
//!
//! Reads one command per line and applies it to a [`Player`] bound to a
//! simulated console transport.
//!
//! [`Player`]: encore_playback::Player

pub mod command;
pub mod config;
pub mod console;
pub mod error;
pub mod session;

pub use command::Command;
pub use config::CliConfig;
pub use console::{ConsoleSink, ConsoleTransport};
pub use error::{CliError, Result};
pub use session::{Flow, Session};
