//! Line commands understood by the driver

use crate::error::{CliError, Result};
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Next,
    Previous,
    Queue(String),
    Remove(usize),
    Select(String),
    Shuffle,
    Repeat,
    Pause,
    Resume,
    Seek(Duration),
    /// Simulated transport time update
    Tick(Duration),
    /// Simulated end of track
    End,
    /// Simulated decode/network failure
    Error(String),
    /// Simulated autoplay refusal
    Reject,
    Volume(f32),
    Refresh,
    Logout,
    UpNext,
    Status,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "next" | "n" => Command::Next,
            "prev" | "previous" | "p" => Command::Previous,
            "queue" | "q" => Command::Queue(required(name, arg)?.to_string()),
            "remove" | "rm" => Command::Remove(parse_arg(name, arg)?),
            "select" | "play" => Command::Select(required(name, arg)?.to_string()),
            "shuffle" => Command::Shuffle,
            "repeat" => Command::Repeat,
            "pause" => Command::Pause,
            "resume" => Command::Resume,
            "seek" => Command::Seek(parse_secs(name, arg)?),
            "tick" => Command::Tick(parse_secs(name, arg)?),
            "end" => Command::End,
            "error" => Command::Error(if arg.is_empty() {
                "simulated failure".to_string()
            } else {
                arg.to_string()
            }),
            "reject" => Command::Reject,
            "volume" | "vol" => Command::Volume(parse_arg(name, arg)?),
            "refresh" => Command::Refresh,
            "logout" => Command::Logout,
            "upnext" | "ls" => Command::UpNext,
            "status" | "st" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CliError::UnknownCommand(other.to_string())),
        };

        Ok(command)
    }
}

pub const HELP: &str = "\
commands:
  next | prev                 navigate
  queue <id> | select <id>    queue a library track / play it now
  remove <index>              remove entry from up next
  shuffle | repeat            toggle modes
  pause | resume | seek <s>   transport controls
  volume <0..1>               set volume
  tick <s> | end | error [c] | reject
                              simulate transport events
  refresh | logout            library / session
  upnext | status | help | quit";

fn required<'a>(command: &str, arg: &'a str) -> Result<&'a str> {
    if arg.is_empty() {
        Err(CliError::InvalidArgument {
            command: command.to_string(),
            reason: "missing argument".to_string(),
        })
    } else {
        Ok(arg)
    }
}

fn parse_arg<T: FromStr>(command: &str, arg: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    required(command, arg)?
        .parse()
        .map_err(|e: T::Err| CliError::InvalidArgument {
            command: command.to_string(),
            reason: e.to_string(),
        })
}

fn parse_secs(command: &str, arg: &str) -> Result<Duration> {
    let secs: f64 = parse_arg(command, arg)?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(CliError::InvalidArgument {
            command: command.to_string(),
            reason: format!("{} is not a valid number of seconds", secs),
        });
    }
    Ok(Duration::from_secs_f64(secs))
}
