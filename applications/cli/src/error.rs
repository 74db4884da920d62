/// CLI error types
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid argument for {command}: {reason}")]
    InvalidArgument { command: String, reason: String },
}

pub type Result<T> = std::result::Result<T, CliError>;
