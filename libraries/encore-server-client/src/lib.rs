//! Encore Server Client
//!
//! `LibrarySync` implementations for Encore.
//!
//! - [`LibraryClient`]: fetches a user's library from an Encore server over HTTP
//! - [`FileLibrary`]: reads a library from a JSON file (offline use)
//!
//! # Example
//!
//! ```ignore
//! use encore_core::{LibrarySync, UserId};
//! use encore_server_client::{LibraryClient, ServerConfig};
//!
//! let client = LibraryClient::new(ServerConfig::new("https://music.example.com"))?;
//! let tracks = client.fetch(&UserId::new("alice")).await?;
//! println!("Found {} tracks", tracks.len());
//! ```

mod client;
mod error;
mod file;
mod types;

pub use client::LibraryClient;
pub use error::{Result, ServerClientError};
pub use file::FileLibrary;
pub use types::ServerConfig;
