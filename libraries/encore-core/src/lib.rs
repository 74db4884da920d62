//! Encore Core
//!
//! Platform-agnostic domain types, collaborator traits and error handling
//! shared by every Encore crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `TrackId`, `UserId`, `Notification`
//! - **Collaborator Traits**: `LibrarySync`, `NotificationSink`
//! - **Error Handling**: Unified `EncoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use encore_core::types::{Track, UserId};
//! use std::time::Duration;
//!
//! let owner = UserId::new("alice");
//! let track = Track::new("t1", "Intro", "The Band", "https://cdn.example.com/t1.mp3", owner)
//!     .with_duration(Duration::from_secs(212));
//!
//! assert_eq!(track.id.as_str(), "t1");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{EncoreError, Result};
pub use traits::{LibrarySync, NotificationSink, NullSink};
pub use types::{Notification, Severity, Track, TrackId, UserId};
