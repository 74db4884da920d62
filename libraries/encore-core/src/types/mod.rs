//! Core domain types for Encore

mod ids;
mod notification;
mod track;

pub use ids::{TrackId, UserId};
pub use notification::{Notification, Severity};
pub use track::Track;
