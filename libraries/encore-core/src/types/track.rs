/// Track domain type
use super::{TrackId, UserId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A playable track
///
/// Tracks are immutable once created. A library refresh swaps whole
/// collections; nothing mutates a track in place. The builder-style
/// `with_*` methods consume the value and return a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique, stable identifier
    pub id: TrackId,

    /// Display name
    pub name: String,

    /// Artist name
    pub artist: String,

    /// Playable source reference (URL or storage key)
    pub source: String,

    /// Duration, zero until metadata is known
    #[serde(rename = "duration_secs", with = "duration_secs", default)]
    pub duration: Duration,

    /// Owning user
    pub owner: UserId,

    /// Optional cover-art reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_art: Option<String>,
}

impl Track {
    /// Create a new track with unknown duration and no cover art
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        artist: impl Into<String>,
        source: impl Into<String>,
        owner: UserId,
    ) -> Self {
        Self {
            id: TrackId::new(id),
            name: name.into(),
            artist: artist.into(),
            source: source.into(),
            duration: Duration::ZERO,
            owner,
            cover_art: None,
        }
    }

    /// Return this track with a known duration
    #[must_use]
    pub fn with_duration(self, duration: Duration) -> Self {
        Self { duration, ..self }
    }

    /// Return this track with a cover-art reference
    #[must_use]
    pub fn with_cover_art(self, cover_art: impl Into<String>) -> Self {
        Self {
            cover_art: Some(cover_art.into()),
            ..self
        }
    }

    /// Whether the duration has been determined yet
    pub fn has_known_duration(&self) -> bool {
        !self.duration.is_zero()
    }
}

/// Serialize `Duration` as fractional seconds
mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(duration.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        if !secs.is_finite() || secs < 0.0 {
            return Ok(Duration::ZERO);
        }
        Ok(Duration::from_secs_f64(secs))
    }
}
