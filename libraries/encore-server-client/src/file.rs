//! File-backed library.

use crate::error::{Result, ServerClientError};
use async_trait::async_trait;
use encore_core::{LibrarySync, Track, UserId};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads a library from a JSON array of tracks on disk.
///
/// The same file serves every user; it is re-read on each fetch so edits
/// show up on the next refresh.
#[derive(Debug, Clone)]
pub struct FileLibrary {
    path: PathBuf,
}

impl FileLibrary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the library file.
    pub async fn load(&self) -> Result<Vec<Track>> {
        let bytes = tokio::fs::read(&self.path).await?;
        let tracks: Vec<Track> = serde_json::from_slice(&bytes).map_err(|e| {
            ServerClientError::ParseError(format!("{}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), tracks = tracks.len(), "Loaded library file");
        Ok(tracks)
    }
}

#[async_trait]
impl LibrarySync for FileLibrary {
    async fn fetch(&self, _user: &UserId) -> encore_core::Result<Vec<Track>> {
        Ok(self.load().await?)
    }
}
