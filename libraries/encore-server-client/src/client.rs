//! HTTP library client.

use crate::error::{Result, ServerClientError};
use crate::types::ServerConfig;
use async_trait::async_trait;
use encore_core::{LibrarySync, Track, UserId};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Fetches a user's library from an Encore server.
///
/// `GET {url}/api/users/{user}/tracks` returns the library as an ordered
/// JSON array of tracks; that order is the natural playback order.
#[derive(Debug, Clone)]
pub struct LibraryClient {
    http: Client,
    base_url: String,
    base: Url,
    access_token: Option<String>,
}

impl LibraryClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ServerConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ServerClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ServerClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        let base = Url::parse(&base_url).map_err(|e| ServerClientError::InvalidUrl(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ServerClientError::InvalidUrl(format!("{} cannot be a base URL", base_url)));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Encore/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            base,
            access_token: config.access_token,
        })
    }

    /// Normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the full, ordered library of a user.
    pub async fn get_tracks(&self, user: &UserId) -> Result<Vec<Track>> {
        let url = self.tracks_url(user)?;
        debug!(url = %url, "Fetching library");

        let mut request = self.http.get(url);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let tracks: Vec<Track> = response.json().await.map_err(|e| {
                ServerClientError::ParseError(format!("Failed to parse library response: {}", e))
            })?;

            debug!(tracks = tracks.len(), "Fetched library");
            Ok(tracks)
        } else if status.as_u16() == 401 {
            Err(ServerClientError::AuthRequired)
        } else {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Library fetch rejected");
            Err(ServerClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// `{base}/api/users/{user}/tracks`, with the user id as one encoded segment
    fn tracks_url(&self, user: &UserId) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ServerClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["api", "users", user.as_str(), "tracks"]);
        Ok(url)
    }
}

#[async_trait]
impl LibrarySync for LibraryClient {
    async fn fetch(&self, user: &UserId) -> encore_core::Result<Vec<Track>> {
        Ok(self.get_tracks(user).await?)
    }
}
