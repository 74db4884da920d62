//! Client configuration types.

use serde::{Deserialize, Serialize};

/// Connection settings for an Encore server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL, e.g. `https://music.example.com`
    pub url: String,

    /// Bearer token, if the server requires authentication
    #[serde(default)]
    pub access_token: Option<String>,
}

impl ServerConfig {
    /// Create a config with no token.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: None,
        }
    }

    /// Create a config with a bearer token.
    pub fn with_token(url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: Some(access_token.into()),
        }
    }
}
