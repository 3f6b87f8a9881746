//! # Spotify Integration Module
//!
//! Client for the parts of the Spotify Web API chartlist needs: resolving
//! the user behind an access token and saving a chart week as a playlist.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, AppView)
//!          ↓
//! PlaylistOrchestrator (create → populate → cover)
//!          ↓
//! SpotifyClient (PlaylistService)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `GET /me` - profile of the token owner
//! - `POST /users/{user_id}/playlists` - create a playlist
//! - `POST /playlists/{playlist_id}/tracks` - add tracks, at most 100 per call
//! - `GET /playlists/{playlist_id}/images` - cover images of a playlist
//!
//! Access tokens are obtained outside of chartlist and passed in through a
//! [`crate::session::Session`]. Rate limit responses are waited out once
//! when Spotify asks for a reasonable delay, see [`crate::http::send`].

mod playlist;
mod user;

use reqwest::Client;

use crate::{config, error::Result, http};

pub use playlist::MAX_TRACKS_PER_REQUEST;

pub struct SpotifyClient {
    http: Client,
    api_url: String,
}

impl SpotifyClient {
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: http::build_client()?,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Client for the configured `SPOTIFY_API_URL`.
    pub fn from_env() -> Result<Self> {
        Self::new(config::spotify_apiurl())
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}
