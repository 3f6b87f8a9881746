use std::path::PathBuf;

use chrono::Utc;
use tracing::warn;

use crate::{
    config,
    error::Result,
    session::Session,
    spotify::SpotifyClient,
    types::Token,
};

/// Seconds before expiry at which a cached token is no longer used.
const EXPIRY_MARGIN_SECS: u64 = 240;

/// Provides the Spotify access token obtained by an external
/// authorization flow.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    /// Token from `SPOTIFY_ACCESS_TOKEN`, else from the token cache file.
    pub async fn load() -> std::result::Result<Self, String> {
        if let Some(access_token) = config::spotify_access_token() {
            return Ok(Self::new(Token {
                access_token,
                refresh_token: None,
                scope: None,
                expires_in: None,
                obtained_at: None,
            }));
        }

        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| format!("{}: {}", path.display(), e))?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token })
    }

    /// Whether the token is past its lifetime at `now` (unix seconds).
    /// Tokens without lifetime information never expire.
    pub fn is_expired_at(&self, now: u64) -> bool {
        match (self.token.obtained_at, self.token.expires_in) {
            (Some(obtained_at), Some(expires_in)) => {
                now + EXPIRY_MARGIN_SECS >= obtained_at + expires_in
            }
            _ => false,
        }
    }

    fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp() as u64)
    }

    /// Session for the token owner. An expired token gives
    /// [`Session::NotAuthenticated`] without contacting Spotify.
    pub async fn session(&self, client: &SpotifyClient) -> Result<Session> {
        if self.is_expired() {
            warn!("cached Spotify token has expired");
            return Ok(Session::NotAuthenticated);
        }

        client.session(&self.token.access_token).await
    }

    pub fn token_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("cache/token.json");
        path
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
