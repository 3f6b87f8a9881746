//! Configuration management for chartlist.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. Public endpoints have defaults so the
//! chart can be browsed without any configuration; saving a playlist needs
//! a Spotify access token.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use dotenv;
use std::{env, path::PathBuf};

const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_CHART_STORE_APP_ID: &str = "playlist-app-ectuj";
const DEFAULT_CHART_STORE_AUTH_URL: &str = "https://realm.mongodb.com/api/client/v2.0";
const DEFAULT_CHART_STORE_DATA_SOURCE: &str = "mongodb-atlas";
const DEFAULT_CHART_STORE_DATABASE: &str = "data";
const DEFAULT_PLAYLIST_TITLE: &str = "Billboard Top 50";

/// Directory holding the `.env` file and the token cache.
///
/// - Linux: `~/.local/share/chartlist`
/// - macOS: `~/Library/Application Support/chartlist`
/// - Windows: `%LOCALAPPDATA%/chartlist`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("chartlist");
    path
}

/// Loads environment variables from `<data dir>/.env`.
///
/// Creates the data directory if needed. A missing `.env` file is fine,
/// variables may come from the process environment alone.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let dir = data_dir();
    async_fs::create_dir_all(&dir)
        .await
        .map_err(|e| e.to_string())?;

    let path = dir.join(".env");
    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Spotify Web API base URL (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    var_or("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)
}

/// Access token handed over by an external authorization flow
/// (`SPOTIFY_ACCESS_TOKEN`). Takes precedence over the token cache.
pub fn spotify_access_token() -> Option<String> {
    env::var("SPOTIFY_ACCESS_TOKEN")
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Title prefix of saved playlists (`CHART_PLAYLIST_TITLE`).
pub fn playlist_title() -> String {
    var_or("CHART_PLAYLIST_TITLE", DEFAULT_PLAYLIST_TITLE)
}

/// Connection settings of the chart document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub app_id: String,
    /// Base of the anonymous login endpoint.
    pub auth_url: String,
    /// Base of the document query endpoints.
    pub data_url: String,
    pub data_source: String,
    pub database: String,
}

impl StoreConfig {
    /// Reads `CHART_STORE_*` variables, falling back to the public app.
    pub fn from_env() -> Self {
        let app_id = var_or("CHART_STORE_APP_ID", DEFAULT_CHART_STORE_APP_ID);
        let default_data_url = format!(
            "https://data.mongodb-api.com/app/{app_id}/endpoint/data/v1",
            app_id = app_id
        );

        Self {
            auth_url: var_or("CHART_STORE_AUTH_URL", DEFAULT_CHART_STORE_AUTH_URL),
            data_url: var_or("CHART_STORE_URL", &default_data_url),
            data_source: var_or("CHART_STORE_DATA_SOURCE", DEFAULT_CHART_STORE_DATA_SOURCE),
            database: var_or("CHART_STORE_DATABASE", DEFAULT_CHART_STORE_DATABASE),
            app_id,
        }
    }

    /// Settings for a store served from a single base URL, as used by
    /// self-hosted deployments and tests.
    pub fn with_base_url(base_url: &str, app_id: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Self {
            app_id: app_id.to_string(),
            auth_url: base_url.to_string(),
            data_url: base_url.to_string(),
            data_source: DEFAULT_CHART_STORE_DATA_SOURCE.to_string(),
            database: DEFAULT_CHART_STORE_DATABASE.to_string(),
        }
    }
}
