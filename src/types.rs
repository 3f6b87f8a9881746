use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tabled::Tabled;

use crate::calendar::PUBLICATION_WEEKDAY;

/// Maximum number of ranked positions kept for one week.
pub const CHART_SIZE: usize = 50;

/// Canonical chart-publication date of one weekly chart.
///
/// Always falls on [`PUBLICATION_WEEKDAY`]; the ranking documents of the
/// chart store are keyed by it. Obtain one through
/// [`crate::calendar::snap_to_publication_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChartDate(NaiveDate);

impl ChartDate {
    /// Wraps `date` if it already falls on the publication weekday.
    pub fn from_publication(date: NaiveDate) -> Option<Self> {
        (date.weekday() == PUBLICATION_WEEKDAY).then_some(Self(date))
    }

    pub(crate) fn new_unchecked(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Storage key of the ranking document (`YYYY-MM-DD`).
    pub fn key(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for ChartDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// One ranked position of a weekly chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartEntry {
    pub rank: u32,
    pub title: String,
    pub artist: String,
    /// Streaming identifier, `None` when the track is unavailable.
    pub uri: Option<String>,
    /// Album art references, largest first.
    pub images: Vec<String>,
    pub genres: Vec<String>,
}

impl ChartEntry {
    /// Entry for a ranked track that could not be resolved on the
    /// streaming service. Keeps its slot in the listing.
    pub fn unavailable(rank: u32, title: String, artist: String) -> Self {
        Self {
            rank,
            title,
            artist,
            uri: None,
            images: Vec::new(),
            genres: Vec::new(),
        }
    }

    pub fn from_track_info(rank: u32, item: RankingItem, doc: TrackInfoDocument) -> Self {
        let info = doc.track_info;
        let uri = info.uri.or(item.uri).filter(|uri| !uri.is_empty());

        Self {
            rank,
            title: info.name.unwrap_or(item.title),
            artist: info
                .artists
                .into_iter()
                .next()
                .map(|a| a.name)
                .unwrap_or(item.artist),
            uri,
            images: info
                .album
                .map(|album| album.images.into_iter().map(|i| i.url).collect())
                .unwrap_or_default(),
            genres: doc.artist_info.map(|a| a.genres).unwrap_or_default(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.uri.is_some()
    }

    /// First available album art reference.
    pub fn cover(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// At most three genre tags, comma separated.
    pub fn genre_summary(&self) -> String {
        self.genres
            .iter()
            .take(3)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Ordered entries of one week, in the rank order of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    date: ChartDate,
    entries: Vec<ChartEntry>,
}

impl Chart {
    pub fn new(date: ChartDate, mut entries: Vec<ChartEntry>) -> Self {
        entries.truncate(CHART_SIZE);
        Self { date, entries }
    }

    pub fn empty(date: ChartDate) -> Self {
        Self {
            date,
            entries: Vec::new(),
        }
    }

    pub fn date(&self) -> ChartDate {
        self.date
    }

    pub fn entries(&self) -> &[ChartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Streaming identifiers in rank order, unavailable tracks skipped.
    pub fn track_uris(&self) -> Vec<String> {
        self.entries.iter().filter_map(|e| e.uri.clone()).collect()
    }

    /// First album art reference of every entry, in rank order.
    pub fn cover_images(&self) -> Vec<Option<String>> {
        self.entries
            .iter()
            .map(|e| e.cover().map(str::to_string))
            .collect()
    }
}

/// Payload of one save operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRequest {
    pub name: String,
    pub uris: Vec<String>,
}

/// Playlist as acknowledged by the creation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPlaylist {
    pub id: String,
    pub uri: String,
}

/// Outcome of a completed save, handed to the notification surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistResult {
    pub id: String,
    pub uri: String,
    pub cover: Option<String>,
}

#[derive(Tabled)]
pub struct ChartTableRow {
    #[tabled(rename = "#")]
    pub rank: u32,
    pub artist: String,
    pub title: String,
    pub genres: String,
    pub spotify: String,
}

impl From<&ChartEntry> for ChartTableRow {
    fn from(entry: &ChartEntry) -> Self {
        Self {
            rank: entry.rank,
            artist: entry.artist.clone(),
            title: entry.title.clone(),
            genres: entry.genre_summary(),
            spotify: if entry.is_available() { "yes" } else { "-" }.to_string(),
        }
    }
}

// chart store documents

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingDocument {
    #[serde(default)]
    pub ranking: Vec<RankingItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingItem {
    #[serde(default)]
    pub rank: Option<u32>,
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackInfoDocument {
    pub track_info: TrackInfo,
    #[serde(default)]
    pub artist_info: Option<ArtistInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackInfo {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    #[serde(default)]
    pub album: Option<TrackAlbum>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistInfo {
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindOneRequest<'a> {
    pub data_source: &'a str,
    pub database: &'a str,
    pub collection: &'a str,
    pub filter: Value,
    pub projection: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FindOneResponse<T> {
    pub document: Option<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnonymousLoginResponse {
    pub access_token: String,
    pub user_id: String,
}

// spotify web api

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub obtained_at: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}
