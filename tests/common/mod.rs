//! In-process fakes of the remote services.

#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use chartlist::{
    ChartError, Result,
    playlist::PlaylistService,
    session::Session,
    store::ChartStore,
    types::{
        ArtistInfo, ChartDate, CreatedPlaylist, Image, RankingDocument, RankingItem, TrackAlbum,
        TrackArtist, TrackInfo, TrackInfoDocument,
    },
};
use chrono::NaiveDate;
use tokio::sync::Notify;

pub fn chart_date(y: i32, m: u32, d: u32) -> ChartDate {
    ChartDate::from_publication(NaiveDate::from_ymd_opt(y, m, d).unwrap()).unwrap()
}

pub fn ranking_item(rank: u32, title: &str, artist: &str, uri: Option<&str>) -> RankingItem {
    RankingItem {
        rank: Some(rank),
        title: title.to_string(),
        artist: artist.to_string(),
        uri: uri.map(str::to_string),
    }
}

pub fn track_info(uri: &str, name: &str, artist: &str, genres: &[&str]) -> TrackInfoDocument {
    TrackInfoDocument {
        track_info: TrackInfo {
            uri: Some(uri.to_string()),
            name: Some(name.to_string()),
            artists: vec![TrackArtist {
                name: artist.to_string(),
            }],
            album: Some(TrackAlbum {
                images: vec![
                    Image {
                        url: format!("https://img.example/{}/640", uri),
                        height: Some(640),
                        width: Some(640),
                    },
                    Image {
                        url: format!("https://img.example/{}/64", uri),
                        height: Some(64),
                        width: Some(64),
                    },
                ],
            }),
        },
        artist_info: Some(ArtistInfo {
            genres: genres.iter().map(|g| g.to_string()).collect(),
        }),
    }
}

/// Chart store answering from memory.
pub struct FakeStore {
    pub session: Session,
    pub rankings: HashMap<String, RankingDocument>,
    pub tracks: HashMap<String, TrackInfoDocument>,
    pub failing_tracks: HashSet<String>,
    pub failing_rankings: bool,
    pub lookups: Mutex<Vec<String>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self {
            session: Session::authenticated("anon", "store-token"),
            rankings: HashMap::new(),
            tracks: HashMap::new(),
            failing_tracks: HashSet::new(),
            failing_rankings: false,
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn with_ranking(mut self, date: ChartDate, items: Vec<RankingItem>) -> Self {
        self.rankings
            .insert(date.key(), RankingDocument { ranking: items });
        self
    }

    pub fn with_track(mut self, doc: TrackInfoDocument) -> Self {
        let uri = doc.track_info.uri.clone().unwrap();
        self.tracks.insert(uri, doc);
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChartStore for FakeStore {
    async fn login(&self) -> Result<Session> {
        Ok(self.session.clone())
    }

    async fn find_ranking(
        &self,
        session: &Session,
        date: ChartDate,
    ) -> Result<Option<RankingDocument>> {
        session.identity()?;
        self.lookups.lock().unwrap().push(format!("ranking:{}", date));
        if self.failing_rankings {
            return Err(ChartError::NetworkFailure("connection reset".to_string()));
        }
        Ok(self.rankings.get(&date.key()).cloned())
    }

    async fn find_track_info(
        &self,
        session: &Session,
        uri: &str,
    ) -> Result<Option<TrackInfoDocument>> {
        session.identity()?;
        self.lookups.lock().unwrap().push(format!("track:{}", uri));
        if self.failing_tracks.contains(uri) {
            return Err(ChartError::NetworkFailure("timeout".to_string()));
        }
        Ok(self.tracks.get(uri).cloned())
    }
}

/// Playlist service recording every call.
#[derive(Default)]
pub struct FakePlaylists {
    pub create_error: Option<ChartError>,
    pub add_error: Option<ChartError>,
    pub images_error: Option<ChartError>,
    pub images: Vec<Image>,
    /// When set, playlist creation waits for a notification.
    pub gate: Option<Arc<Notify>>,
    pub calls: Mutex<Vec<String>>,
    pub added: Mutex<Vec<Vec<String>>>,
}

impl FakePlaylists {
    pub fn new() -> Self {
        Self {
            images: vec![Image {
                url: "https://mosaic.example/cover.jpg".to_string(),
                height: Some(640),
                width: Some(640),
            }],
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn added(&self) -> Vec<Vec<String>> {
        self.added.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlaylistService for FakePlaylists {
    async fn create_playlist(&self, session: &Session, name: &str) -> Result<CreatedPlaylist> {
        self.calls.lock().unwrap().push(format!("create:{}", name));
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let identity = session.identity()?;
        if let Some(e) = &self.create_error {
            return Err(e.clone());
        }

        Ok(CreatedPlaylist {
            id: format!("pl-{}", identity.user_id),
            uri: format!("spotify:playlist:pl-{}", identity.user_id),
        })
    }

    async fn add_tracks(
        &self,
        session: &Session,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<()> {
        self.calls.lock().unwrap().push(format!("add:{}", playlist_id));
        session.identity()?;
        if let Some(e) = &self.add_error {
            return Err(e.clone());
        }

        self.added.lock().unwrap().push(uris.to_vec());
        Ok(())
    }

    async fn playlist_images(&self, session: &Session, playlist_id: &str) -> Result<Vec<Image>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("images:{}", playlist_id));
        session.identity()?;
        if let Some(e) = &self.images_error {
            return Err(e.clone());
        }

        Ok(self.images.clone())
    }
}
