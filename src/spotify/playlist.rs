use async_trait::async_trait;
use tracing::debug;

use crate::{
    error::{ChartError, Result},
    http,
    playlist::PlaylistService,
    session::Session,
    spotify::SpotifyClient,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse, CreatedPlaylist, Image,
    },
};

/// Spotify accepts at most this many URIs per add-tracks call.
pub const MAX_TRACKS_PER_REQUEST: usize = 100;

impl SpotifyClient {
    async fn add_track_chunk(
        &self,
        access_token: &str,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<String> {
        let api_url = format!(
            "{url}/playlists/{playlist_id}/tracks",
            url = self.api_url,
            playlist_id = playlist_id
        );
        let body = AddTrackToPlaylistRequest {
            uris: uris.to_vec(),
        };

        let request = self.http.post(&api_url).bearer_auth(access_token).json(&body);
        let response = http::check_status(http::send(request).await?, "add tracks").await?;
        let json = response.json::<AddTrackToPlaylistResponse>().await?;
        Ok(json.snapshot_id)
    }
}

#[async_trait]
impl PlaylistService for SpotifyClient {
    async fn create_playlist(&self, session: &Session, name: &str) -> Result<CreatedPlaylist> {
        let identity = session.identity()?;
        let api_url = format!(
            "{url}/users/{user_id}/playlists",
            url = self.api_url,
            user_id = identity.user_id
        );
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: "Created by chartlist".to_string(),
            public: true,
            collaborative: false,
        };

        let request = self
            .http
            .post(&api_url)
            .bearer_auth(&identity.access_token)
            .json(&body);
        let response = http::check_status(http::send(request).await?, "create playlist").await?;
        let json = response.json::<CreatePlaylistResponse>().await?;

        match (json.id, json.uri) {
            (Some(id), Some(uri)) if !id.is_empty() => Ok(CreatedPlaylist { id, uri }),
            _ => Err(ChartError::InvalidResponse(
                "created playlist has no id".to_string(),
            )),
        }
    }

    async fn add_tracks(
        &self,
        session: &Session,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<()> {
        let identity = session.identity()?;

        if uris.is_empty() {
            self.add_track_chunk(&identity.access_token, playlist_id, uris)
                .await?;
            return Ok(());
        }

        for chunk in uris.chunks(MAX_TRACKS_PER_REQUEST) {
            let snapshot_id = self
                .add_track_chunk(&identity.access_token, playlist_id, chunk)
                .await?;
            debug!(playlist_id, snapshot_id = %snapshot_id, tracks = chunk.len(), "chunk added");
        }
        Ok(())
    }

    async fn playlist_images(&self, session: &Session, playlist_id: &str) -> Result<Vec<Image>> {
        let identity = session.identity()?;
        let api_url = format!(
            "{url}/playlists/{playlist_id}/images",
            url = self.api_url,
            playlist_id = playlist_id
        );

        let request = self.http.get(&api_url).bearer_auth(&identity.access_token);
        let response = http::check_status(http::send(request).await?, "playlist images").await?;
        Ok(response.json::<Vec<Image>>().await?)
    }
}
