//! Saving a chart week as a playlist.
//!
//! A save runs through an explicit state machine:
//!
//! ```text
//! Idle -> Creating -> Populating -> FetchingCover -> Done
//!            \            \
//!             `-> Failed   `-> Failed
//! ```
//!
//! Every step awaits the previous one. A failed cover fetch still ends in
//! `Done`, only without a cover. Terminal states are never retried; the next
//! [`PlaylistOrchestrator::begin`] starts over.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{
    error::{ChartError, Result},
    session::Session,
    types::{CreatedPlaylist, Image, PlaylistRequest, PlaylistResult},
};

/// Remote playlist endpoints a save needs.
#[async_trait]
pub trait PlaylistService: Send + Sync {
    async fn create_playlist(&self, session: &Session, name: &str) -> Result<CreatedPlaylist>;

    /// Appends `uris` to the playlist. An empty list is a valid no-op.
    async fn add_tracks(
        &self,
        session: &Session,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<()>;

    async fn playlist_images(&self, session: &Session, playlist_id: &str) -> Result<Vec<Image>>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SaveState {
    #[default]
    Idle,
    Creating(PlaylistRequest),
    Populating {
        request: PlaylistRequest,
        playlist: CreatedPlaylist,
    },
    FetchingCover(CreatedPlaylist),
    Done(PlaylistResult),
    Failed(ChartError),
}

impl SaveState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SaveState::Done(_) | SaveState::Failed(_))
    }

    pub fn is_in_flight(&self) -> bool {
        !self.is_terminal() && *self != SaveState::Idle
    }
}

/// Answer of [`PlaylistOrchestrator::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Started,
    /// Another save is still running.
    Busy,
    /// Nothing to save, the orchestrator stays idle.
    EmptySelection,
}

/// What the notification surface gets once a save is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(PlaylistResult),
    Failed(ChartError),
    EmptySelection,
    Busy,
}

#[derive(Debug, Default)]
pub struct PlaylistOrchestrator {
    state: SaveState,
}

impl PlaylistOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Orchestrator positioned at an arbitrary step.
    pub fn from_state(state: SaveState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &SaveState {
        &self.state
    }

    /// Admits a new save of `request`.
    pub fn begin(&mut self, request: PlaylistRequest) -> Admission {
        if self.state.is_in_flight() {
            return Admission::Busy;
        }

        if request.uris.is_empty() {
            self.state = SaveState::Idle;
            return Admission::EmptySelection;
        }

        self.state = SaveState::Creating(request);
        Admission::Started
    }

    /// Performs the remote call of the current step and moves to the next
    /// state. Idle and terminal states are left untouched.
    pub async fn advance(&mut self, service: &dyn PlaylistService, session: &Session) -> &SaveState {
        let current = std::mem::take(&mut self.state);

        self.state = match current {
            SaveState::Creating(request) => {
                match service.create_playlist(session, &request.name).await {
                    Ok(playlist) => {
                        debug!(playlist_id = %playlist.id, "playlist created");
                        SaveState::Populating { request, playlist }
                    }
                    Err(e) => {
                        warn!(error = %e, name = %request.name, "failed to create playlist");
                        SaveState::Failed(e)
                    }
                }
            }
            SaveState::Populating { request, playlist } => {
                match service.add_tracks(session, &playlist.id, &request.uris).await {
                    Ok(()) => {
                        debug!(playlist_id = %playlist.id, tracks = request.uris.len(), "tracks added");
                        SaveState::FetchingCover(playlist)
                    }
                    Err(e) => {
                        warn!(error = %e, playlist_id = %playlist.id, "failed to add tracks");
                        SaveState::Failed(e)
                    }
                }
            }
            SaveState::FetchingCover(playlist) => {
                let cover = match service.playlist_images(session, &playlist.id).await {
                    Ok(images) => images.into_iter().next().map(|image| image.url),
                    Err(e) => {
                        warn!(error = %e, playlist_id = %playlist.id, "failed to fetch playlist cover");
                        None
                    }
                };

                SaveState::Done(PlaylistResult {
                    id: playlist.id,
                    uri: playlist.uri,
                    cover,
                })
            }
            other => other,
        };

        &self.state
    }

    /// Runs a whole save of `request` and reports its outcome.
    pub async fn run(
        &mut self,
        service: &dyn PlaylistService,
        session: &Session,
        request: PlaylistRequest,
    ) -> SaveOutcome {
        match self.begin(request) {
            Admission::Started => {}
            Admission::Busy => return SaveOutcome::Busy,
            Admission::EmptySelection => return SaveOutcome::EmptySelection,
        }

        while self.state.is_in_flight() {
            self.advance(service, session).await;
        }

        match &self.state {
            SaveState::Done(result) => SaveOutcome::Created(result.clone()),
            SaveState::Failed(e) => SaveOutcome::Failed(e.clone()),
            _ => SaveOutcome::Failed(ChartError::InvalidResponse(
                "save stopped before completion".to_string(),
            )),
        }
    }
}
