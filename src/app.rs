//! # App View
//!
//! Combines the chart repository, the application state and the playlist
//! orchestrator into the operations the presentation layer calls:
//!
//! - [`AppView::start`] loads the chart of the initially selected week
//! - [`AppView::update_date`] snaps a picked date, selects its week and
//!   loads its chart
//! - [`AppView::create_tracks_playlist`] saves the selected week
//!
//! Chart responses are committed through [`Action::ChartFetched`], which
//! discards a response whose week is no longer selected. Overlapping
//! date changes therefore settle on the most recent selection regardless of
//! the order in which their fetches complete.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;
use tracing::info;

use crate::{
    calendar,
    playlist::{PlaylistOrchestrator, PlaylistService, SaveOutcome},
    repository::ChartRepository,
    session::Session,
    state::{Action, AppState, Store},
    store::ChartStore,
    types::ChartDate,
};

pub struct AppView<S, P> {
    repository: ChartRepository<S>,
    playlists: P,
    store: Store,
    orchestrator: Mutex<PlaylistOrchestrator>,
    title: String,
}

impl<S, P> AppView<S, P>
where
    S: ChartStore,
    P: PlaylistService,
{
    pub fn new(
        repository: ChartRepository<S>,
        playlists: P,
        date: ChartDate,
        title: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            playlists,
            store: Store::new(AppState::new(date)),
            orchestrator: Mutex::new(PlaylistOrchestrator::new()),
            title: title.into(),
        }
    }

    pub async fn state(&self) -> Arc<AppState> {
        self.store.snapshot().await
    }

    pub fn playlists(&self) -> &P {
        &self.playlists
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Loads the chart of the currently selected week.
    pub async fn start(&self) -> Arc<AppState> {
        let date = self.store.snapshot().await.date();
        self.load_chart(date).await
    }

    /// Selects the week of `picked` and loads its chart.
    pub async fn update_date(&self, picked: NaiveDate, today: NaiveDate) -> Arc<AppState> {
        let date = calendar::snap_to_publication_date(picked, today);
        info!(%picked, %date, "selecting chart week");

        self.store.dispatch(Action::SetDate(date)).await;
        self.load_chart(date).await
    }

    async fn load_chart(&self, date: ChartDate) -> Arc<AppState> {
        let fetch = self.repository.fetch_chart(date).await;
        self.store.dispatch(Action::ChartFetched(fetch)).await
    }

    /// Saves the selected week as a playlist owned by `session`'s user.
    ///
    /// Only one save runs at a time; a concurrent call returns
    /// [`SaveOutcome::Busy`] without touching the remote service.
    pub async fn create_tracks_playlist(&self, session: &Session) -> SaveOutcome {
        let state = self.store.snapshot().await;
        let request = state.playlist_request(&self.title);
        if request.uris.is_empty() {
            return SaveOutcome::EmptySelection;
        }

        if !self.store.try_begin_save().await {
            return SaveOutcome::Busy;
        }

        let outcome = {
            let mut orchestrator = self.orchestrator.lock().await;
            orchestrator.run(&self.playlists, session, request).await
        };

        self.store.dispatch(Action::SaveFinished).await;
        outcome
    }
}
