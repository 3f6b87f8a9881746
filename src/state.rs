//! Application state and the actions that change it.
//!
//! State is an immutable value. Every dispatched [`Action`] produces a new
//! [`AppState`] which the [`Store`] swaps in as a whole, so a reader holding a
//! snapshot never observes a date paired with another week's chart.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::{
    calendar,
    error::ChartError,
    repository::ChartFetch,
    types::{Chart, ChartDate, PlaylistRequest},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Selects another chart week.
    SetDate(ChartDate),
    /// Commits a fetched chart if it still matches the selected week.
    ChartFetched(ChartFetch),
    SaveStarted,
    SaveFinished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    date: ChartDate,
    chart: Arc<Chart>,
    last_error: Option<ChartError>,
    saving: bool,
}

impl AppState {
    pub fn new(date: ChartDate) -> Self {
        Self {
            date,
            chart: Arc::new(Chart::empty(date)),
            last_error: None,
            saving: false,
        }
    }

    pub fn date(&self) -> ChartDate {
        self.date
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    /// Error of the last fetch committed for the selected week.
    pub fn last_error(&self) -> Option<&ChartError> {
        self.last_error.as_ref()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Streaming identifiers to save, in rank order.
    pub fn track_uris(&self) -> Vec<String> {
        self.chart.track_uris()
    }

    /// First cover of every listed entry, in rank order.
    pub fn cover_images(&self) -> Vec<Option<String>> {
        self.chart.cover_images()
    }

    pub fn playlist_request(&self, title: &str) -> PlaylistRequest {
        PlaylistRequest {
            name: calendar::playlist_name(title, self.date),
            uris: self.track_uris(),
        }
    }

    /// State after `action`. `self` is left untouched.
    pub fn reduce(&self, action: Action) -> AppState {
        match action {
            Action::SetDate(date) if date == self.date => self.clone(),
            Action::SetDate(date) => AppState {
                date,
                chart: Arc::new(Chart::empty(date)),
                last_error: None,
                saving: self.saving,
            },
            Action::ChartFetched(fetch) if fetch.date() != self.date => {
                debug!(fetched = %fetch.date(), selected = %self.date, "discarding stale chart");
                self.clone()
            }
            Action::ChartFetched(fetch) => AppState {
                date: self.date,
                chart: Arc::new(fetch.chart),
                last_error: fetch.error,
                saving: self.saving,
            },
            Action::SaveStarted => AppState {
                saving: true,
                ..self.clone()
            },
            Action::SaveFinished => AppState {
                saving: false,
                ..self.clone()
            },
        }
    }
}

/// Holder of the current state snapshot.
pub struct Store {
    state: Mutex<Arc<AppState>>,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state: Mutex::new(Arc::new(state)),
        }
    }

    pub async fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&*self.state.lock().await)
    }

    /// Applies `action` and returns the resulting snapshot.
    pub async fn dispatch(&self, action: Action) -> Arc<AppState> {
        let mut current = self.state.lock().await;
        let next = Arc::new(current.reduce(action));
        *current = Arc::clone(&next);
        next
    }

    /// Marks a save as started unless one already is.
    pub async fn try_begin_save(&self) -> bool {
        let mut current = self.state.lock().await;
        if current.is_saving() {
            return false;
        }

        *current = Arc::new(current.reduce(Action::SaveStarted));
        true
    }
}
