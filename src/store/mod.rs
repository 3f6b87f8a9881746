//! # Chart Store Module
//!
//! Access to the document store holding the weekly rankings and the
//! per-track streaming metadata scraped for them.
//!
//! Two logical lookups are offered:
//!
//! - ranking by date: the ordered `{rank, title, artist, uri?}` list stored
//!   under the publication date of a week
//! - metadata by identifier: track name, artists, album art and genres
//!   stored under a streaming identifier
//!
//! The store authenticates every query with its own session, obtained
//! through an anonymous login. [`ChartStore`] is the seam the
//! [`crate::repository::ChartRepository`] is written against;
//! [`DataApiStore`] implements it over HTTP.

mod data_api;

use async_trait::async_trait;

use crate::{
    error::Result,
    session::Session,
    types::{ChartDate, RankingDocument, TrackInfoDocument},
};

pub use data_api::DataApiStore;

/// Collection holding one ranking document per chart week.
pub const RANKING_COLLECTION: &str = "billboard_rankings";

/// Collection holding one metadata document per streaming identifier.
pub const TRACK_INFO_COLLECTION: &str = "spotify_info";

#[async_trait]
pub trait ChartStore: Send + Sync {
    /// Opens a session for subsequent lookups.
    async fn login(&self) -> Result<Session>;

    /// Ranking document stored under `date`, `None` when the week is absent.
    async fn find_ranking(
        &self,
        session: &Session,
        date: ChartDate,
    ) -> Result<Option<RankingDocument>>;

    /// Metadata document stored under `uri`, `None` when absent.
    async fn find_track_info(
        &self,
        session: &Session,
        uri: &str,
    ) -> Result<Option<TrackInfoDocument>>;
}
