//! Weekly chart lookup on top of a [`ChartStore`].

use futures_util::future::join_all;
use tracing::{debug, warn};

use crate::{
    error::{ChartError, Result},
    session::Session,
    store::ChartStore,
    types::{Chart, ChartDate, ChartEntry, RankingItem},
};

/// Result of one chart fetch.
///
/// Carries the date it was issued for so a consumer can tell whether the
/// response still matches its selection. On failure `chart` is empty and
/// `error` says why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartFetch {
    pub chart: Chart,
    pub error: Option<ChartError>,
}

impl ChartFetch {
    pub fn loaded(chart: Chart) -> Self {
        Self { chart, error: None }
    }

    pub fn failed(date: ChartDate, error: ChartError) -> Self {
        Self {
            chart: Chart::empty(date),
            error: Some(error),
        }
    }

    pub fn date(&self) -> ChartDate {
        self.chart.date()
    }
}

pub struct ChartRepository<S> {
    store: S,
}

impl<S: ChartStore> ChartRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetches the chart published on `date`.
    ///
    /// Never fails: a missing ranking, a rejected login or a transport error
    /// produce an empty chart together with the error, which is also logged.
    pub async fn fetch_chart(&self, date: ChartDate) -> ChartFetch {
        match self.try_fetch_chart(date).await {
            Ok(chart) => {
                debug!(%date, entries = chart.len(), "chart fetched");
                ChartFetch::loaded(chart)
            }
            Err(e) => {
                warn!(%date, error = %e, "failed to fetch chart");
                ChartFetch::failed(date, e)
            }
        }
    }

    async fn try_fetch_chart(&self, date: ChartDate) -> Result<Chart> {
        let session = self.store.login().await?;
        session.identity()?;

        let ranking = self
            .store
            .find_ranking(&session, date)
            .await?
            .ok_or_else(|| ChartError::LookupNotFound(format!("ranking of {}", date)))?;

        let lookups = ranking
            .ranking
            .into_iter()
            .enumerate()
            .map(|(position, item)| self.resolve_entry(&session, position, item));
        let entries = join_all(lookups).await;

        Ok(Chart::new(date, entries))
    }

    /// Resolves metadata of one ranked item, degrading to an unavailable
    /// entry rather than dropping the rank slot.
    async fn resolve_entry(
        &self,
        session: &Session,
        position: usize,
        item: RankingItem,
    ) -> ChartEntry {
        let rank = item.rank.unwrap_or(position as u32 + 1);

        let uri = match item.uri.as_deref().filter(|uri| !uri.is_empty()) {
            Some(uri) => uri.to_string(),
            None => return ChartEntry::unavailable(rank, item.title, item.artist),
        };

        match self.store.find_track_info(session, &uri).await {
            Ok(Some(doc)) => ChartEntry::from_track_info(rank, item, doc),
            Ok(None) => {
                debug!(rank, %uri, "no track info");
                ChartEntry::unavailable(rank, item.title, item.artist)
            }
            Err(e) => {
                warn!(rank, %uri, error = %e, "failed to get track info");
                ChartEntry::unavailable(rank, item.title, item.artist)
            }
        }
    }
}
