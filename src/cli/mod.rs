//! # CLI Module
//!
//! Command implementations of the `chartlist` binary. This layer is the
//! presentation and notification surface: it resolves the user's date input
//! within the browsable range, drives the [`crate::app::AppView`] and
//! reports outcomes, including failures the library only returns.
//!
//! ## Commands
//!
//! - [`chart`] - show the Top 50 of a week
//! - [`playlist`] - save the Top 50 of a week as a Spotify playlist
//! - [`info`] - show how a date maps onto a chart week, offline
//!
//! ## Usage Patterns
//!
//! ```bash
//! chartlist chart                          # latest published week
//! chartlist chart --date 1994-07-20        # week containing that date
//! chartlist playlist --date 2021-03-10     # save that week
//! chartlist info --date 2021-03-15
//! ```

mod chart;
mod info;
mod playlist;

use std::time::Duration;

use chrono::{NaiveDate, Utc};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    app::AppView, calendar, config, error, error::Result, repository::ChartRepository,
    spotify::SpotifyClient, store::DataApiStore,
};

pub use chart::chart;
pub use info::info;
pub use playlist::playlist;

type ChartView = AppView<DataApiStore, SpotifyClient>;

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Date picked by the user, within the browsable range. Exits on bad input.
fn picked_date(date: Option<String>, today: NaiveDate) -> NaiveDate {
    match calendar::pick_date(date.as_deref(), today) {
        Ok(date) => date,
        Err(e) => error!("{}", e),
    }
}

fn build_view(today: NaiveDate) -> Result<ChartView> {
    let repository = ChartRepository::new(DataApiStore::from_env()?);
    let spotify = SpotifyClient::from_env()?;
    let initial = calendar::snap_to_publication_date(today, today);

    Ok(AppView::new(
        repository,
        spotify,
        initial,
        config::playlist_title(),
    ))
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

/// Loads the week of `date`, reporting an unavailable chart. Returns
/// `false` when there is nothing to show.
async fn load_week(view: &ChartView, date: NaiveDate, today: NaiveDate) -> bool {
    let pb = spinner("Fetching chart...");
    let state = view.update_date(date, today).await;
    pb.finish_and_clear();

    let week = calendar::to_display_date(state.date());
    if let Some(e) = state.last_error() {
        crate::warning!("Chart for the week of {} is unavailable: {}", week, e);
    }

    if state.chart().is_empty() {
        crate::info!("No chart entries for the week of {}", week);
        return false;
    }

    true
}
