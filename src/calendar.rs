//! Calendar arithmetic mapping picked dates onto chart weeks.
//!
//! Weeks run Sunday to Saturday. A chart is stored under the Wednesday of its
//! week and shown to users under the Saturday that ends it.

use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};

use crate::{
    error::{ChartError, Result},
    types::ChartDate,
};

/// Weekday the chart store keys its ranking documents by.
pub const PUBLICATION_WEEKDAY: Weekday = Weekday::Wed;

/// Weekday used when presenting a chart week.
pub const DISPLAY_WEEKDAY: Weekday = Weekday::Sat;

/// Earliest week the chart store holds data for.
pub const FIRST_CHART_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1980, 1, 2) {
    Some(date) => date,
    None => panic!("invalid first chart date"),
};

fn weekday_in_week(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let offset = weekday.num_days_from_sunday() as i64 - date.weekday().num_days_from_sunday() as i64;
    date + Duration::days(offset)
}

/// Maps `date` onto the publication date of its week.
///
/// If the publication day of that week lies after `today`, the previous
/// week's publication date is used instead, so the result is never later
/// than `today`.
pub fn snap_to_publication_date(date: NaiveDate, today: NaiveDate) -> ChartDate {
    let mut snapped = weekday_in_week(date, PUBLICATION_WEEKDAY);
    if snapped > today {
        // dates past the current week land on the latest published chart
        snapped = weekday_in_week(today, PUBLICATION_WEEKDAY);
        if snapped > today {
            snapped -= Duration::days(7);
        }
    }

    ChartDate::new_unchecked(snapped)
}

/// [`snap_to_publication_date`] against the current UTC date.
pub fn snap_to_publication_date_now(date: NaiveDate) -> ChartDate {
    snap_to_publication_date(date, Utc::now().date_naive())
}

/// Last day of the chart week.
pub fn display_date(chart_date: ChartDate) -> NaiveDate {
    weekday_in_week(chart_date.date(), DISPLAY_WEEKDAY)
}

/// Last day of the chart week as `YYYY-MM-DD`.
pub fn to_display_date(chart_date: ChartDate) -> String {
    display_date(chart_date).format("%Y-%m-%d").to_string()
}

/// Playlist name for a saved chart week.
pub fn playlist_name(title: &str, chart_date: ChartDate) -> String {
    format!(
        "{title} • Week of {date}",
        title = title,
        date = to_display_date(chart_date)
    )
}

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| ChartError::InvalidDate(format!("{} ({})", input, e)))
}

/// Resolves a user supplied date within the browsable range.
///
/// No input means `today`. Dates before [`FIRST_CHART_DATE`] are rejected,
/// dates after `today` are clamped to it.
pub fn pick_date(input: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    let date = match input {
        Some(input) => parse_date(input)?,
        None => today,
    };

    if date < FIRST_CHART_DATE {
        return Err(ChartError::InvalidDate(format!(
            "{} is before the first chart week {}",
            date, FIRST_CHART_DATE
        )));
    }

    Ok(date.min(today))
}
