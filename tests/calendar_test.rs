use chartlist::calendar::*;
use chartlist::types::ChartDate;
use chartlist::ChartError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_snap_wednesday_is_kept() {
    let today = date(2021, 6, 1);
    let snapped = snap_to_publication_date(date(2021, 3, 10), today);

    assert_eq!(snapped.date(), date(2021, 3, 10));
    assert_eq!(to_display_date(snapped), "2021-03-13");
}

#[test]
fn test_snap_monday_moves_to_wednesday_of_same_week() {
    let today = date(2021, 6, 1);
    let snapped = snap_to_publication_date(date(2021, 3, 15), today);

    assert_eq!(snapped.date(), date(2021, 3, 17));
}

#[test]
fn test_snap_steps_back_when_wednesday_is_in_the_future() {
    // Monday 2021-03-15, "now" is Tuesday 2021-03-16
    let snapped = snap_to_publication_date(date(2021, 3, 15), date(2021, 3, 16));

    assert_eq!(snapped.date(), date(2021, 3, 10));
}

#[test]
fn test_snap_week_runs_sunday_to_saturday() {
    let today = date(2022, 1, 1);

    // Sunday goes forward, Saturday goes back
    assert_eq!(
        snap_to_publication_date(date(2021, 3, 14), today).date(),
        date(2021, 3, 17)
    );
    assert_eq!(
        snap_to_publication_date(date(2021, 3, 20), today).date(),
        date(2021, 3, 17)
    );
}

#[test]
fn test_snap_on_publication_day_itself() {
    let wednesday = date(2021, 3, 17);
    assert_eq!(
        snap_to_publication_date(wednesday, wednesday).date(),
        wednesday
    );
}

#[test]
fn test_snap_is_never_in_the_future() {
    let start = date(2020, 12, 20);

    for t in 0..21 {
        let today = start + Duration::days(t);
        for d in -30..30 {
            let picked = today + Duration::days(d);
            let snapped = snap_to_publication_date(picked, today);

            assert!(
                snapped.date() <= today,
                "{} snapped to {} after {}",
                picked,
                snapped,
                today
            );
            assert_eq!(snapped.date().weekday(), Weekday::Wed);
        }
    }
}

#[test]
fn test_snap_far_future_lands_on_latest_chart() {
    let today = date(2021, 3, 16); // Tuesday
    let snapped = snap_to_publication_date(date(2023, 8, 1), today);

    assert_eq!(snapped.date(), date(2021, 3, 10));
}

#[test]
fn test_snap_is_idempotent() {
    let today = date(2021, 3, 16);
    let start = date(2021, 1, 1);

    for d in 0..120 {
        let once = snap_to_publication_date(start + Duration::days(d), today);
        let twice = snap_to_publication_date(once.date(), today);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_display_date_is_within_the_same_week() {
    let today = date(2024, 1, 1);
    let start = date(2019, 5, 1);

    for d in 0..60 {
        let chart_date = snap_to_publication_date(start + Duration::days(d), today);
        let shown = display_date(chart_date);

        assert!(shown >= chart_date.date());
        assert!(shown - chart_date.date() < Duration::days(7));
        assert_eq!(shown.weekday(), Weekday::Sat);
    }
}

#[test]
fn test_chart_date_from_publication() {
    assert!(ChartDate::from_publication(date(2021, 3, 10)).is_some());
    assert!(ChartDate::from_publication(date(2021, 3, 11)).is_none());

    let chart_date = ChartDate::from_publication(date(2021, 3, 10)).unwrap();
    assert_eq!(chart_date.key(), "2021-03-10");
    assert_eq!(chart_date.to_string(), "2021-03-10");
}

#[test]
fn test_playlist_name_uses_display_date() {
    let chart_date = ChartDate::from_publication(date(2021, 3, 10)).unwrap();
    assert_eq!(
        playlist_name("Billboard Top 50", chart_date),
        "Billboard Top 50 • Week of 2021-03-13"
    );
}

#[test]
fn test_parse_date() {
    assert_eq!(parse_date("2021-03-10").unwrap(), date(2021, 3, 10));
    assert_eq!(parse_date(" 2021-03-10 ").unwrap(), date(2021, 3, 10));

    assert!(matches!(
        parse_date("10.03.2021"),
        Err(ChartError::InvalidDate(_))
    ));
    assert!(parse_date("2021-02-30").is_err());
    assert!(parse_date("").is_err());
}

#[test]
fn test_pick_date_defaults_to_today() {
    let today = date(2021, 3, 16);
    assert_eq!(pick_date(None, today).unwrap(), today);
}

#[test]
fn test_pick_date_clamps_future_dates() {
    let today = date(2021, 3, 16);
    assert_eq!(pick_date(Some("2030-01-01"), today).unwrap(), today);
}

#[test]
fn test_pick_date_rejects_dates_before_first_chart() {
    let today = date(2021, 3, 16);

    assert!(matches!(
        pick_date(Some("1979-12-31"), today),
        Err(ChartError::InvalidDate(_))
    ));
    assert_eq!(
        pick_date(Some("1980-01-02"), today).unwrap(),
        FIRST_CHART_DATE
    );
}

#[test]
fn test_first_chart_date_is_a_publication_date() {
    assert_eq!(FIRST_CHART_DATE.weekday(), PUBLICATION_WEEKDAY);
}
