use crate::{calendar, config};

pub async fn info(date: Option<String>) {
    let today = super::today();
    let picked = super::picked_date(date, today);
    let chart_date = calendar::snap_to_publication_date(picked, today);

    println!("Picked date:      {}", picked);
    println!("Chart date:       {}", chart_date);
    println!("Week of:          {}", calendar::to_display_date(chart_date));
    println!(
        "Playlist name:    {}",
        calendar::playlist_name(&config::playlist_title(), chart_date)
    );
    println!("First chart week: {}", calendar::FIRST_CHART_DATE);
}
