use tabled::Table;

use crate::{calendar, error, types::ChartTableRow};

pub async fn chart(date: Option<String>) {
    let today = super::today();
    let picked = super::picked_date(date, today);

    let view = match super::build_view(today) {
        Ok(view) => view,
        Err(e) => error!("Cannot set up chart lookup. Err: {}", e),
    };

    if !super::load_week(&view, picked, today).await {
        return;
    }

    let state = view.state().await;
    let rows: Vec<ChartTableRow> = state
        .chart()
        .entries()
        .iter()
        .map(ChartTableRow::from)
        .collect();
    let available = state.track_uris().len();

    let table = Table::new(rows);
    println!(
        "Week of {week}\t{available}/{total} on Spotify\n{table}\n",
        week = calendar::to_display_date(state.date()),
        available = available,
        total = state.chart().len(),
        table = table
    );
}
