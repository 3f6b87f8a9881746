use crate::{
    calendar, error, info, management::TokenManager, playlist::SaveOutcome,
    session::Session, success, warning,
};

pub async fn playlist(date: Option<String>) {
    let today = super::today();
    let picked = super::picked_date(date, today);

    let view = match super::build_view(today) {
        Ok(view) => view,
        Err(e) => error!("Cannot set up chart lookup. Err: {}", e),
    };

    let token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => error!(
            "No Spotify access token. Set SPOTIFY_ACCESS_TOKEN or provide {}. Err: {}",
            TokenManager::token_path().display(),
            e
        ),
    };

    if !super::load_week(&view, picked, today).await {
        return;
    }

    let session = match token_mgr.session(view.playlists()).await {
        Ok(session) => session,
        Err(e) => {
            warning!("Failed to resolve Spotify user: {}", e);
            Session::NotAuthenticated
        }
    };

    let state = view.state().await;
    let week = calendar::to_display_date(state.date());
    info!(
        "Create playlist for the week of {} ({} tracks)",
        week,
        state.track_uris().len()
    );

    let pb = super::spinner("Saving playlist...");
    let outcome = view.create_tracks_playlist(&session).await;
    pb.finish_and_clear();

    match outcome {
        SaveOutcome::Created(result) => {
            success!("Playlist for the week of {} created: {}", week, result.uri);
            if let Some(cover) = result.cover {
                info!("Cover: {}", cover);
            }
        }
        SaveOutcome::EmptySelection => {
            warning!("None of the tracks of the week of {} is on Spotify", week)
        }
        SaveOutcome::Busy => warning!("A playlist is already being saved"),
        SaveOutcome::Failed(e) => error!("Failed to create playlist: {}", e),
    }
}
