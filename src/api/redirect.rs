use axum::{Extension, extract::Query, response::Json};
use serde::Deserialize;

use crate::{
    api::AppState,
    error::{ApiError, CatalogError},
    info,
    prep::{self, PrepOutcome},
    spotify::{Catalog, SpotifyClient, artists::find_artist, auth::exchange_code},
    success,
    types::{ConcertQuery, PrepReport},
    warning,
};

#[derive(Debug, Deserialize)]
pub struct RedirectParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// OAuth redirect target. Exchanges the code and runs the whole prep flow for
/// the login session named by `state`.
pub async fn redirect(
    Query(params): Query<RedirectParams>,
    Extension(state): Extension<AppState>,
) -> Result<Json<PrepReport>, ApiError> {
    if let Some(error) = params.error {
        return Err(ApiError::BadRequest(format!(
            "Authorization denied: {}",
            error
        )));
    }

    let Some(code) = params.code.filter(|c| !c.is_empty()) else {
        return Err(ApiError::BadRequest("Authorization code missing.".to_string()));
    };

    let query = match params.state {
        Some(key) => state.sessions.take(&key).await,
        None => None,
    };
    let Some(query) = query else {
        return Err(ApiError::BadRequest(
            "Unknown or expired login session. Start again from /.".to_string(),
        ));
    };

    let token = exchange_code(&state.http, &state.settings, &code)
        .await
        .map_err(|e| upstream("Error retrieving access token.", e))?;

    let client = SpotifyClient::new(
        state.http.clone(),
        &state.settings.api_url,
        &token.access_token,
    );

    let report = run_prep(&client, &query).await?;
    Ok(Json(report))
}

fn upstream(message: &str, e: CatalogError) -> ApiError {
    warning!("{} {}", message, e);
    ApiError::Upstream(message.to_string())
}

/// Runs every step after authorization against `catalog`.
///
/// Profile, liked songs, top tracks, the artist and the artist's top tracks
/// are required and the first failure ends the request. The setlist step is
/// not: a missing setlist or a failed search only shows up in
/// `concert_prep_playlist`.
pub async fn run_prep<C: Catalog>(catalog: &C, query: &ConcertQuery) -> Result<PrepReport, ApiError> {
    let user_profile = catalog
        .user_profile()
        .await
        .map_err(|e| upstream("Error retrieving user profile.", e))?;

    let liked_songs = catalog
        .liked_tracks()
        .await
        .map_err(|e| upstream("Error retrieving user's liked songs.", e))?;

    let user_top_tracks = catalog
        .top_tracks()
        .await
        .map_err(|e| upstream("Error retrieving user's top tracks.", e))?;

    let artist = find_artist(catalog, &query.artist)
        .await
        .map_err(|e| upstream("Error retrieving artist's ID.", e))?;

    let artist_top_tracks = catalog
        .artist_top_tracks(&artist.id)
        .await
        .map_err(|e| upstream("Error retrieving artist's top tracks.", e))?;

    info!(
        "{} liked songs, {} top tracks, {} top tracks by {}",
        liked_songs.len(),
        user_top_tracks.len(),
        artist_top_tracks.len(),
        artist.name
    );

    let (setlist_playlist, setlist, concert_prep_playlist) =
        match prep::resolve_setlist(catalog, query).await {
            Ok(Some(setlist)) => {
                info!(
                    "Most followed setlist: {} ({} followers) {}",
                    setlist.playlist.name, setlist.playlist.followers, setlist.playlist.url
                );

                let known = prep::known_pool(&liked_songs, &user_top_tracks);
                let uris = prep::unheard_uris(&known, &artist_top_tracks, &setlist.items);
                let outcome =
                    prep::create_prep_playlist(catalog, &user_profile.id, query, &uris).await;
                log_outcome(&outcome);

                (
                    Some(setlist.playlist),
                    Some(setlist.items),
                    outcome.to_string(),
                )
            }
            Ok(None) => {
                let message = format!(
                    "No setlist found for {} {} {}.",
                    query.artist, query.concert, query.year
                );
                warning!("{}", message);
                (None, None, message)
            }
            Err(e) => {
                let message = format!("Error searching for setlist: {}", e);
                warning!("{}", message);
                (None, None, message)
            }
        };

    Ok(PrepReport {
        user_profile,
        liked_songs,
        user_top_tracks,
        setlist_playlist,
        setlist,
        concert_prep_playlist,
    })
}

fn log_outcome(outcome: &PrepOutcome) {
    match outcome {
        PrepOutcome::Created { tracks, .. } => success!("{} ({} tracks)", outcome, tracks),
        _ => warning!("{}", outcome),
    }
}
