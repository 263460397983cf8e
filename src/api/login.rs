use std::collections::HashMap;

use axum::{Extension, extract::Query, response::Redirect};

use crate::{
    api::AppState, error::ApiError, info, spotify::auth::authorization_url, utils, warning,
};

pub async fn login(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<AppState>,
) -> Result<Redirect, ApiError> {
    let query = utils::parse_concert_info(params.get("info").map(String::as_str))
        .map_err(|msg| ApiError::BadRequest(msg.to_string()))?;

    info!(
        "Login for {} / {} / {}",
        query.artist, query.concert, query.year
    );

    let session_key = state.sessions.begin(query).await;

    let auth_url = authorization_url(&state.settings, &session_key).map_err(|e| {
        warning!("{}", e);
        ApiError::Upstream("Error building authorization URL.".to_string())
    })?;

    Ok(Redirect::to(&auth_url))
}
