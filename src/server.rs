use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr};
use tokio::net::TcpListener;

use crate::{Res, api, config::Settings, info};

pub fn router(state: api::AppState) -> Router {
    Router::new()
        .route("/", get(api::login))
        .route("/redirect", get(api::redirect))
        .route("/health", get(api::health))
        .layer(Extension(state))
}

/// Parses `addr` and binds the listener. Once this returns the server accepts
/// connections, even before [`serve`] runs.
pub async fn bind(addr: &str) -> Res<TcpListener> {
    let addr = SocketAddr::from_str(addr)
        .map_err(|e| format!("Failed to parse server address {}: {}", addr, e))?;

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;
    Ok(listener)
}

pub async fn serve(listener: TcpListener, settings: Settings) -> Res<()> {
    let app = router(api::AppState::new(settings));

    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

pub async fn start_api_server(settings: Settings, addr: &str) -> Res<()> {
    let listener = bind(addr).await?;
    serve(listener, settings).await
}
