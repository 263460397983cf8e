use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::api::AppState;

pub async fn health(Extension(state): Extension<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "pending_logins": state.sessions.len().await,
    }))
}
