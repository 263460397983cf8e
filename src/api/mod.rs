//! # API Module
//!
//! HTTP endpoints of the concert prep server.
//!
//! ## Endpoints
//!
//! - [`login`] - `GET /?info=artist/concert/year`. Validates the concert
//!   query, stores it under a fresh OAuth `state` key and redirects the
//!   browser to Spotify's authorization page.
//! - [`redirect`] - `GET /redirect?code=...&state=...`. Exchanges the code for
//!   an access token, gathers the listener's library, resolves the setlist and
//!   creates the prep playlist. Responds with a JSON report.
//! - [`health`] - `GET /health`. Status and version for monitoring.
//!
//! ## Sessions
//!
//! The concert query travels from `/` to `/redirect` through the OAuth
//! `state` parameter and the [`SessionStore`], so concurrent logins never see
//! each other's artist.
//!
//! ## Errors
//!
//! Handlers return [`ApiError`](crate::error::ApiError): 400 with a plain-text
//! message for bad client input, 500 for the first failing Spotify call.
//! Details of downstream failures go to the console, not to the browser.

use std::sync::Arc;

use reqwest::Client;

use crate::{config::Settings, management::SessionStore};

mod health;
mod login;
mod redirect;

pub use health::health;
pub use login::login;
pub use redirect::{RedirectParams, redirect, run_prep};

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub sessions: SessionStore,
    pub http: Client,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
            sessions: SessionStore::default(),
            http: Client::new(),
        }
    }
}
