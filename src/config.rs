//! Configuration management for the concert prep server.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults (where applicable)
//!
//! Values are read once at startup into a [`Settings`] snapshot which the
//! request handlers share. Handlers never read the environment themselves.

use std::{env, path::PathBuf};

use crate::warning;

pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:5000/redirect";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Permissions requested during authorization.
pub const SCOPE: &str = "user-library-read user-read-private user-top-read user-read-recently-played playlist-modify-private playlist-modify-public";

/// Loads environment variables from `.env` files.
///
/// Reads `concertprep/.env` from the platform-specific local data directory,
/// then `.env` from the working directory. Neither file is required; variables
/// that are already set in the process environment are never overwritten.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/concertprep/.env`
/// - macOS: `~/Library/Application Support/concertprep/.env`
/// - Windows: `%LOCALAPPDATA%/concertprep/.env`
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or one of the
/// files exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("concertprep/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

/// Returns the address the local HTTP server binds to.
///
/// Reads `SERVER_ADDRESS`, falling back to `127.0.0.1:5000` which matches
/// the default redirect URI.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the Spotify client ID, if configured.
///
/// Reads `CLIENT_ID`, the identifier obtained when registering the application
/// with Spotify's developer platform.
pub fn client_id() -> Option<String> {
    non_empty_var("CLIENT_ID")
}

/// Returns the Spotify client secret, if configured.
///
/// Reads `CLIENT_SECRET`. The secret is sent only to the token endpoint and
/// must never be logged.
pub fn client_secret() -> Option<String> {
    non_empty_var("CLIENT_SECRET")
}

/// Returns the OAuth redirect URI.
///
/// Reads `REDIRECT_URI`. It must match a redirect URI registered in the
/// Spotify application settings and point at this server's `/redirect` route.
pub fn redirect_uri() -> String {
    non_empty_var("REDIRECT_URI").unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string())
}

pub fn api_url() -> String {
    non_empty_var("SPOTIFY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

pub fn auth_url() -> String {
    non_empty_var("SPOTIFY_API_AUTH_URL").unwrap_or_else(|| DEFAULT_AUTH_URL.to_string())
}

pub fn token_url() -> String {
    non_empty_var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string())
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Snapshot of everything the endpoints need to talk to Spotify.
#[derive(Debug, Clone)]
pub struct Settings {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub api_url: String,
    pub auth_url: String,
    pub token_url: String,
    pub scope: String,
}

impl Settings {
    /// Builds the settings from the process environment.
    ///
    /// # Errors
    ///
    /// Fails when `CLIENT_ID` or `CLIENT_SECRET` is missing or empty.
    pub fn from_env() -> Result<Self, String> {
        let client_id = client_id().ok_or("CLIENT_ID must be set")?;
        let client_secret = client_secret().ok_or("CLIENT_SECRET must be set")?;

        let redirect_uri = redirect_uri();
        if !redirect_uri.ends_with("/redirect") {
            warning!(
                "REDIRECT_URI {} does not point at the /redirect route",
                redirect_uri
            );
        }

        Ok(Self {
            client_id,
            client_secret,
            redirect_uri,
            api_url: api_url(),
            auth_url: auth_url(),
            token_url: token_url(),
            scope: SCOPE.to_string(),
        })
    }
}
