//! # Spotify Integration Module
//!
//! This module is the only place that talks to the Spotify Web API. Everything
//! above it (setlist resolution, the unheard-track calculation, the redirect
//! handler) goes through the [`Catalog`] trait, which keeps the matching logic
//! testable against an in-memory catalog.
//!
//! ## Architecture
//!
//! ```text
//! API Layer (login, redirect)
//!          ↓
//! Prep Layer (setlist resolver, unheard tracks)
//!          ↓
//! Catalog trait
//!          ↓
//! SpotifyClient (reqwest, bearer token)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Submodules
//!
//! - [`auth`] - Authorization URL and the authorization-code token exchange
//! - [`library`] - Profile, liked songs and the listener's top tracks
//! - [`artists`] - Artist search and an artist's top tracks
//! - [`playlist`] - Playlist search, details, items, creation and population
//!
//! ## Error Handling
//!
//! Every call maps a non-success status to [`CatalogError::Status`] carrying
//! the status code and the response body. There is no retry and no rate-limit
//! handling: the first failure is returned to the caller, which decides
//! whether the step is fatal.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Authorization code exchange
//! - `GET /me` - User profile
//! - `GET /me/tracks` - Liked songs, followed page by page
//! - `GET /me/top/tracks` - Top tracks over the medium term
//! - `GET /search?type=artist` - Artist lookup
//! - `GET /artists/{id}/top-tracks` - Artist's popular tracks
//! - `GET /search?type=playlist` - Setlist candidates
//! - `GET /playlists/{id}` - Follower count and URL of a candidate
//! - `GET /playlists/{id}/tracks` - Setlist items
//! - `POST /users/{user_id}/playlists` - Create the prep playlist
//! - `POST /playlists/{id}/tracks` - Add tracks to the prep playlist

use std::future::Future;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::{
    error::{CatalogError, CatalogResult},
    types::{
        Artist, CreatePlaylistRequest, CreatePlaylistResponse, PlaylistDetails, PlaylistSummary,
        Track, TrackItem, UserProfile,
    },
};

pub mod artists;
pub mod auth;
pub mod library;
pub mod playlist;

/// Page size used for every paginated endpoint.
pub const PAGE_LIMIT: u32 = 50;

/// Maximum number of track URIs accepted by one "add items" call.
pub const ADD_TRACKS_LIMIT: usize = 100;

/// The music-catalog service as seen by the rest of the crate.
pub trait Catalog {
    fn user_profile(&self) -> impl Future<Output = CatalogResult<UserProfile>> + Send;

    /// All liked tracks, following `next` until the last page.
    fn liked_tracks(&self) -> impl Future<Output = CatalogResult<Vec<Track>>> + Send;

    /// Top tracks over the medium term, single page of up to 50.
    fn top_tracks(&self) -> impl Future<Output = CatalogResult<Vec<Track>>> + Send;

    fn search_artists(
        &self,
        name: &str,
    ) -> impl Future<Output = CatalogResult<Vec<Artist>>> + Send;

    fn artist_top_tracks(
        &self,
        artist_id: &str,
    ) -> impl Future<Output = CatalogResult<Vec<Track>>> + Send;

    /// Playlist search results in catalog order. Entries may be null.
    fn search_playlists(
        &self,
        query: &str,
        limit: u32,
    ) -> impl Future<Output = CatalogResult<Vec<Option<PlaylistSummary>>>> + Send;

    fn playlist_details(
        &self,
        playlist_id: &str,
    ) -> impl Future<Output = CatalogResult<PlaylistDetails>> + Send;

    /// Every item of a playlist in playlist order.
    fn playlist_tracks(
        &self,
        playlist_id: &str,
    ) -> impl Future<Output = CatalogResult<Vec<TrackItem>>> + Send;

    fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> impl Future<Output = CatalogResult<CreatePlaylistResponse>> + Send;

    /// Appends at most [`ADD_TRACKS_LIMIT`] URIs in one call.
    fn add_tracks(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> impl Future<Output = CatalogResult<()>> + Send;
}

/// Spotify Web API client bound to one user's access token.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token: String,
}

impl SpotifyClient {
    pub fn new(http: Client, api_url: &str, token: &str) -> Self {
        Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> CatalogResult<T> {
        let response = self
            .http
            .get(url)
            .query(query)
            .bearer_auth(&self.token)
            .send()
            .await?;

        Ok(check_status(response).await?.json::<T>().await?)
    }
}

/// Turns a non-success response into [`CatalogError::Status`].
pub(crate) async fn check_status(response: Response) -> CatalogResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(CatalogError::Status {
        status: status.as_u16(),
        body,
    })
}

impl Catalog for SpotifyClient {
    async fn user_profile(&self) -> CatalogResult<UserProfile> {
        self.get_user_profile().await
    }

    async fn liked_tracks(&self) -> CatalogResult<Vec<Track>> {
        self.get_liked_tracks().await
    }

    async fn top_tracks(&self) -> CatalogResult<Vec<Track>> {
        self.get_top_tracks().await
    }

    async fn search_artists(&self, name: &str) -> CatalogResult<Vec<Artist>> {
        self.get_artists_by_name(name).await
    }

    async fn artist_top_tracks(&self, artist_id: &str) -> CatalogResult<Vec<Track>> {
        self.get_artist_top_tracks(artist_id).await
    }

    async fn search_playlists(
        &self,
        query: &str,
        limit: u32,
    ) -> CatalogResult<Vec<Option<PlaylistSummary>>> {
        self.get_playlists_by_query(query, limit).await
    }

    async fn playlist_details(&self, playlist_id: &str) -> CatalogResult<PlaylistDetails> {
        self.get_playlist(playlist_id).await
    }

    async fn playlist_tracks(&self, playlist_id: &str) -> CatalogResult<Vec<TrackItem>> {
        self.get_playlist_items(playlist_id).await
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> CatalogResult<CreatePlaylistResponse> {
        self.post_playlist(user_id, request).await
    }

    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> CatalogResult<()> {
        self.post_playlist_items(playlist_id, uris).await
    }
}
