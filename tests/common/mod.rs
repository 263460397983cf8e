#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use concertprep::{
    error::{CatalogError, CatalogResult},
    spotify::Catalog,
    types::{
        Artist, ConcertQuery, CreatePlaylistRequest, CreatePlaylistResponse, Followers,
        PlaylistDetails, PlaylistSummary, Track, TrackArtist, TrackItem, UserProfile,
    },
};

pub fn track(uri: &str, name: &str, artists: &[&str]) -> Track {
    Track {
        id: Some(uri.rsplit(':').next().unwrap_or(uri).to_string()),
        uri: uri.to_string(),
        name: name.to_string(),
        artists: artists
            .iter()
            .map(|a| TrackArtist {
                id: None,
                name: a.to_string(),
            })
            .collect(),
    }
}

pub fn item(track: Option<Track>) -> TrackItem {
    TrackItem { track }
}

pub fn summary(id: &str, name: Option<&str>) -> Option<PlaylistSummary> {
    Some(PlaylistSummary {
        id: id.to_string(),
        name: name.map(str::to_string),
    })
}

pub fn details(id: &str, name: &str, followers: u64) -> PlaylistDetails {
    PlaylistDetails {
        id: id.to_string(),
        name: name.to_string(),
        followers: Followers { total: followers },
        external_urls: HashMap::from([(
            "spotify".to_string(),
            format!("https://open.spotify.com/playlist/{}", id),
        )]),
    }
}

pub fn query(artist: &str, concert: &str, year: &str) -> ConcertQuery {
    ConcertQuery {
        artist: artist.to_string(),
        concert: concert.to_string(),
        year: year.to_string(),
    }
}

fn status(code: u16) -> CatalogError {
    CatalogError::Status {
        status: code,
        body: "fake failure".to_string(),
    }
}

/// In-memory catalog. Failing calls are configured per step.
#[derive(Default)]
pub struct FakeCatalog {
    pub liked: Vec<Track>,
    pub top: Vec<Track>,
    pub artists: Vec<Artist>,
    pub artist_top: Vec<Track>,
    pub search_results: Vec<Option<PlaylistSummary>>,
    pub details: HashMap<String, PlaylistDetails>,
    pub playlist_items: HashMap<String, Vec<TrackItem>>,

    pub fail_profile: bool,
    pub fail_liked: bool,
    pub fail_top: bool,
    pub fail_artist_top: bool,
    pub fail_search: bool,
    pub fail_create: bool,
    pub fail_add: bool,

    pub searches: Mutex<Vec<(String, u32)>>,
    pub detail_requests: Mutex<Vec<String>>,
    pub created: Mutex<Vec<(String, CreatePlaylistRequest)>>,
    pub added: Mutex<Vec<(String, Vec<String>)>>,
}

impl FakeCatalog {
    pub fn with_setlist(mut self, id: &str, followers: u64, items: Vec<TrackItem>) -> Self {
        self.details
            .insert(id.to_string(), details(id, "Setlist", followers));
        self.playlist_items.insert(id.to_string(), items);
        self
    }

    pub fn added_uris(&self) -> Vec<String> {
        self.added
            .lock()
            .unwrap()
            .iter()
            .flat_map(|(_, uris)| uris.clone())
            .collect()
    }
}

impl Catalog for FakeCatalog {
    async fn user_profile(&self) -> CatalogResult<UserProfile> {
        if self.fail_profile {
            return Err(status(401));
        }
        Ok(UserProfile {
            id: "listener".to_string(),
            display_name: Some("Listener".to_string()),
            email: None,
            country: Some("DE".to_string()),
            product: Some("premium".to_string()),
            external_urls: HashMap::new(),
        })
    }

    async fn liked_tracks(&self) -> CatalogResult<Vec<Track>> {
        if self.fail_liked {
            return Err(status(500));
        }
        Ok(self.liked.clone())
    }

    async fn top_tracks(&self) -> CatalogResult<Vec<Track>> {
        if self.fail_top {
            return Err(status(429));
        }
        Ok(self.top.clone())
    }

    async fn search_artists(&self, _name: &str) -> CatalogResult<Vec<Artist>> {
        Ok(self.artists.clone())
    }

    async fn artist_top_tracks(&self, _artist_id: &str) -> CatalogResult<Vec<Track>> {
        if self.fail_artist_top {
            return Err(status(502));
        }
        Ok(self.artist_top.clone())
    }

    async fn search_playlists(
        &self,
        query: &str,
        limit: u32,
    ) -> CatalogResult<Vec<Option<PlaylistSummary>>> {
        self.searches
            .lock()
            .unwrap()
            .push((query.to_string(), limit));
        if self.fail_search {
            return Err(status(503));
        }
        Ok(self.search_results.clone())
    }

    async fn playlist_details(&self, playlist_id: &str) -> CatalogResult<PlaylistDetails> {
        self.detail_requests
            .lock()
            .unwrap()
            .push(playlist_id.to_string());
        self.details
            .get(playlist_id)
            .cloned()
            .ok_or_else(|| status(404))
    }

    async fn playlist_tracks(&self, playlist_id: &str) -> CatalogResult<Vec<TrackItem>> {
        self.playlist_items
            .get(playlist_id)
            .cloned()
            .ok_or_else(|| status(404))
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> CatalogResult<CreatePlaylistResponse> {
        if self.fail_create {
            return Err(status(403));
        }
        self.created
            .lock()
            .unwrap()
            .push((user_id.to_string(), request.clone()));
        Ok(CreatePlaylistResponse {
            id: "prep".to_string(),
            name: request.name.clone(),
            external_urls: HashMap::from([(
                "spotify".to_string(),
                "https://open.spotify.com/playlist/prep".to_string(),
            )]),
        })
    }

    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> CatalogResult<()> {
        if self.fail_add {
            return Err(status(400));
        }
        self.added
            .lock()
            .unwrap()
            .push((playlist_id.to_string(), uris.to_vec()));
        Ok(())
    }
}
