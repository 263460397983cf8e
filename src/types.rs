use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub expires_in: u64,
    pub refresh_token: Option<String>,
}

/// The artist, concert and year a listener is preparing for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcertQuery {
    pub artist: String,
    pub concert: String,
    pub year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub country: Option<String>,
    pub product: Option<String>,
    #[serde(default)]
    pub external_urls: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
}

impl Track {
    /// Whether both tracks are the same song for "have I heard this" purposes.
    ///
    /// Compares the trimmed, lower-cased name and the set of trimmed,
    /// lower-cased artist names. Identifiers are ignored since one recording
    /// is usually published under several ids (single, album, remaster).
    pub fn same_song(&self, other: &Track) -> bool {
        normalize(&self.name) == normalize(&other.name)
            && self.artist_set() == other.artist_set()
    }

    fn artist_set(&self) -> BTreeSet<String> {
        self.artists.iter().map(|a| normalize(&a.name)).collect()
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Entry of a saved-tracks or playlist page. The track is null for removed
/// or unavailable items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackItem {
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistTopTracksResponse {
    pub tracks: Vec<Option<Track>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistSearchResponse {
    pub artists: Paging<Artist>,
}

/// Playlist as returned by search. Search results may contain null entries
/// and entries without a name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSearchResponse {
    pub playlists: Paging<Option<PlaylistSummary>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Followers {
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistDetails {
    pub id: String,
    pub name: String,
    pub followers: Followers,
    #[serde(default)]
    pub external_urls: HashMap<String, String>,
}

/// Setlist candidate that survived filtering and had its details fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistCandidate {
    pub id: String,
    pub name: String,
    pub followers: u64,
    pub url: String,
}

impl From<PlaylistDetails> for PlaylistCandidate {
    fn from(details: PlaylistDetails) -> Self {
        Self {
            url: details
                .external_urls
                .get("spotify")
                .cloned()
                .unwrap_or_default(),
            id: details.id,
            name: details.name,
            followers: details.followers.total,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setlist {
    pub playlist: PlaylistCandidate,
    pub items: Vec<TrackItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub external_urls: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}

/// Body returned by the redirect endpoint once the whole flow ran.
#[derive(Debug, Clone, Serialize)]
pub struct PrepReport {
    pub user_profile: UserProfile,
    pub liked_songs: Vec<Track>,
    pub user_top_tracks: Vec<Track>,
    pub setlist_playlist: Option<PlaylistCandidate>,
    pub setlist: Option<Vec<TrackItem>>,
    pub concert_prep_playlist: String,
}
