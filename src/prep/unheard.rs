use std::fmt;

use crate::{
    error::CatalogError,
    spotify::{ADD_TRACKS_LIMIT, Catalog},
    types::{ConcertQuery, CreatePlaylistRequest, Track, TrackItem},
};

/// Whether `track` is the same song as any track of `list`.
pub fn track_in_list(track: &Track, list: &[Track]) -> bool {
    list.iter().any(|t| t.same_song(track))
}

/// Tracks the listener already knows: liked songs, then every top track that
/// is not already among the liked songs.
///
/// Top tracks are only checked against the liked songs, not against each
/// other.
pub fn known_pool(liked: &[Track], top: &[Track]) -> Vec<Track> {
    let mut known = liked.to_vec();
    known.extend(
        top.iter()
            .filter(|t| !track_in_list(t, liked))
            .cloned(),
    );
    known
}

/// URIs of the candidate tracks that are not in the known pool.
///
/// Artist top tracks come first in their given order, then setlist tracks in
/// setlist order. Setlist entries without a track, and setlist tracks whose
/// URI was already collected, are skipped.
pub fn unheard_uris(known: &[Track], artist_top: &[Track], setlist: &[TrackItem]) -> Vec<String> {
    let mut uris: Vec<String> = artist_top
        .iter()
        .filter(|t| !track_in_list(t, known))
        .map(|t| t.uri.clone())
        .collect();

    for track in setlist.iter().filter_map(|item| item.track.as_ref()) {
        if !track_in_list(track, known) && !uris.contains(&track.uri) {
            uris.push(track.uri.clone());
        }
    }

    uris
}

pub fn playlist_name(query: &ConcertQuery) -> String {
    format!("{} Concert Prep Playlist", query.artist)
}

pub fn playlist_description(query: &ConcertQuery) -> String {
    format!(
        "Songs to know before {} {} ({}). Generated {}.",
        query.artist,
        query.concert,
        query.year,
        chrono::Local::now().format("%Y-%m-%d")
    )
}

/// Result of creating and populating the prep playlist.
#[derive(Debug)]
pub enum PrepOutcome {
    Created { url: String, tracks: usize },
    CreateFailed(CatalogError),
    PopulateFailed(CatalogError),
}

impl PrepOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, PrepOutcome::Created { .. })
    }
}

impl fmt::Display for PrepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrepOutcome::Created { url, .. } => write!(
                f,
                "Here's the link to your concert preparation playlist: {}",
                url
            ),
            PrepOutcome::CreateFailed(e) => write!(f, "Error creating playlist: {}", e),
            PrepOutcome::PopulateFailed(e) => write!(f, "Error adding tracks to playlist: {}", e),
        }
    }
}

/// Creates the private prep playlist for `user_id` and fills it with `uris`.
///
/// URIs are sent in batches of [`ADD_TRACKS_LIMIT`], which is one call for
/// any realistic setlist. With no URIs the playlist is created empty.
pub async fn create_prep_playlist<C: Catalog>(
    catalog: &C,
    user_id: &str,
    query: &ConcertQuery,
    uris: &[String],
) -> PrepOutcome {
    let request = CreatePlaylistRequest {
        name: playlist_name(query),
        description: playlist_description(query),
        public: false,
    };

    let created = match catalog.create_playlist(user_id, &request).await {
        Ok(created) => created,
        Err(e) => return PrepOutcome::CreateFailed(e),
    };

    for chunk in uris.chunks(ADD_TRACKS_LIMIT) {
        if let Err(e) = catalog.add_tracks(&created.id, chunk).await {
            return PrepOutcome::PopulateFailed(e);
        }
    }

    PrepOutcome::Created {
        url: created
            .external_urls
            .get("spotify")
            .cloned()
            .unwrap_or_default(),
        tracks: uris.len(),
    }
}
