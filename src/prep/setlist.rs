use crate::{
    error::CatalogResult,
    spotify::Catalog,
    types::{ConcertQuery, PlaylistCandidate, Setlist},
    warning,
};

/// Number of search results inspected for setlist candidates.
pub const SEARCH_LIMIT: u32 = 50;

const SETLIST_KEYWORDS: [&str; 3] = ["setlist", "concert", "tour"];

pub fn search_query(query: &ConcertQuery) -> String {
    format!("{} {} Setlist", query.artist, query.concert)
}

/// Whether a playlist name looks like a fan setlist for the concert.
///
/// All three must hold, compared in lower case:
/// - a whitespace token of the artist name occurs in the playlist name
/// - the name contains "setlist", "concert" or "tour"
/// - a token of the concert name occurs in it, or the year does
pub fn is_setlist_candidate(name: &str, query: &ConcertQuery) -> bool {
    let name = name.to_lowercase();
    let contains_token = |source: &str| {
        source
            .to_lowercase()
            .split_whitespace()
            .any(|token| name.contains(token))
    };

    let artist_match = contains_token(&query.artist);
    let keyword_match = SETLIST_KEYWORDS.iter().any(|k| name.contains(k));
    let year = query.year.trim().to_lowercase();
    let event_match =
        contains_token(&query.concert) || (!year.is_empty() && name.contains(year.as_str()));

    artist_match && keyword_match && event_match
}

/// Picks the most-followed candidate. Ties keep the earliest one and a
/// playlist nobody follows never wins.
pub fn most_followed<I>(candidates: I) -> Option<PlaylistCandidate>
where
    I: IntoIterator<Item = PlaylistCandidate>,
{
    let mut best: Option<PlaylistCandidate> = None;
    let mut max_followers = 0;
    for candidate in candidates {
        if candidate.followers > max_followers {
            max_followers = candidate.followers;
            best = Some(candidate);
        }
    }
    best
}

/// Finds the community setlist playlist for a concert and loads its items.
///
/// Searches playlists for `"{artist} {concert} Setlist"`, keeps the results
/// passing [`is_setlist_candidate`], fetches details for each survivor and
/// returns the most-followed one together with all of its items.
///
/// A candidate whose details cannot be fetched is skipped with a warning.
///
/// # Returns
///
/// - `Ok(Some(setlist))` - a setlist was found
/// - `Ok(None)` - no search result passed the filter, or none of the
///   survivors had retrievable details and at least one follower
/// - `Err(_)` - the search itself or loading the winner's items failed
pub async fn resolve_setlist<C: Catalog>(
    catalog: &C,
    query: &ConcertQuery,
) -> CatalogResult<Option<Setlist>> {
    let results = catalog
        .search_playlists(&search_query(query), SEARCH_LIMIT)
        .await?;

    let survivors: Vec<_> = results
        .into_iter()
        .flatten()
        .filter(|p| {
            p.name
                .as_deref()
                .is_some_and(|name| is_setlist_candidate(name, query))
        })
        .collect();

    if survivors.is_empty() {
        return Ok(None);
    }

    let mut candidates = Vec::with_capacity(survivors.len());
    for summary in survivors {
        match catalog.playlist_details(&summary.id).await {
            Ok(details) => candidates.push(PlaylistCandidate::from(details)),
            Err(e) => warning!("Skipping setlist candidate {}: {}", summary.id, e),
        }
    }

    let Some(playlist) = most_followed(candidates) else {
        return Ok(None);
    };

    let items = catalog.playlist_tracks(&playlist.id).await?;
    Ok(Some(Setlist { playlist, items }))
}
