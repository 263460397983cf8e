use crate::{
    error::{CatalogError, CatalogResult},
    spotify::{Catalog, PAGE_LIMIT, SpotifyClient},
    types::{Artist, ArtistSearchResponse, ArtistTopTracksResponse, Track},
    warning,
};

impl SpotifyClient {
    pub async fn get_artists_by_name(&self, name: &str) -> CatalogResult<Vec<Artist>> {
        let res: ArtistSearchResponse = self
            .get_json(
                &self.endpoint("/search"),
                &[
                    ("q", name.to_string()),
                    ("type", "artist".to_string()),
                    ("limit", PAGE_LIMIT.to_string()),
                ],
            )
            .await?;

        Ok(res.artists.items)
    }

    pub async fn get_artist_top_tracks(&self, artist_id: &str) -> CatalogResult<Vec<Track>> {
        let res: ArtistTopTracksResponse = self
            .get_json(&self.endpoint(&format!("/artists/{}/top-tracks", artist_id)), &[])
            .await?;

        Ok(res.tracks.into_iter().flatten().collect())
    }
}

/// Looks up the catalog artist for a free-text artist name.
///
/// Prefers a result whose name equals `name` ignoring case and surrounding
/// whitespace. Without an exact match the first result is used and a warning
/// is printed, since search ranking is usually right about popular artists.
///
/// # Errors
///
/// Propagates search failures and returns [`CatalogError::NotFound`] when the
/// search has no results at all.
pub async fn find_artist<C: Catalog>(catalog: &C, name: &str) -> CatalogResult<Artist> {
    let mut artists = catalog.search_artists(name).await?;

    let wanted = name.trim().to_lowercase();
    if let Some(pos) = artists
        .iter()
        .position(|a| a.name.trim().to_lowercase() == wanted)
    {
        return Ok(artists.swap_remove(pos));
    }

    if artists.is_empty() {
        return Err(CatalogError::NotFound(format!(
            "No artist found for '{}'",
            name
        )));
    }

    warning!(
        "No exact match found for '{}', using '{}'",
        name,
        artists[0].name
    );
    Ok(artists.swap_remove(0))
}
