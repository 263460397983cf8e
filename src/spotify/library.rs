use crate::{
    error::CatalogResult,
    spotify::{PAGE_LIMIT, SpotifyClient},
    types::{Paging, TopTracksResponse, Track, TrackItem, UserProfile},
};

impl SpotifyClient {
    pub async fn get_user_profile(&self) -> CatalogResult<UserProfile> {
        self.get_json(&self.endpoint("/me"), &[]).await
    }

    /// Retrieves every liked track of the user.
    ///
    /// Spotify returns at most 50 saved tracks per page, so the function keeps
    /// following the absolute `next` URL until the last page. Items whose track
    /// is null (removed from the catalog) are skipped.
    ///
    /// Any failing page fails the whole call. A partial library would make
    /// songs look unheard that the user actually likes.
    pub async fn get_liked_tracks(&self) -> CatalogResult<Vec<Track>> {
        let mut tracks = Vec::new();

        let mut page: Paging<TrackItem> = self
            .get_json(
                &self.endpoint("/me/tracks"),
                &[("limit", PAGE_LIMIT.to_string())],
            )
            .await?;

        loop {
            tracks.extend(page.items.into_iter().filter_map(|item| item.track));

            match page.next {
                Some(next) => page = self.get_json(&next, &[]).await?,
                None => break,
            }
        }

        Ok(tracks)
    }

    pub async fn get_top_tracks(&self) -> CatalogResult<Vec<Track>> {
        let res: TopTracksResponse = self
            .get_json(
                &self.endpoint("/me/top/tracks"),
                &[
                    ("time_range", "medium_term".to_string()),
                    ("limit", PAGE_LIMIT.to_string()),
                ],
            )
            .await?;

        Ok(res.items)
    }
}
