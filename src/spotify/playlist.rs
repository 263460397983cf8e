use crate::{
    error::CatalogResult,
    spotify::{PAGE_LIMIT, SpotifyClient, check_status},
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse, Paging, PlaylistDetails, PlaylistSearchResponse, PlaylistSummary,
        TrackItem,
    },
};

impl SpotifyClient {
    pub async fn get_playlists_by_query(
        &self,
        query: &str,
        limit: u32,
    ) -> CatalogResult<Vec<Option<PlaylistSummary>>> {
        let res: PlaylistSearchResponse = self
            .get_json(
                &self.endpoint("/search"),
                &[
                    ("q", query.to_string()),
                    ("type", "playlist".to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;

        Ok(res.playlists.items)
    }

    pub async fn get_playlist(&self, playlist_id: &str) -> CatalogResult<PlaylistDetails> {
        self.get_json(&self.endpoint(&format!("/playlists/{}", playlist_id)), &[])
            .await
    }

    /// Retrieves all items of a playlist, following `next` across pages.
    pub async fn get_playlist_items(&self, playlist_id: &str) -> CatalogResult<Vec<TrackItem>> {
        let mut items = Vec::new();

        let mut page: Paging<TrackItem> = self
            .get_json(
                &self.endpoint(&format!("/playlists/{}/tracks", playlist_id)),
                &[("limit", PAGE_LIMIT.to_string())],
            )
            .await?;

        loop {
            items.append(&mut page.items);

            match page.next {
                Some(next) => page = self.get_json(&next, &[]).await?,
                None => break,
            }
        }

        Ok(items)
    }

    pub async fn post_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> CatalogResult<CreatePlaylistResponse> {
        let response = self
            .http
            .post(self.endpoint(&format!("/users/{}/playlists", user_id)))
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await?;

        Ok(check_status(response)
            .await?
            .json::<CreatePlaylistResponse>()
            .await?)
    }

    pub async fn post_playlist_items(&self, playlist_id: &str, uris: &[String]) -> CatalogResult<()> {
        let body = AddTrackToPlaylistRequest {
            uris: uris.to_vec(),
        };

        let response = self
            .http
            .post(self.endpoint(&format!("/playlists/{}/tracks", playlist_id)))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        check_status(response)
            .await?
            .json::<AddTrackToPlaylistResponse>()
            .await?;

        Ok(())
    }
}
