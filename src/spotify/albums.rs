use crate::{
    Res,
    types::{AccessToken, AlbumTracksResponse},
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Returns the track ids of an album, in album order.
    ///
    /// Reads the first page of `GET /albums/{id}/tracks` only.
    pub async fn album_track_ids(&self, token: &AccessToken, album_id: &str) -> Res<Vec<String>> {
        let path = format!("/albums/{id}/tracks", id = album_id);
        let res: AlbumTracksResponse = self
            .get_json(token, &path, &[], &format!("album {}", album_id))
            .await?;

        Ok(res.items.into_iter().map(|t| t.id).collect())
    }
}
