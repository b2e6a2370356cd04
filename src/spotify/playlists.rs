use crate::{
    Res,
    types::{AccessToken, PlaylistTracksResponse, TrackEntry},
};

use super::SpotifyClient;

/// Field filter applied to playlist requests so only chart-relevant data is
/// transferred.
pub const PLAYLIST_FIELDS: &str =
    "items(added_at,track(id,name,album(id,name),artists(id,name)))";

impl SpotifyClient {
    /// Retrieves the track entries of a playlist.
    ///
    /// Only the first page returned by `GET /playlists/{id}/tracks` is read;
    /// items come back in playlist order.
    ///
    /// # Errors
    ///
    /// [`crate::ChartError::Fetch`] on network failure, non-success status or
    /// a response without an `items` list.
    pub async fn playlist_tracks(
        &self,
        token: &AccessToken,
        playlist_id: &str,
    ) -> Res<Vec<TrackEntry>> {
        let path = format!("/playlists/{id}/tracks", id = playlist_id);
        let resource = format!("playlist {}", playlist_id);

        let res: PlaylistTracksResponse = self
            .get_json(token, &path, &[("fields", PLAYLIST_FIELDS)], &resource)
            .await?;

        Ok(res.items)
    }
}
