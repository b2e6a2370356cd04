use crate::{
    Res,
    types::{AccessToken, AudioFeatures, TrackRecord},
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Retrieves track details from `GET /tracks/{id}`.
    pub async fn track(&self, token: &AccessToken, track_id: &str) -> Res<TrackRecord> {
        let path = format!("/tracks/{id}", id = track_id);
        self.get_json(token, &path, &[], &format!("track {}", track_id))
            .await
    }

    /// Retrieves the audio features of a track from `GET /audio-features/{id}`.
    ///
    /// Not joined into chart snapshots; exposed for ad-hoc lookups.
    pub async fn audio_features(&self, token: &AccessToken, track_id: &str) -> Res<AudioFeatures> {
        let path = format!("/audio-features/{id}", id = track_id);
        self.get_json(token, &path, &[], &format!("audio features {}", track_id))
            .await
    }
}
