use chartsnap::ChartError;
use chartsnap::charts::collect_charts;
use chartsnap::config::Credentials;
use chartsnap::spotify::{SpotifyClient, playlists::PLAYLIST_FIELDS};
use chartsnap::types::AccessToken;
use mockito::{Matcher, Server};
use serde_json::{Value, json};

// Helper function to point a client at the mock server
fn client_for(server: &Server) -> SpotifyClient {
    SpotifyClient::new(server.url(), format!("{}/api/token", server.url()))
}

fn playlist_items() -> Value {
    json!([
        {
            "added_at": "2024-03-14T08:00:00Z",
            "track": {
                "id": "t1",
                "name": "First",
                "album": { "id": "a1", "name": "Album One" },
                "artists": [{ "id": "ar1", "name": "Artist One" }]
            }
        },
        {
            "added_at": "2024-03-14T08:00:00Z",
            "track": {
                "id": "t2",
                "name": "Second",
                "album": { "id": "a2", "name": "Album Two" },
                "artists": [
                    { "id": "ar2", "name": "Artist Two" },
                    { "id": "ar3", "name": "Artist Three" }
                ]
            }
        },
        {
            "added_at": "2024-03-13T08:00:00Z",
            "track": {
                "id": "t3",
                "name": "Third",
                "album": { "id": "a3", "name": "Album Three" },
                "artists": [{ "id": "ar1", "name": "Artist One" }]
            }
        }
    ])
}

#[tokio::test]
async fn test_request_token_returns_access_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/token")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "client_credentials".into()),
            Matcher::UrlEncoded("client_id".into(), "cid".into()),
            Matcher::UrlEncoded("client_secret".into(), "secret".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"BQC-token","token_type":"Bearer","expires_in":3600}"#)
        .create_async()
        .await;

    let token = client_for(&server)
        .request_token(&Credentials::new("cid", "secret"))
        .await
        .unwrap();

    assert_eq!(token.as_str(), "BQC-token");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_request_token_rejected_credentials() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/token")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"invalid_client"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .request_token(&Credentials::new("cid", "wrong"))
        .await
        .unwrap_err();

    assert!(matches!(err, ChartError::Authentication(_)));
}

#[tokio::test]
async fn test_request_token_missing_field() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token_type":"Bearer"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .request_token(&Credentials::new("cid", "secret"))
        .await
        .unwrap_err();

    assert!(matches!(err, ChartError::Authentication(_)));
}

#[tokio::test]
async fn test_request_token_empty_credentials_skip_network() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/token")
        .expect(0)
        .create_async()
        .await;

    let err = client_for(&server)
        .request_token(&Credentials::new("", ""))
        .await
        .unwrap_err();

    assert!(matches!(err, ChartError::Configuration(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_playlist_tracks_preserves_order_and_fields() {
    let mut server = Server::new_async().await;
    let items = playlist_items();
    let mock = server
        .mock("GET", "/playlists/pl1/tracks")
        .match_header("authorization", "Bearer tok")
        .match_query(Matcher::UrlEncoded("fields".into(), PLAYLIST_FIELDS.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "items": items }).to_string())
        .create_async()
        .await;

    let entries = client_for(&server)
        .playlist_tracks(&AccessToken::new("tok"), "pl1")
        .await
        .unwrap();

    assert_eq!(entries.len(), 3);
    let names: Vec<&str> = entries.iter().map(|e| e.track_name().unwrap()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);

    // Serializing the entries again yields the exact input shape
    assert_eq!(serde_json::to_value(&entries).unwrap(), items);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_playlist_tracks_keeps_unavailable_items() {
    let mut server = Server::new_async().await;
    let items = json!([
        { "added_at": "2024-03-14T08:00:00Z", "track": null },
        {
            "added_at": "2024-03-14T08:00:00Z",
            "track": {
                "id": null,
                "name": "Local file",
                "album": { "id": null, "name": "" },
                "artists": []
            }
        }
    ]);
    server
        .mock("GET", "/playlists/pl1/tracks")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "items": items }).to_string())
        .create_async()
        .await;

    let entries = client_for(&server)
        .playlist_tracks(&AccessToken::new("tok"), "pl1")
        .await
        .unwrap();

    assert_eq!(entries.len(), 2);
    assert!(entries[0].track_name().is_none());
    assert!(entries[1].artist_names().is_empty());
    assert_eq!(serde_json::to_value(&entries).unwrap(), items);
}

#[tokio::test]
async fn test_playlist_tracks_keeps_partial_items_verbatim() {
    let mut server = Server::new_async().await;
    // No added_at, no album, plus a field outside the requested filter
    let items = json!([
        {
            "track": { "id": "x", "name": "Partial", "artists": [] },
            "is_local": false
        },
        {
            "added_at": "2024-03-14T08:00:00Z",
            "track": {
                "id": "t2",
                "name": "Complete",
                "album": { "id": "a2", "name": "Album Two" },
                "artists": [{ "id": "ar2", "name": "Artist Two" }]
            }
        }
    ]);
    server
        .mock("GET", "/playlists/pl1/tracks")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "items": items }).to_string())
        .create_async()
        .await;

    let entries = client_for(&server)
        .playlist_tracks(&AccessToken::new("tok"), "pl1")
        .await
        .unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].track_name(), Some("Partial"));
    assert_eq!(entries[0].added_at(), None);
    assert_eq!(entries[1].artist_names(), vec!["Artist Two"]);

    // Absent fields stay absent, nothing is added on the way out
    assert_eq!(serde_json::to_value(&entries).unwrap(), items);
    assert_eq!(
        serde_json::to_string(&entries[0]).unwrap(),
        serde_json::to_string(&items[0]).unwrap()
    );
}

#[tokio::test]
async fn test_playlist_tracks_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/playlists/missing/tracks")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"error":{"status":404,"message":"Not found."}}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .playlist_tracks(&AccessToken::new("tok"), "missing")
        .await
        .unwrap_err();

    match err {
        ChartError::Fetch { resource, .. } => assert_eq!(resource, "playlist missing"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_playlist_tracks_missing_items() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/playlists/pl1/tracks")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"href":"https://api.spotify.com/v1/playlists/pl1/tracks"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .playlist_tracks(&AccessToken::new("tok"), "pl1")
        .await
        .unwrap_err();

    assert!(matches!(err, ChartError::Fetch { .. }));
}

#[tokio::test]
async fn test_track_lookup() {
    let mut server = Server::new_async().await;
    let body = json!({
        "id": "t1",
        "name": "First",
        "uri": "spotify:track:t1",
        "href": "https://api.spotify.com/v1/tracks/t1",
        "duration_ms": 201000,
        "explicit": false,
        "popularity": 87,
        "track_number": 1,
        "disc_number": 1,
        "is_local": false,
        "preview_url": null,
        "album": {
            "id": "a1",
            "name": "Album One",
            "release_date": "2024-01-12",
            "album_type": "album",
            "images": [{ "url": "https://i.scdn.co/image/a1", "height": 640, "width": 640 }],
            "artists": [{ "id": "ar1", "name": "Artist One" }]
        },
        "artists": [{
            "id": "ar1",
            "name": "Artist One",
            "external_urls": { "spotify": "https://open.spotify.com/artist/ar1" }
        }],
        "available_markets": ["JP", "US"],
        "external_ids": { "isrc": "USUM72400001" },
        "external_urls": { "spotify": "https://open.spotify.com/track/t1" }
    });
    server
        .mock("GET", "/tracks/t1")
        .match_header("authorization", "Bearer tok")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let track = client_for(&server)
        .track(&AccessToken::new("tok"), "t1")
        .await
        .unwrap();

    assert_eq!(track.name, "First");
    assert_eq!(track.popularity, Some(87));
    assert_eq!(track.album.release_date.as_deref(), Some("2024-01-12"));
    assert_eq!(track.artists[0].name, "Artist One");

    // Fields without a dedicated member are carried along untouched
    assert_eq!(track.extra["available_markets"], json!(["JP", "US"]));
    assert_eq!(track.extra["external_ids"]["isrc"], "USUM72400001");
    assert!(track.album.extra.contains_key("images"));
    assert_eq!(serde_json::to_value(&track).unwrap(), body);
}

#[tokio::test]
async fn test_audio_features_lookup() {
    let mut server = Server::new_async().await;
    let body = json!({
        "id": "t1",
        "danceability": 0.735,
        "energy": 0.578,
        "key": 5,
        "loudness": -11.84,
        "mode": 0,
        "speechiness": 0.0461,
        "acousticness": 0.514,
        "instrumentalness": 0.0902,
        "liveness": 0.159,
        "valence": 0.636,
        "tempo": 98.002,
        "type": "audio_features",
        "uri": "spotify:track:t1",
        "track_href": "https://api.spotify.com/v1/tracks/t1",
        "analysis_url": "https://api.spotify.com/v1/audio-analysis/t1",
        "duration_ms": 255349,
        "time_signature": 4
    });
    server
        .mock("GET", "/audio-features/t1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let features = client_for(&server)
        .audio_features(&AccessToken::new("tok"), "t1")
        .await
        .unwrap();

    assert_eq!(features.id, "t1");
    assert_eq!(features.key, Some(5));
    assert_eq!(features.time_signature, Some(4));
    assert_eq!(features.tempo, Some(98.002));
    assert_eq!(features.extra["type"], "audio_features");
    assert_eq!(
        features.extra["analysis_url"],
        "https://api.spotify.com/v1/audio-analysis/t1"
    );
    assert_eq!(serde_json::to_value(&features).unwrap(), body);
}

#[tokio::test]
async fn test_audio_features_with_missing_values() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/audio-features/t9")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"t9","tempo":null,"type":"audio_features"}"#)
        .create_async()
        .await;

    let features = client_for(&server)
        .audio_features(&AccessToken::new("tok"), "t9")
        .await
        .unwrap();

    assert_eq!(features.tempo, None);
    assert_eq!(features.danceability, None);
}

#[tokio::test]
async fn test_album_track_ids_lookup() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/albums/a1/tracks")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "items": [
                    { "id": "t1", "name": "First" },
                    { "id": "t2", "name": "Second" }
                ],
                "next": null
            })
            .to_string(),
        )
        .create_async()
        .await;

    let ids = client_for(&server)
        .album_track_ids(&AccessToken::new("tok"), "a1")
        .await
        .unwrap();

    assert_eq!(ids, vec!["t1".to_string(), "t2".to_string()]);
}

#[tokio::test]
async fn test_lookup_unauthorized() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/tracks/t1")
        .with_status(401)
        .create_async()
        .await;

    let err = client_for(&server)
        .track(&AccessToken::new("expired"), "t1")
        .await
        .unwrap_err();

    assert!(matches!(err, ChartError::Fetch { .. }));
}

#[tokio::test]
async fn test_collect_charts_against_api_uses_one_token() {
    let mut server = Server::new_async().await;
    let token_mock = server
        .mock("POST", "/api/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"shared","token_type":"Bearer","expires_in":3600}"#)
        .expect(1)
        .create_async()
        .await;

    let mut playlist_mocks = Vec::new();
    for id in ["pl-global", "pl-japan"] {
        let m = server
            .mock("GET", format!("/playlists/{}/tracks", id).as_str())
            .match_header("authorization", "Bearer shared")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "items": playlist_items() }).to_string())
            .expect(1)
            .create_async()
            .await;
        playlist_mocks.push(m);
    }

    let snapshot = collect_charts(
        &client_for(&server),
        &Credentials::new("cid", "secret"),
        &[("Global", "pl-global"), ("Japan", "pl-japan")],
    )
    .await
    .unwrap();

    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot["Japan"].len(), 3);

    token_mock.assert_async().await;
    for m in playlist_mocks {
        m.assert_async().await;
    }
}
