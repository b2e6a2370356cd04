use std::{fmt, ops::Index};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};
use serde_json::{Map, Value};
use tabled::Tabled;

/// Bearer token obtained through the client-credentials flow.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        AccessToken(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<TrackEntry>,
}

/// One playlist item, kept exactly as Spotify returned it.
///
/// Items are stored as raw JSON objects so absent and `null` fields survive
/// the snapshot unchanged; the accessors read the chart-relevant parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackEntry(Map<String, Value>);

impl TrackEntry {
    pub fn added_at(&self) -> Option<&str> {
        self.0.get("added_at").and_then(Value::as_str)
    }

    pub fn track_name(&self) -> Option<&str> {
        self.track()?.get("name").and_then(Value::as_str)
    }

    pub fn artist_names(&self) -> Vec<&str> {
        self.track()
            .and_then(|track| track.get("artists"))
            .and_then(Value::as_array)
            .map(|artists| {
                artists
                    .iter()
                    .filter_map(|a| a.get("name").and_then(Value::as_str))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn track(&self) -> Option<&Map<String, Value>> {
        self.0.get("track").and_then(Value::as_object)
    }
}

impl From<Map<String, Value>> for TrackEntry {
    fn from(item: Map<String, Value>) -> Self {
        TrackEntry(item)
    }
}

/// Country name to chart entries, in the order countries were collected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSnapshot {
    countries: Vec<(String, Vec<TrackEntry>)>,
}

impl ChartSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `entries` for `country`; an existing country keeps its position.
    pub fn insert(&mut self, country: String, entries: Vec<TrackEntry>) {
        match self.countries.iter_mut().find(|(name, _)| *name == country) {
            Some((_, existing)) => *existing = entries,
            None => self.countries.push((country, entries)),
        }
    }

    pub fn get(&self, country: &str) -> Option<&Vec<TrackEntry>> {
        self.countries
            .iter()
            .find(|(name, _)| name == country)
            .map(|(_, entries)| entries)
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl Index<&str> for ChartSnapshot {
    type Output = Vec<TrackEntry>;

    fn index(&self, country: &str) -> &Self::Output {
        match self.get(country) {
            Some(entries) => entries,
            None => panic!("no chart for country {}", country),
        }
    }
}

impl FromIterator<(String, Vec<TrackEntry>)> for ChartSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, Vec<TrackEntry>)>>(iter: I) -> Self {
        let mut snapshot = ChartSnapshot::new();
        for (country, entries) in iter {
            snapshot.insert(country, entries);
        }
        snapshot
    }
}

impl Serialize for ChartSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.countries.len()))?;
        for (country, entries) in &self.countries {
            map.serialize_entry(country, entries)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ChartSnapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SnapshotVisitor;

        impl<'de> Visitor<'de> for SnapshotVisitor {
            type Value = ChartSnapshot;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of country names to chart entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ChartSnapshot, A::Error> {
                let mut snapshot = ChartSnapshot::new();
                while let Some((country, entries)) = map.next_entry::<String, Vec<TrackEntry>>()? {
                    snapshot.insert(country, entries);
                }
                Ok(snapshot)
            }
        }

        deserializer.deserialize_map(SnapshotVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistRef {
    pub id: Option<String>,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub explicit: Option<bool>,
    #[serde(default)]
    pub popularity: Option<u32>,
    #[serde(default)]
    pub track_number: Option<u32>,
    #[serde(default)]
    pub disc_number: Option<u32>,
    pub album: TrackAlbum,
    pub artists: Vec<ArtistRef>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub album_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub id: String,
    #[serde(default)]
    pub danceability: Option<f64>,
    #[serde(default)]
    pub energy: Option<f64>,
    #[serde(default)]
    pub key: Option<i32>,
    #[serde(default)]
    pub loudness: Option<f64>,
    #[serde(default)]
    pub mode: Option<i32>,
    #[serde(default)]
    pub speechiness: Option<f64>,
    #[serde(default)]
    pub acousticness: Option<f64>,
    #[serde(default)]
    pub instrumentalness: Option<f64>,
    #[serde(default)]
    pub liveness: Option<f64>,
    #[serde(default)]
    pub valence: Option<f64>,
    #[serde(default)]
    pub tempo: Option<f64>,
    #[serde(default)]
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub time_signature: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTracksResponse {
    pub items: Vec<AlbumTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTrack {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Tabled)]
pub struct CountryTableRow {
    pub country: String,
    pub playlist: String,
}

#[derive(Tabled)]
pub struct ChartTableRow {
    pub position: usize,
    pub name: String,
    pub artists: String,
    pub added_at: String,
}
