use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Access token issued by the client-credentials grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    #[serde(default)]
    pub obtained_at: u64,
}

/// One page of `GET /playlists/{id}/tracks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    pub id: Option<String>,
    pub name: String,
    pub popularity: i64,
    pub duration_ms: i64,
    pub artists: Vec<TrackArtist>,
    pub album: TrackAlbum,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub release_date: Option<String>,
}

/// A track as the catalog hands it over, before any derived field exists.
///
/// Durations and popularities are kept signed so out-of-domain values coming
/// from the wire can be reported instead of silently wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTrack {
    pub artist_name: String,
    pub track_name: String,
    pub release_date: String,
    pub duration_ms: i64,
    pub popularity: i64,
    pub track_id: String,
}

/// Flat record stored under `songs:<index>` and consumed by the reports.
///
/// The serialized field names are the persisted document layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTrack {
    pub artist_name: String,
    pub track_name: String,
    pub release_year: i32,
    pub duration_minutes: u64,
    pub duration_seconds: u8,
    pub popularity: u8,
    pub track_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct PopularityRow {
    pub artist_name: String,
    pub track_name: String,
    pub popularity: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct ReleaseYearRow {
    pub artist_name: String,
    pub track_name: String,
    pub release_year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct ArtistCount {
    pub artist_name: String,
    pub count: usize,
}
