use reqwest::Client;

use super::{PLAYLIST_OPERATION, status_error};
use crate::{
    error::{PipelineError, Result},
    types::{PlaylistTrack, PlaylistTracksResponse, RawTrack},
};

/// Items requested per call. Only the first page is ever fetched.
pub const PAGE_LIMIT: u32 = 100;

/// Fetches the first page of a playlist's tracks.
pub async fn get_playlist_tracks(
    client: &Client,
    api_url: &str,
    token: &str,
    playlist_id: &str,
) -> Result<Vec<RawTrack>> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks?limit={limit}",
        uri = api_url.trim_end_matches('/'),
        id = playlist_id,
        limit = PAGE_LIMIT
    );

    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| PipelineError::fetch(PLAYLIST_OPERATION, e))?;

    if let Some(err) = status_error(
        PLAYLIST_OPERATION,
        response.status(),
        &format!("playlist {playlist_id}"),
    ) {
        return Err(err);
    }

    let page = response
        .json::<PlaylistTracksResponse>()
        .await
        .map_err(|e| PipelineError::fetch(PLAYLIST_OPERATION, e))?;

    raw_tracks(page)
}

/// Flattens a playlist page into raw tracks, keeping playlist order.
///
/// Items without a track (removed or unavailable entries) are rejected rather
/// than skipped, so every playlist position maps to exactly one record.
pub fn raw_tracks(page: PlaylistTracksResponse) -> Result<Vec<RawTrack>> {
    page.items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            item.track
                .map(RawTrack::from)
                .ok_or_else(|| PipelineError::Validation {
                    index,
                    track_id: String::new(),
                    field: "track",
                    message: "playlist item has no track".to_string(),
                })
        })
        .collect()
}

impl From<PlaylistTrack> for RawTrack {
    fn from(track: PlaylistTrack) -> Self {
        RawTrack {
            artist_name: track
                .artists
                .into_iter()
                .next()
                .map(|a| a.name)
                .unwrap_or_default(),
            track_name: track.name,
            release_date: track.album.release_date.unwrap_or_default(),
            duration_ms: track.duration_ms,
            popularity: track.popularity,
            track_id: track.id.unwrap_or_default(),
        }
    }
}
