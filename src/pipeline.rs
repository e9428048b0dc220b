//! The linear report pipeline.
//!
//! ```text
//! TrackSource → normalize → SongStore (flush, write, reload) → PlaylistReport
//! ```
//!
//! Every collaborator is passed in; nothing here reaches for global state.
//! Each stage runs to completion before the next one starts and the first
//! error aborts the run.

use crate::{
    config::ReportConfig,
    error::Result,
    management::{RecordStore, SongStore},
    normalize,
    report::PlaylistReport,
    spotify::TrackSource,
    types::NormalizedTrack,
};

/// Fetches a playlist and normalizes its tracks.
pub async fn fetch_normalized<C: TrackSource>(
    catalog: &mut C,
    playlist_id: &str,
) -> Result<Vec<NormalizedTrack>> {
    let raw = catalog.playlist_tracks(playlist_id).await?;
    normalize::normalize_tracks(&raw)
}

/// Writes the tracks to the store and returns what reads back.
pub async fn round_trip<S: RecordStore>(
    songs: &mut SongStore<S>,
    tracks: &[NormalizedTrack],
) -> Result<Vec<NormalizedTrack>> {
    songs.replace_all(tracks).await?;
    songs.load_all().await
}

/// Runs the whole pipeline and returns the three views.
pub async fn run<C: TrackSource, S: RecordStore>(
    catalog: &mut C,
    songs: &mut SongStore<S>,
    playlist_id: &str,
    config: &ReportConfig,
) -> Result<PlaylistReport> {
    let tracks = fetch_normalized(catalog, playlist_id).await?;
    let reloaded = round_trip(songs, &tracks).await?;
    Ok(PlaylistReport::build(&reloaded, config))
}
