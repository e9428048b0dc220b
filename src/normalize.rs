//! Raw track to normalized record conversion.
//!
//! Normalization runs in two passes over one playlist. The first pass averages
//! the nonzero popularities, the second maps every raw track to a
//! [`NormalizedTrack`] and substitutes that average wherever the catalog
//! reported a popularity of 0.
//!
//! A popularity of 0 is treated as "unknown" even though the catalog may mean
//! a genuine zero; both cases are backfilled identically.

use crate::{
    error::{PipelineError, Result},
    types::{NormalizedTrack, RawTrack},
};

const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;
const MAX_POPULARITY: i64 = 100;

/// Rounded mean of the nonzero popularities, or 0 when there are none.
///
/// Halves round to the nearest even integer, so `[61, 62]` gives 62 and
/// `[60, 61]` gives 60.
pub fn average_popularity(popularities: &[i64]) -> u8 {
    let nonzero: Vec<i64> = popularities.iter().copied().filter(|p| *p != 0).collect();
    if nonzero.is_empty() {
        return 0;
    }

    let mean = nonzero.iter().sum::<i64>() as f64 / nonzero.len() as f64;
    mean.round_ties_even().clamp(0.0, MAX_POPULARITY as f64) as u8
}

/// Leading year of a release date such as `2017-08-04`, `1971-01` or `1984`.
pub fn parse_release_year(date: &str) -> Option<i32> {
    date.split('-').next()?.trim().parse().ok()
}

/// Normalizes every track of one playlist, preserving order and length.
pub fn normalize_tracks(tracks: &[RawTrack]) -> Result<Vec<NormalizedTrack>> {
    let popularities: Vec<i64> = tracks.iter().map(|t| t.popularity).collect();
    let average = average_popularity(&popularities);

    tracks
        .iter()
        .enumerate()
        .map(|(index, track)| normalize_track(index, track, average))
        .collect()
}

/// Normalizes one track, replacing a popularity of 0 with `average`.
pub fn normalize_track(index: usize, track: &RawTrack, average: u8) -> Result<NormalizedTrack> {
    let invalid = |field: &'static str, message: String| PipelineError::Validation {
        index,
        track_id: track.track_id.clone(),
        field,
        message,
    };

    if track.artist_name.trim().is_empty() {
        return Err(invalid("artist_name", "must not be empty".to_string()));
    }
    if track.track_name.trim().is_empty() {
        return Err(invalid("track_name", "must not be empty".to_string()));
    }
    if track.duration_ms < 0 {
        return Err(invalid(
            "duration_ms",
            format!("{} is negative", track.duration_ms),
        ));
    }
    if !(0..=MAX_POPULARITY).contains(&track.popularity) {
        return Err(invalid(
            "popularity",
            format!("{} is outside 0..=100", track.popularity),
        ));
    }

    let release_year =
        parse_release_year(&track.release_date).ok_or_else(|| PipelineError::Parse {
            index,
            track_id: track.track_id.clone(),
            date: track.release_date.clone(),
        })?;

    let popularity = match track.popularity {
        0 => average,
        p => p as u8,
    };

    Ok(NormalizedTrack {
        artist_name: track.artist_name.clone(),
        track_name: track.track_name.clone(),
        release_year,
        duration_minutes: (track.duration_ms / MS_PER_MINUTE) as u64,
        duration_seconds: ((track.duration_ms / MS_PER_SECOND) % 60) as u8,
        popularity,
        track_id: track.track_id.clone(),
    })
}
