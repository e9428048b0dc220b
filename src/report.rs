//! Read-only views over the reloaded collection.
//!
//! All sorts are stable: records that compare equal keep the order in which
//! they came back from the store.

use std::collections::HashMap;

use crate::{
    config::ReportConfig,
    types::{ArtistCount, NormalizedTrack, PopularityRow, ReleaseYearRow},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistReport {
    pub top_popularity: Vec<PopularityRow>,
    pub by_release_year: Vec<ReleaseYearRow>,
    pub artist_counts: Vec<ArtistCount>,
}

impl PlaylistReport {
    pub fn build(tracks: &[NormalizedTrack], config: &ReportConfig) -> Self {
        Self {
            top_popularity: top_by_popularity(tracks, config.top_tracks),
            by_release_year: sorted_by_release_year(tracks),
            artist_counts: artist_counts(tracks, config.top_artists),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top_popularity.is_empty()
            && self.by_release_year.is_empty()
            && self.artist_counts.is_empty()
    }
}

/// The `limit` most popular tracks, most popular first.
pub fn top_by_popularity(tracks: &[NormalizedTrack], limit: usize) -> Vec<PopularityRow> {
    let mut ranked: Vec<&NormalizedTrack> = tracks.iter().collect();
    ranked.sort_by(|a, b| b.popularity.cmp(&a.popularity));

    ranked
        .into_iter()
        .take(limit)
        .map(|t| PopularityRow {
            artist_name: t.artist_name.clone(),
            track_name: t.track_name.clone(),
            popularity: t.popularity,
        })
        .collect()
}

/// Every track, oldest release first.
pub fn sorted_by_release_year(tracks: &[NormalizedTrack]) -> Vec<ReleaseYearRow> {
    let mut ordered: Vec<&NormalizedTrack> = tracks.iter().collect();
    ordered.sort_by_key(|t| t.release_year);

    ordered
        .into_iter()
        .map(|t| ReleaseYearRow {
            artist_name: t.artist_name.clone(),
            track_name: t.track_name.clone(),
            release_year: t.release_year,
        })
        .collect()
}

/// Songs per artist for the `limit` artists with the most songs.
///
/// Artists with the same count stay in the order they were first seen.
pub fn artist_counts(tracks: &[NormalizedTrack], limit: usize) -> Vec<ArtistCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<ArtistCount> = Vec::new();

    for track in tracks {
        match positions.get(track.artist_name.as_str()) {
            Some(&pos) => counts[pos].count += 1,
            None => {
                positions.insert(&track.artist_name, counts.len());
                counts.push(ArtistCount {
                    artist_name: track.artist_name.clone(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}
