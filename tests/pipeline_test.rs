use plstats::config::ReportConfig;
use plstats::error::{PipelineError, Result};
use plstats::management::{MemoryStore, RecordStore, SongStore};
use plstats::pipeline;
use plstats::spotify::TrackSource;
use plstats::types::RawTrack;

/// Catalog stand-in serving a fixed playlist.
struct FakeCatalog {
    tracks: Vec<RawTrack>,
    requested: Vec<String>,
}

impl FakeCatalog {
    fn new(tracks: Vec<RawTrack>) -> Self {
        Self {
            tracks,
            requested: Vec::new(),
        }
    }
}

impl TrackSource for FakeCatalog {
    async fn playlist_tracks(&mut self, playlist_id: &str) -> Result<Vec<RawTrack>> {
        self.requested.push(playlist_id.to_string());
        Ok(self.tracks.clone())
    }
}

/// Catalog stand-in whose playlist does not exist.
struct MissingPlaylist;

impl TrackSource for MissingPlaylist {
    async fn playlist_tracks(&mut self, playlist_id: &str) -> Result<Vec<RawTrack>> {
        Err(PipelineError::fetch(
            "playlist_tracks",
            format!("playlist {} not found", playlist_id),
        ))
    }
}

// Helper function to create a raw track
fn create_raw_track(artist: &str, name: &str, release_date: &str, popularity: i64) -> RawTrack {
    RawTrack {
        artist_name: artist.to_string(),
        track_name: name.to_string(),
        release_date: release_date.to_string(),
        duration_ms: 185_000,
        popularity,
        track_id: format!("{}-{}", artist, name),
    }
}

#[tokio::test]
async fn test_run_builds_all_views() {
    let mut catalog = FakeCatalog::new(vec![
        create_raw_track("Blue Swede", "Hooked on a Feeling", "1974-01-01", 0),
        create_raw_track("Redbone", "Come and Get Your Love", "1974-06-01", 50),
        create_raw_track("Blue Swede", "Hooked Again", "2017-08-04", 0),
        create_raw_track("The Runaways", "Cherry Bomb", "1971-01-01", 70),
    ]);
    let mut songs = SongStore::new(MemoryStore::new());

    let report = pipeline::run(&mut catalog, &mut songs, "gotg", &ReportConfig::default())
        .await
        .unwrap();

    assert_eq!(catalog.requested, vec!["gotg"]);

    // Zero popularities are backfilled with round((50 + 70) / 2)
    let popularity: Vec<(String, u8)> = report
        .top_popularity
        .iter()
        .map(|r| (r.track_name.clone(), r.popularity))
        .collect();
    assert_eq!(
        popularity,
        vec![
            ("Cherry Bomb".to_string(), 70),
            ("Hooked on a Feeling".to_string(), 60),
            ("Hooked Again".to_string(), 60),
            ("Come and Get Your Love".to_string(), 50),
        ]
    );

    let years: Vec<i32> = report.by_release_year.iter().map(|r| r.release_year).collect();
    assert_eq!(years, vec![1971, 1974, 1974, 2017]);
    assert_eq!(report.by_release_year[1].track_name, "Hooked on a Feeling");

    assert_eq!(report.artist_counts[0].artist_name, "Blue Swede");
    assert_eq!(report.artist_counts[0].count, 2);
    assert_eq!(report.artist_counts.len(), 3);

    // The store holds exactly one record per track
    assert_eq!(songs.store().len(), 4);
}

#[tokio::test]
async fn test_round_trip_is_identity() {
    let mut catalog = FakeCatalog::new(
        (0..15)
            .map(|i| create_raw_track("A", &format!("t{}", i), "2001-02-03", i))
            .collect(),
    );
    let mut songs = SongStore::new(MemoryStore::new());

    let tracks = pipeline::fetch_normalized(&mut catalog, "p").await.unwrap();
    let reloaded = pipeline::round_trip(&mut songs, &tracks).await.unwrap();

    assert_eq!(tracks.len(), 15);
    assert_eq!(reloaded, tracks);
}

#[tokio::test]
async fn test_empty_playlist_yields_empty_views() {
    let mut catalog = FakeCatalog::new(Vec::new());
    let mut songs = SongStore::new(MemoryStore::new());

    let report = pipeline::run(&mut catalog, &mut songs, "empty", &ReportConfig::default())
        .await
        .unwrap();

    assert!(report.is_empty());
    assert!(songs.store().is_empty());
}

#[tokio::test]
async fn test_fetch_error_aborts_run() {
    let mut store = MemoryStore::new();
    store.set("songs:0", "untouched").await.unwrap();
    let mut songs = SongStore::new(store);

    let result =
        pipeline::run(&mut MissingPlaylist, &mut songs, "nope", &ReportConfig::default()).await;

    assert!(matches!(
        result,
        Err(PipelineError::Fetch {
            operation: "playlist_tracks",
            ..
        })
    ));
    // Nothing was flushed before the failure
    assert_eq!(songs.store().len(), 1);
}

#[tokio::test]
async fn test_parse_error_aborts_before_store() {
    let mut catalog = FakeCatalog::new(vec![
        create_raw_track("A", "ok", "2001-01-01", 10),
        create_raw_track("B", "bad", "n/a", 10),
    ]);
    let mut songs = SongStore::new(MemoryStore::new());

    let result = pipeline::run(&mut catalog, &mut songs, "p", &ReportConfig::default()).await;

    assert!(matches!(result, Err(PipelineError::Parse { index: 1, .. })));
    assert!(songs.store().is_empty());
}
