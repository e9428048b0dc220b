use plstats::error::PipelineError;
use plstats::management::{MemoryStore, RecordStore, SongStore};
use plstats::types::NormalizedTrack;

// Helper function to create a normalized track
fn create_track(index: usize) -> NormalizedTrack {
    NormalizedTrack {
        artist_name: format!("Artist {}", index % 4),
        track_name: format!("Track {}", index),
        release_year: 1960 + index as i32,
        duration_minutes: (index % 6) as u64,
        duration_seconds: (index % 60) as u8,
        popularity: (index * 7 % 101) as u8,
        track_id: format!("id{}", index),
    }
}

#[test]
fn test_document_round_trip() {
    let track = create_track(3);

    let json = serde_json::to_string(&track).unwrap();
    let back: NormalizedTrack = serde_json::from_str(&json).unwrap();

    assert_eq!(back, track);
}

#[test]
fn test_document_layout() {
    let value = serde_json::to_value(create_track(1)).unwrap();
    let mut fields: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(|k| k.as_str())
        .collect();
    fields.sort();

    assert_eq!(
        fields,
        vec![
            "artist_name",
            "duration_minutes",
            "duration_seconds",
            "popularity",
            "release_year",
            "track_id",
            "track_name",
        ]
    );
}

#[tokio::test]
async fn test_memory_store_keys_pattern() {
    let mut store = MemoryStore::new();
    store.set("songs:1", "a").await.unwrap();
    store.set("songs:2", "b").await.unwrap();
    store.set("albums:1", "c").await.unwrap();

    let mut keys = store.keys("songs:*").await.unwrap();
    keys.sort();
    assert_eq!(keys, vec!["songs:1", "songs:2"]);

    assert_eq!(store.keys("albums:1").await.unwrap(), vec!["albums:1"]);
    assert_eq!(store.get("songs:2").await.unwrap(), Some("b".to_string()));
    assert_eq!(store.get("missing").await.unwrap(), None);

    store.flush_all().await.unwrap();
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_replace_and_load_preserve_order() {
    // More than ten records so lexical key order differs from numeric order
    let tracks: Vec<NormalizedTrack> = (0..23).map(create_track).collect();
    let mut songs = SongStore::new(MemoryStore::new());

    songs.replace_all(&tracks).await.unwrap();
    let reloaded = songs.load_all().await.unwrap();

    assert_eq!(reloaded, tracks);
}

#[tokio::test]
async fn test_records_are_written_under_song_keys() {
    let tracks: Vec<NormalizedTrack> = (0..3).map(create_track).collect();
    let mut songs = SongStore::new(MemoryStore::new());

    songs.replace_all(&tracks).await.unwrap();

    let store = songs.store_mut();
    let mut keys = store.keys("*").await.unwrap();
    keys.sort();
    assert_eq!(keys, vec!["songs:0", "songs:1", "songs:2"]);

    let document = store.get("songs:1").await.unwrap().unwrap();
    let stored: NormalizedTrack = serde_json::from_str(&document).unwrap();
    assert_eq!(stored, tracks[1]);
}

#[tokio::test]
async fn test_replace_flushes_previous_content() {
    let mut store = MemoryStore::new();
    store.set("songs:99", "{}").await.unwrap();
    store.set("unrelated", "value").await.unwrap();

    let tracks: Vec<NormalizedTrack> = (0..2).map(create_track).collect();
    let mut songs = SongStore::new(store);
    songs.replace_all(&tracks).await.unwrap();

    assert_eq!(songs.store().len(), 2);
    assert_eq!(songs.load_all().await.unwrap(), tracks);
}

#[tokio::test]
async fn test_empty_round_trip() {
    let mut songs = SongStore::new(MemoryStore::new());

    songs.replace_all(&[]).await.unwrap();

    assert!(songs.load_all().await.unwrap().is_empty());
    assert!(songs.into_inner().is_empty());
}

#[tokio::test]
async fn test_malformed_document_is_a_store_error() {
    let mut songs = SongStore::new(MemoryStore::new());
    songs.replace_all(&[create_track(0)]).await.unwrap();
    songs.store_mut().set("songs:0", "not json").await.unwrap();

    match songs.load_all().await {
        Err(PipelineError::Store { operation, key, .. }) => {
            assert_eq!(operation, "decode");
            assert_eq!(key, "songs:0");
        }
        other => panic!("expected store error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_foreign_song_key_is_a_store_error() {
    let mut songs = SongStore::new(MemoryStore::new());
    songs.store_mut().set("songs:latest", "{}").await.unwrap();

    match songs.load_all().await {
        Err(PipelineError::Store { operation, key, .. }) => {
            assert_eq!(operation, "keys");
            assert_eq!(key, "songs:latest");
        }
        other => panic!("expected store error, got {:?}", other),
    }
}
