use crate::{
    error::{PipelineError, Result},
    management::RecordStore,
    types::NormalizedTrack,
    utils,
};

/// Writes normalized tracks to a [`RecordStore`] and reads them back.
///
/// Each track is a JSON document under `songs:<index>`, index being its
/// position in the normalized sequence.
pub struct SongStore<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> SongStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Flushes the whole store, then writes every track.
    pub async fn replace_all(&mut self, tracks: &[NormalizedTrack]) -> Result<()> {
        self.store.flush_all().await?;

        for (index, track) in tracks.iter().enumerate() {
            let key = utils::song_key(index);
            let document = serde_json::to_string(track)
                .map_err(|e| PipelineError::store("encode", key.as_str(), e))?;
            self.store.set(&key, &document).await?;
        }

        Ok(())
    }

    /// Reads back every `songs:<index>` record, ordered by index.
    ///
    /// Key listing order is not preserved by the store, so the keys are
    /// sorted by their numeric suffix before the records are fetched.
    pub async fn load_all(&mut self) -> Result<Vec<NormalizedTrack>> {
        let mut indexed = Vec::new();
        for key in self.store.keys(utils::SONG_KEY_PATTERN).await? {
            let index = utils::parse_song_key(&key)
                .ok_or_else(|| PipelineError::store("keys", key.as_str(), "not a song key"))?;
            indexed.push((index, key));
        }
        indexed.sort_by_key(|(index, _)| *index);

        let mut tracks = Vec::with_capacity(indexed.len());
        for (_, key) in indexed {
            let document = self
                .store
                .get(&key)
                .await?
                .ok_or_else(|| PipelineError::store("get", key.as_str(), "key vanished"))?;
            let track: NormalizedTrack = serde_json::from_str(&document)
                .map_err(|e| PipelineError::store("decode", key.as_str(), e))?;
            tracks.push(track);
        }

        Ok(tracks)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
