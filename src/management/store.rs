use std::collections::HashMap;

use redis::{AsyncCommands, aio::MultiplexedConnection};

use crate::{
    error::{PipelineError, Result},
    utils,
};

/// Key-value store the normalized records pass through.
///
/// Values are opaque strings; callers decide how records are encoded.
/// `keys` makes no ordering promise.
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    /// Removes every key in the store, not only the ones written by this run.
    async fn flush_all(&mut self) -> Result<()>;

    async fn set(&mut self, key: &str, value: &str) -> Result<()>;

    async fn get(&mut self, key: &str) -> Result<Option<String>>;

    /// Lists the keys matching a glob pattern such as `songs:*`.
    async fn keys(&mut self, pattern: &str) -> Result<Vec<String>>;
}

/// Redis server reached over a multiplexed tokio connection.
///
/// Records are stored as plain string values, so no server module is needed.
pub struct RedisStore {
    conn: MultiplexedConnection,
}

impl RedisStore {
    /// Connects to `url`. Errors name the URL without its credentials.
    pub async fn connect(url: &str) -> Result<Self> {
        let target = utils::redact_url(url);
        let client = redis::Client::open(url)
            .map_err(|e| PipelineError::store("connect", target.as_str(), e))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| PipelineError::store("connect", target.as_str(), e))?;
        Ok(Self { conn })
    }
}

impl RecordStore for RedisStore {
    async fn flush_all(&mut self) -> Result<()> {
        redis::cmd("FLUSHALL")
            .query_async::<()>(&mut self.conn)
            .await
            .map_err(|e| PipelineError::store("flush_all", "*", e))
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn
            .set::<_, _, ()>(key, value)
            .await
            .map_err(|e| PipelineError::store("set", key, e))
    }

    async fn get(&mut self, key: &str) -> Result<Option<String>> {
        self.conn
            .get::<_, Option<String>>(key)
            .await
            .map_err(|e| PipelineError::store("get", key, e))
    }

    async fn keys(&mut self, pattern: &str) -> Result<Vec<String>> {
        self.conn
            .keys::<_, Vec<String>>(pattern)
            .await
            .map_err(|e| PipelineError::store("keys", pattern, e))
    }
}

/// In-process store backed by a `HashMap`.
///
/// Like Redis, key listing comes back in no particular order.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn matches(pattern: &str, key: &str) -> bool {
        match pattern.strip_suffix('*') {
            Some(prefix) => key.starts_with(prefix),
            None => pattern == key,
        }
    }
}

impl RecordStore for MemoryStore {
    async fn flush_all(&mut self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&mut self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    async fn keys(&mut self, pattern: &str) -> Result<Vec<String>> {
        Ok(self
            .entries
            .keys()
            .filter(|key| Self::matches(pattern, key))
            .cloned()
            .collect())
    }
}
