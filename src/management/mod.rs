mod auth;
mod songs;
mod store;

pub use auth::TokenManager;
pub use songs::SongStore;
pub use store::MemoryStore;
pub use store::RecordStore;
pub use store::RedisStore;
