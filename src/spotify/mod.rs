//! # Spotify Integration Module
//!
//! This module is the catalog side of the pipeline: it authenticates against
//! the Spotify Web API and turns one page of a playlist's tracks into
//! [`RawTrack`] values.
//!
//! ## Architecture
//!
//! ```text
//! Pipeline (fetch → normalize → store → report)
//!          ↓
//! TrackSource trait
//!          ↓
//! SpotifyClient
//!     ├── Authentication (client-credentials grant)
//!     └── Playlist tracks (single page)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Requests an access token with the client identifier and
//!   secret. No user interaction and no refresh token are involved.
//! - [`playlist`] - Fetches `GET /playlists/{id}/tracks` and converts the
//!   wire items into raw tracks.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Client-credentials token request
//! - `GET /playlists/{playlist_id}/tracks` - First page (up to 100 items)
//!
//! ## Error Types
//!
//! Every function returns [`crate::error::Result`]. Network failures, rejected
//! credentials, unknown playlists and undecodable bodies all surface as
//! `PipelineError::Fetch` naming the operation. Nothing is retried.

pub mod auth;
pub mod playlist;

use reqwest::{Client, StatusCode};

use crate::{
    config::Config,
    error::{PipelineError, Result},
    management::TokenManager,
    types::RawTrack,
};

pub const TOKEN_OPERATION: &str = "request_token";
pub const PLAYLIST_OPERATION: &str = "playlist_tracks";

/// Maps a non-success catalog answer to the fetch error naming its cause.
///
/// 401 and 403 mean the credentials were rejected, as does a 400 from the
/// token endpoint. 404 means `subject` does not exist. Success yields `None`.
pub fn status_error(
    operation: &'static str,
    status: StatusCode,
    subject: &str,
) -> Option<PipelineError> {
    if status.is_success() {
        return None;
    }

    let message = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            format!("authentication rejected ({status})")
        }
        StatusCode::BAD_REQUEST if operation == TOKEN_OPERATION => {
            format!("authentication rejected ({status})")
        }
        StatusCode::NOT_FOUND => format!("{subject} not found"),
        _ => format!("{subject}: catalog answered {status}"),
    };

    Some(PipelineError::fetch(operation, message))
}

/// Anything that can hand over the tracks of a playlist.
#[allow(async_fn_in_trait)]
pub trait TrackSource {
    /// Returns the playlist's tracks in playlist order.
    async fn playlist_tracks(&mut self, playlist_id: &str) -> Result<Vec<RawTrack>>;
}

/// Production [`TrackSource`] talking to the Spotify Web API.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    tokens: TokenManager,
}

impl SpotifyClient {
    pub fn new(http: Client, api_url: impl Into<String>, tokens: TokenManager) -> Self {
        Self {
            http,
            api_url: api_url.into(),
            tokens,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Client::new(),
            config.api_url.clone(),
            TokenManager::new(config.credentials.clone(), config.token_url.clone()),
        )
    }
}

impl TrackSource for SpotifyClient {
    async fn playlist_tracks(&mut self, playlist_id: &str) -> Result<Vec<RawTrack>> {
        let token = self.tokens.get_valid_token(&self.http).await?;
        playlist::get_playlist_tracks(&self.http, &self.api_url, &token, playlist_id).await
    }
}
