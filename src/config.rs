//! Configuration management for the playlist statistics CLI.
//!
//! This module loads environment variables from `.env` files and turns them
//! into an explicit [`Config`] value. Nothing reads the environment after the
//! config has been built: the playlist identifier, credentials, store target
//! and chart settings are all handed to the pipeline from here.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory, then in the working directory
//! 3. Application defaults (where applicable)

use std::{env, fmt, path::PathBuf};

use crate::{
    error::{PipelineError, Result},
    utils,
};

pub const DEFAULT_PLAYLIST_ID: &str = "37i9dQZF1DXatoD1BSWRau";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379/";
pub const DEFAULT_CHART_PATH: &str = "artist_counts.svg";
pub const DEFAULT_CHART_COLOR: &str = "orange";
pub const DEFAULT_TOP: usize = 10;

/// Loads environment variables from a `.env` file.
///
/// Looks in the platform-specific local data directory first and falls back
/// to a `.env` in the working directory:
/// - Linux: `~/.local/share/plstats/.env`
/// - macOS: `~/Library/Application Support/plstats/.env`
/// - Windows: `%LOCALAPPDATA%/plstats/.env`
///
/// Variables that are already set in the process environment are never
/// overwritten. A missing file is not an error, since everything may already
/// be exported; [`Config::from_env`] reports what is actually missing.
///
/// Returns the path of the file that was loaded, if any.
pub fn load_env() -> Option<PathBuf> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("plstats/.env");

    if dotenv::from_path(&path).is_ok() {
        return Some(path);
    }

    dotenv::dotenv().ok()
}

/// Client identifier and secret for the catalog API.
///
/// `Debug` is redacted so the secret cannot end up in a log line.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &"<redacted>")
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Sizes of the two truncated views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    pub top_tracks: usize,
    pub top_artists: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_tracks: DEFAULT_TOP,
            top_artists: DEFAULT_TOP,
        }
    }
}

/// Everything the artist bar chart needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartConfig {
    pub path: PathBuf,
    pub color: (u8, u8, u8),
    pub width: u32,
    pub height: u32,
    /// Highest y tick; grows when an artist has more songs than this.
    pub y_max: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Open the rendered chart in the default viewer.
    pub open: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CHART_PATH),
            color: utils::palette_color(DEFAULT_CHART_COLOR).unwrap_or((0xfb, 0x92, 0x3c)),
            width: 800,
            height: 1000,
            y_max: 20,
            title: "Amount of Songs From Each Artist".to_string(),
            x_label: "Artist Names".to_string(),
            y_label: "Amount of Songs".to_string(),
            open: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub api_url: String,
    pub token_url: String,
    pub redis_url: String,
    pub playlist_id: String,
    pub report: ReportConfig,
    pub chart: ChartConfig,
}

impl Config {
    /// Builds the config from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup.
    ///
    /// `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET` are required, every
    /// other variable falls back to its default. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let required = |key: &'static str| {
            get(key).ok_or_else(|| PipelineError::config(key, "must be set"))
        };

        let number = |key: &'static str, default: usize| -> Result<usize> {
            match get(key) {
                Some(raw) => raw
                    .trim()
                    .parse::<usize>()
                    .map_err(|e| PipelineError::config(key, format!("{raw:?} is not a count: {e}"))),
                None => Ok(default),
            }
        };

        let credentials = Credentials {
            client_id: required("SPOTIFY_CLIENT_ID")?,
            client_secret: required("SPOTIFY_CLIENT_SECRET")?,
        };

        let mut chart = ChartConfig::default();
        if let Some(path) = get("CHART_PATH") {
            chart.path = PathBuf::from(path);
        }
        if let Some(color) = get("CHART_COLOR") {
            chart.color = utils::palette_color(&color)
                .ok_or_else(|| PipelineError::config("CHART_COLOR", format!("unknown color {color:?}")))?;
        }

        Ok(Self {
            credentials,
            api_url: get("SPOTIFY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token_url: get("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            redis_url: get("REDIS_URL").unwrap_or_else(|| DEFAULT_REDIS_URL.to_string()),
            playlist_id: get("PLAYLIST_ID").unwrap_or_else(|| DEFAULT_PLAYLIST_ID.to_string()),
            report: ReportConfig {
                top_tracks: number("TOP_TRACKS", DEFAULT_TOP)?,
                top_artists: number("TOP_ARTISTS", DEFAULT_TOP)?,
            },
            chart,
        })
    }
}
