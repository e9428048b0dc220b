use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Url;

/// Prefix of every key the pipeline writes to the record store.
pub const SONG_KEY_PREFIX: &str = "songs:";

/// Key listing pattern matching exactly the keys produced by [`song_key`].
pub const SONG_KEY_PATTERN: &str = "songs:*";

/// Named colors available for the chart.
pub const PALETTE: [(&str, &str); 5] = [
    ("red", "#ef4444"),
    ("green", "#84cc16"),
    ("orange", "#fb923c"),
    ("blue", "#22d3ee"),
    ("gray", "#475569"),
];

pub fn song_key(index: usize) -> String {
    format!("{SONG_KEY_PREFIX}{index}")
}

/// Returns the position encoded in a `songs:<index>` key.
pub fn parse_song_key(key: &str) -> Option<usize> {
    let suffix = key.strip_prefix(SONG_KEY_PREFIX)?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}

/// Parses a `#rrggbb` hex code.
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Resolves a palette name (case-insensitive) or a `#rrggbb` hex code.
pub fn palette_color(value: &str) -> Option<(u8, u8, u8)> {
    let name = value.trim().to_lowercase();
    let hex = PALETTE
        .iter()
        .find(|(n, _)| *n == name)
        .map_or(value, |(_, hex)| *hex);
    parse_hex_color(hex)
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

/// Connection URL with any username and password removed, safe to print.
///
/// Unparseable input is not echoed back since it may still hold a secret.
pub fn redact_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) => {
            if parsed.set_password(None).is_err() || parsed.set_username("").is_err() {
                return "<redacted>".to_string();
            }
            parsed.to_string()
        }
        Err(_) => "<redacted>".to_string(),
    }
}

/// Absolute form of a written file, falling back to `path` when it cannot
/// be resolved.
pub fn absolute_path(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
