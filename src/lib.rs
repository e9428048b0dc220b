//! Playlist statistics CLI library
//!
//! This library fetches the tracks of a Spotify playlist, flattens them into
//! normalized records, passes the records through a key-value store and builds
//! three reports from what comes back: the most popular tracks, every track
//! ordered by release year and the number of songs per artist.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared by every stage of the pipeline
//! - `management` - Token handling and the record store
//! - `normalize` - Raw track to normalized record conversion
//! - `pipeline` - The fetch, normalize, store and report sequence
//! - `render` - Console tables and the artist bar chart
//! - `report` - Popularity, release year and artist count views
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use plstats::{config, config::Config};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> plstats::error::Result<()> {
//!     config::load_env();
//!     let config = Config::from_env()?;
//!     // Hand the config to the pipeline...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod normalize;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// The macro accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Fetching playlist {}", playlist_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// The macro accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// success!("Fetched {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark to standard error and
/// exits the program with code 1.
///
/// Every pipeline failure ends up here: nothing is retried or recovered, the
/// message carries the operation and the offending key or identifier.
///
/// # Example
///
/// ```
/// error!("Store operation failed: {}", err);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for issues that do not abort the run, such as a chart that could not
/// be opened in a viewer.
///
/// # Example
///
/// ```
/// warning!("Cannot open {} automatically", path.display());
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
