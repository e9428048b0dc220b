//! # CLI Module
//!
//! Command-line layer of the playlist statistics tool. It turns the loaded
//! configuration and command-line overrides into one pipeline run and owns
//! everything the user sees while it happens: spinners, status lines, the two
//! tables and the chart.
//!
//! ## Commands
//!
//! - [`report`] - Fetch, store, reload and report on the configured playlist
//!
//! ## Error Handling
//!
//! Failures are not recovered. The `error!` macro prints the failing
//! operation with its key or identifier to standard error and exits with
//! code 1.
//!
//! ## Usage
//!
//! ```bash
//! plstats                              # Report on PLAYLIST_ID from the environment
//! plstats --playlist 37i9dQZF1DXatoD1BSWRau --no-open
//! plstats --in-memory --chart out.svg  # Run without a Redis server
//! ```

mod report;

pub use report::ReportOptions;
pub use report::report;
