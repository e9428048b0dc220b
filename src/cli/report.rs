use std::path::PathBuf;

use crate::{
    config::Config,
    error, info,
    error::Result,
    management::{MemoryStore, RecordStore, RedisStore, SongStore},
    pipeline, render,
    report::PlaylistReport,
    spotify::SpotifyClient,
    success, utils, warning,
};

/// Command-line overrides applied on top of the loaded [`Config`].
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub playlist: Option<String>,
    pub chart: Option<PathBuf>,
    pub no_open: bool,
    pub in_memory: bool,
}

impl ReportOptions {
    pub fn apply(&self, config: &mut Config) {
        if let Some(playlist) = &self.playlist {
            config.playlist_id = playlist.clone();
        }
        if let Some(chart) = &self.chart {
            config.chart.path = chart.clone();
        }
        if self.no_open {
            config.chart.open = false;
        }
    }
}

/// Fetches the configured playlist, passes it through the record store and
/// prints the popularity and release year tables before rendering the
/// artist chart.
///
/// Any failure prints the error to standard error and exits with code 1.
pub async fn report(options: ReportOptions) {
    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    };
    options.apply(&mut config);

    let result = if options.in_memory {
        info!("Using the in-memory record store.");
        build_report(&config, MemoryStore::new()).await
    } else {
        let pb = utils::spinner("Connecting to the record store...");
        let store = RedisStore::connect(&config.redis_url).await;
        pb.finish_and_clear();
        match store {
            Ok(store) => build_report(&config, store).await,
            Err(e) => Err(e),
        }
    };

    let report = match result {
        Ok(report) => report,
        Err(e) => error!("{}", e),
    };

    render::print_tables(&report);

    if let Err(e) = render::render_artist_chart(&report.artist_counts, &config.chart) {
        error!("{}", e);
    }
    let chart_path = utils::absolute_path(&config.chart.path);
    success!("Artist chart written to {}", chart_path.display());

    if config.chart.open && webbrowser::open(&chart_path.to_string_lossy()).is_err() {
        warning!(
            "Failed to open the chart. Please open the following file manually:\n{}",
            chart_path.display()
        );
    }
}

async fn build_report<S: RecordStore>(config: &Config, store: S) -> Result<PlaylistReport> {
    let mut catalog = SpotifyClient::from_config(config);

    let pb = utils::spinner(&format!("Fetching playlist {}...", config.playlist_id));
    let tracks = pipeline::fetch_normalized(&mut catalog, &config.playlist_id).await;
    pb.finish_and_clear();
    let tracks = tracks?;
    success!("Fetched {} tracks.", tracks.len());

    let pb = utils::spinner("Passing tracks through the record store...");
    let mut songs = SongStore::new(store);
    let reloaded = pipeline::round_trip(&mut songs, &tracks).await;
    pb.finish_and_clear();
    let reloaded = reloaded?;
    success!("Reloaded {} tracks from the record store.", reloaded.len());

    Ok(PlaylistReport::build(&reloaded, &config.report))
}
