//! Console tables and the artist bar chart.

use plotters::prelude::*;
use tabled::{Table, Tabled, settings::Style};

use crate::{
    config::ChartConfig,
    error::{PipelineError, Result},
    report::PlaylistReport,
    types::ArtistCount,
};

pub const POPULARITY_BANNER: &str = "##### Displays Song's Popularity #####";
pub const RELEASE_YEAR_BANNER: &str = "##### Displays Song's Release Year #####";

/// Renders rows as a borderless table, header first.
pub fn table<T: Tabled + Clone>(rows: &[T]) -> String {
    let mut table = Table::new(rows.iter().cloned());
    table.with(Style::blank());
    table.to_string()
}

/// Both text views, each preceded by its banner line.
pub fn format_tables(report: &PlaylistReport) -> String {
    format!(
        "\n\t\t\t {popularity_banner}\n\n{popularity}\n\n\n\t\t\t {release_banner}\n\n{release}\n",
        popularity_banner = POPULARITY_BANNER,
        popularity = table(&report.top_popularity),
        release_banner = RELEASE_YEAR_BANNER,
        release = table(&report.by_release_year),
    )
}

pub fn print_tables(report: &PlaylistReport) {
    println!("{}", format_tables(report));
}

/// Draws the artist-count view as a vertical bar chart into an SVG file.
///
/// Artist names go on the x axis, rotated. The y axis has a tick per song
/// from 0 up to `chart.y_max`, or up to the largest count if that is higher.
pub fn render_artist_chart(counts: &[ArtistCount], chart: &ChartConfig) -> Result<()> {
    let render_err = |e: &dyn std::fmt::Display| PipelineError::Render(e.to_string());

    let y_max = counts
        .iter()
        .map(|c| c.count as u32)
        .max()
        .unwrap_or(0)
        .max(chart.y_max);
    let labels: Vec<&str> = counts.iter().map(|c| c.artist_name.as_str()).collect();
    let (r, g, b) = chart.color;
    let color = RGBColor(r, g, b);

    let root = SVGBackend::new(&chart.path, (chart.width, chart.height)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_err(&e))?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(220)
        .y_label_area_size(60)
        .build_cartesian_2d((0..counts.len().max(1)).into_segmented(), 0u32..y_max)
        .map_err(|e| render_err(&e))?;

    let label_font = FontDesc::new(FontFamily::SansSerif, 14.0, FontStyle::Normal)
        .transform(FontTransform::Rotate90);
    let label_of = |value: &SegmentValue<usize>| match value {
        SegmentValue::CenterOf(i) => labels.get(*i).map(|s| s.to_string()).unwrap_or_default(),
        SegmentValue::Exact(_) | SegmentValue::Last => String::new(),
    };

    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len().max(1))
        .x_label_formatter(&label_of)
        .x_label_style(label_font)
        .y_labels(y_max as usize + 1)
        .y_label_formatter(&|v: &u32| v.to_string())
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .draw()
        .map_err(|e| render_err(&e))?;

    ctx.draw_series(
        Histogram::vertical(&ctx)
            .style(color.filled())
            .margin(10)
            .data(counts.iter().enumerate().map(|(i, c)| (i, c.count as u32))),
    )
    .map_err(|e| render_err(&e))?;

    root.present().map_err(|e| render_err(&e))?;
    Ok(())
}
