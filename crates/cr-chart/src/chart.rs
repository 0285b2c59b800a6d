//! Public chart API.

use crate::error::Result;
use crate::raster::rasterize;
use crate::svg;
use base64::Engine;
use cr_common::GapAnalysisEntry;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Placeholder profile rendered when radar data arrives without any series.
pub const PLACEHOLDER_SERIES: [f64; 5] = [8.0, 6.0, 7.0, 5.0, 9.0];

/// Chart geometry configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Square output edge in pixels.
    #[serde(default = "default_size")]
    pub size: u32,
}

fn default_size() -> u32 {
    600
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
        }
    }
}

/// A rasterized chart ready for inline embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartImage {
    png: Vec<u8>,
}

impl ChartImage {
    /// Raw PNG bytes.
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    /// `data:` URI for inline embedding in markup.
    pub fn data_uri(&self) -> String {
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.png)
        )
    }
}

/// Render the radar profile chart.
///
/// Missing labels or series fall back to the documented placeholders; a
/// length mismatch renders the shorter length. Values outside [0, 10] are
/// clamped to the axis.
pub fn render_radar(labels: &[String], series: &[Vec<f64>]) -> Result<ChartImage> {
    render_radar_with(labels, series, &ChartConfig::default())
}

/// [`render_radar`] with explicit geometry.
pub fn render_radar_with(
    labels: &[String],
    series: &[Vec<f64>],
    config: &ChartConfig,
) -> Result<ChartImage> {
    let default_labels: Vec<String>;
    let labels = if labels.is_empty() {
        default_labels = (1..=PLACEHOLDER_SERIES.len())
            .map(|i| format!("Item {i}"))
            .collect();
        &default_labels
    } else {
        labels
    };

    let placeholder: Vec<Vec<f64>>;
    let series = if series.is_empty() || series.iter().any(Vec::is_empty) {
        debug!("radar series missing or empty, using placeholder profile");
        placeholder = vec![PLACEHOLDER_SERIES.to_vec()];
        &placeholder
    } else {
        series
    };

    let svg = svg::radar_svg(labels, series, config.size);
    let png = rasterize("radar", &svg, config.size, config.size)?;
    Ok(ChartImage { png })
}

/// Render the required-vs-actual gap bar chart.
pub fn render_gap_bars(entries: &[GapAnalysisEntry]) -> Result<ChartImage> {
    render_gap_bars_with(entries, &ChartConfig::default())
}

/// [`render_gap_bars`] with explicit geometry.
pub fn render_gap_bars_with(
    entries: &[GapAnalysisEntry],
    config: &ChartConfig,
) -> Result<ChartImage> {
    let svg = svg::gap_bars_svg(entries, config.size);
    let png = rasterize("gap-analysis", &svg, config.size, config.size)?;
    Ok(ChartImage { png })
}
