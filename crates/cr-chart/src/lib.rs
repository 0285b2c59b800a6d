//! Chart synthesis for competency reports.
//!
//! Two chart shapes, both produced as deterministic SVG and rasterized to
//! fixed-size PNG bytes suitable for inline `data:` embedding:
//!
//! - radar profile: one polygon per series on a 0-10 radial axis
//! - gap analysis: paired required/actual bars per competency
//!
//! Chart failure is recoverable by contract: callers omit the image and
//! continue with the rest of the report.

pub mod error;
pub mod raster;
pub mod svg;

mod chart;

pub use chart::{
    render_gap_bars, render_gap_bars_with, render_radar, render_radar_with, ChartConfig,
    ChartImage, PLACEHOLDER_SERIES,
};
pub use error::{ChartError, Result};
