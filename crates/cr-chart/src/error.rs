//! Error types for chart synthesis.

use thiserror::Error;

/// Result type for chart operations.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Errors that can occur while synthesizing a chart image.
///
/// All variants carry the dataset name so a degraded report can say which
/// visual went missing.
#[derive(Error, Debug)]
pub enum ChartError {
    /// The raster surface could not be allocated.
    #[error("could not create {width}x{height} raster surface for chart '{dataset}'")]
    Surface {
        dataset: String,
        width: u32,
        height: u32,
    },

    /// The generated SVG failed to parse back into a render tree.
    #[error("generated SVG for chart '{dataset}' did not parse: {reason}")]
    Svg { dataset: String, reason: String },

    /// PNG encoding failed.
    #[error("could not encode PNG for chart '{dataset}': {reason}")]
    Encode { dataset: String, reason: String },
}

impl ChartError {
    /// Name of the dataset the failed chart was built from.
    pub fn dataset(&self) -> &str {
        match self {
            ChartError::Surface { dataset, .. }
            | ChartError::Svg { dataset, .. }
            | ChartError::Encode { dataset, .. } => dataset,
        }
    }
}
