//! Error types for PDF rendering.

use thiserror::Error;

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while exporting the PDF artifact.
///
/// All of these are fatal to the current generation: the pipeline reports
/// them to the caller and leaves nothing at the destination path.
#[derive(Error, Debug)]
pub enum RenderError {
    /// No engine executable was found and the environment is not managed.
    #[error("no rendering engine executable found (strategies tried: {searched})")]
    EngineDiscovery { searched: String },

    /// The engine binary was located but failed to start.
    #[error("failed to launch rendering engine: {0}")]
    EngineLaunch(String),

    /// The markup page could not be loaded into the engine.
    #[error("failed to load report markup: {0}")]
    PageLoad(String),

    /// Parse or asset quiescence did not complete within the bounded wait.
    #[error("page did not settle within {timeout_secs}s: {reason}")]
    Timeout { timeout_secs: u64, reason: String },

    /// PDF generation or the artifact write failed.
    #[error("failed to export PDF artifact: {0}")]
    Export(String),

    /// Filesystem error around the scratch file or destination.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
