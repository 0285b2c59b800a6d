//! Pipeline error type.

use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Fatal errors surfaced to the pipeline caller.
///
/// Recoverable problems (chart synthesis) never reach this level; they are
/// absorbed and logged inside assembly. Everything here means no artifact
/// was produced, and the original cause stays on the chain.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Template compilation or composition failed (packaging defect).
    #[error(transparent)]
    Report(#[from] cr_report::ReportError),

    /// Engine discovery, page load, settle, or export failed.
    #[error(transparent)]
    Render(#[from] cr_render::RenderError),

    /// The report record could not be parsed.
    #[error("invalid report record: {0}")]
    Record(#[from] serde_json::Error),
}
