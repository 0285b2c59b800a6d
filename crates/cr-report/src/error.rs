//! Error types for report assembly and composition.

use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while composing a report document.
///
/// These are all fatal: a template problem is a packaging defect, not a
/// data defect, and the pipeline fails fast on it. Recoverable problems
/// (chart synthesis) never reach this enum; the assembler absorbs them.
#[derive(Error, Debug)]
pub enum ReportError {
    /// A template source failed to compile or a required fragment is
    /// missing from the set.
    #[error("template error: {0}")]
    Template(#[source] Box<handlebars::TemplateError>),

    /// A required fragment was not registered before compilation.
    #[error("unregistered template fragment '{0}'")]
    MissingFragment(String),

    /// Rendering the compiled template failed (unregistered fragment
    /// reference, helper misuse, non-numeric operand to lt/gte).
    #[error("template composition failed: {0}")]
    Compose(#[source] Box<handlebars::RenderError>),

    /// Composed data could not be serialized for the template layer.
    #[error("report data serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<handlebars::TemplateError> for ReportError {
    fn from(err: handlebars::TemplateError) -> Self {
        ReportError::Template(Box::new(err))
    }
}

impl From<handlebars::RenderError> for ReportError {
    fn from(err: handlebars::RenderError) -> Self {
        ReportError::Compose(Box::new(err))
    }
}
