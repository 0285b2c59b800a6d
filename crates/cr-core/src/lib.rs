//! Competency report generation pipeline.
//!
//! Wires the leaf crates into the linear flow: raw record -> assembled
//! data -> composed markup -> PDF artifact. The [`ReportPipeline`] compiles
//! the template set once at construction; per-request work is pure until
//! the render step, so concurrent generations only need separate engine
//! instances, which the renderer already guarantees.

pub mod error;
pub mod pipeline;

pub use error::{PipelineError, Result};
pub use pipeline::{PipelineConfig, RenderArtifact, ReportPipeline};
