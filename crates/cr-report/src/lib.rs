//! Report data assembly and template composition.
//!
//! Two stages live here:
//!
//! - [`assembler`] turns a raw [`cr_common::ReportRecord`] into a
//!   [`ComposedReportData`]: charts synthesized (with graceful
//!   degradation), competencies tiered and laid out, headline lists built,
//!   gaps and timeline numbers filled, optional sections defaulted, and
//!   branding resolved. It never fails for well-typed input.
//! - [`compositor`] binds that structure to the document template: a root
//!   template plus four named fragments compiled once into an immutable
//!   [`TemplateSet`]. Composition is pure; identical data yields
//!   byte-identical markup.

pub mod assembler;
pub mod compositor;
pub mod config;
pub mod error;

pub use assembler::{assemble, Branding, ComposedReportData, PageSection, TierSection};
pub use compositor::{TemplateSet, TemplateSources};
pub use config::ReportConfig;
pub use error::{ReportError, Result};
