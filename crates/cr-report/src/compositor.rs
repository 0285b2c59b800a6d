//! Template composition.
//!
//! The document is a root template plus four named fragments. All sources
//! compile once into an immutable [`TemplateSet`]; per-request composition
//! only reads it, so a set can be shared across threads freely.

use crate::assembler::ComposedReportData;
use crate::error::{ReportError, Result};
use handlebars::{handlebars_helper, Handlebars};
use tracing::debug;

/// Registry name of the root template.
const ROOT_TEMPLATE: &str = "report";

/// Fragments the root template references. Missing one is a packaging
/// defect and fails construction, not composition.
const REQUIRED_FRAGMENTS: [&str; 4] = [
    "header",
    "executive-summary",
    "employability",
    "action-plan",
];

// The only logic the template layer supports: numeric threshold checks.
// Anything richer belongs in the assembler. Both helpers require numeric
// operands; other operand types fail composition.
handlebars_helper!(lt: |a: f64, b: f64| a < b);
handlebars_helper!(gte: |a: f64, b: f64| a >= b);

/// Template and stylesheet sources for one document shape.
#[derive(Debug, Clone)]
pub struct TemplateSources {
    pub root: String,
    pub stylesheet: String,
    /// `(name, source)` pairs for the named fragments.
    pub fragments: Vec<(String, String)>,
}

impl TemplateSources {
    /// The sources shipped with this crate.
    pub fn builtin() -> Self {
        Self {
            root: include_str!("../templates/report.hbs").to_string(),
            stylesheet: include_str!("../templates/styles/report.css").to_string(),
            fragments: vec![
                (
                    "header".to_string(),
                    include_str!("../templates/partials/header.hbs").to_string(),
                ),
                (
                    "executive-summary".to_string(),
                    include_str!("../templates/partials/executive-summary.hbs").to_string(),
                ),
                (
                    "employability".to_string(),
                    include_str!("../templates/partials/employability.hbs").to_string(),
                ),
                (
                    "action-plan".to_string(),
                    include_str!("../templates/partials/action-plan.hbs").to_string(),
                ),
            ],
        }
    }
}

/// Compiled, immutable template registry.
#[derive(Debug)]
pub struct TemplateSet {
    registry: Handlebars<'static>,
    stylesheet: String,
}

impl TemplateSet {
    /// Compile the sources shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_sources(TemplateSources::builtin())
    }

    /// Compile a replacement source set.
    ///
    /// Every fragment in [`REQUIRED_FRAGMENTS`] must be present; extra
    /// fragments are allowed.
    pub fn from_sources(sources: TemplateSources) -> Result<Self> {
        for required in REQUIRED_FRAGMENTS {
            if !sources.fragments.iter().any(|(name, _)| name == required) {
                return Err(ReportError::MissingFragment(required.to_string()));
            }
        }

        let mut registry = Handlebars::new();
        registry.register_helper("lt", Box::new(lt));
        registry.register_helper("gte", Box::new(gte));

        for (name, source) in &sources.fragments {
            registry.register_partial(name, source)?;
        }
        registry.register_template_string(ROOT_TEMPLATE, &sources.root)?;

        debug!(
            fragments = sources.fragments.len(),
            "template set compiled"
        );
        Ok(Self {
            registry,
            stylesheet: sources.stylesheet,
        })
    }

    /// Compose the markup document for assembled data.
    ///
    /// Pure given a fixed set: identical data yields byte-identical markup.
    pub fn compose(&self, data: &ComposedReportData) -> Result<String> {
        let mut value = serde_json::to_value(data)?;
        value["css"] = serde_json::Value::String(self.stylesheet.clone());
        Ok(self.registry.render(ROOT_TEMPLATE, &value)?)
    }
}
