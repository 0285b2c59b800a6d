//! Pipeline orchestration.

use crate::error::Result;
use cr_common::ReportRecord;
use cr_render::{RenderConfig, Renderer};
use cr_report::{assemble, ReportConfig, TemplateSet, TemplateSources};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Combined configuration for one pipeline instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// The finished artifact. The file belongs to the caller once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderArtifact {
    pub path: PathBuf,
    /// Size on disk; with presence, the externally observable success
    /// signal.
    pub bytes: u64,
}

/// One configured report pipeline.
///
/// Construction compiles the template set; it is immutable afterwards and
/// safe to share across threads. Each `generate` call is independent and
/// owns its own rendering engine instance. No retries happen here; a
/// caller that wants them wraps the whole call.
pub struct ReportPipeline {
    config: PipelineConfig,
    templates: TemplateSet,
    renderer: Renderer,
}

impl ReportPipeline {
    /// Pipeline with the built-in template set.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        Self::with_templates(config, TemplateSources::builtin())
    }

    /// Pipeline with replacement template sources.
    pub fn with_templates(config: PipelineConfig, sources: TemplateSources) -> Result<Self> {
        let templates = TemplateSet::from_sources(sources)?;
        let renderer = Renderer::new(config.render.clone());
        Ok(Self {
            config,
            templates,
            renderer,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Assemble and compose without rendering.
    ///
    /// This is the whole pipeline minus the engine: useful for inspecting
    /// the markup and for tests on hosts without a browser.
    pub fn compose_markup(&self, record: ReportRecord) -> Result<String> {
        let composed = assemble(record, &self.config.report);
        Ok(self.templates.compose(&composed)?)
    }

    /// Generate the PDF artifact at `destination`.
    ///
    /// The destination directory must already exist. On any error, nothing
    /// is left at the destination path.
    pub fn generate(&self, record: ReportRecord, destination: &Path) -> Result<RenderArtifact> {
        let markup = self.compose_markup(record)?;
        self.renderer.render(&markup, destination)?;

        let bytes = std::fs::metadata(destination).map(|m| m.len()).unwrap_or(0);
        info!(
            path = %destination.display(),
            bytes,
            "report generated"
        );
        Ok(RenderArtifact {
            path: destination.to_path_buf(),
            bytes,
        })
    }

    /// Parse a JSON record and generate, in one step.
    pub fn generate_from_json(&self, json: &str, destination: &Path) -> Result<RenderArtifact> {
        let record: ReportRecord = serde_json::from_str(json)?;
        self.generate(record, destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use cr_render::RenderError;

    fn test_record_json() -> &'static str {
        r#"{
            "personalData": { "name": "Ada Lovelace", "email": "ada@example.com" },
            "competencies": [
                { "name": "Analysis", "score": 9.0, "description": "Breaks problems down" },
                { "name": "Networking", "score": 4.0, "description": "Builds connections" }
            ]
        }"#
    }

    fn engineless_pipeline() -> ReportPipeline {
        let config = PipelineConfig {
            render: RenderConfig {
                engine_env_vars: Vec::new(),
                well_known_paths: Vec::new(),
                ..RenderConfig::default()
            },
            ..PipelineConfig::default()
        };
        ReportPipeline::new(config).unwrap()
    }

    #[test]
    fn test_compose_markup_end_to_end() {
        let pipeline = engineless_pipeline();
        let record: ReportRecord = serde_json::from_str(test_record_json()).unwrap();
        let markup = pipeline.compose_markup(record).unwrap();

        assert!(markup.starts_with("<!DOCTYPE html>"));
        assert!(markup.contains("Ada Lovelace"));
        assert!(markup.contains("Analysis"));
    }

    #[test]
    fn test_missing_engine_fails_with_no_artifact() {
        let pipeline = engineless_pipeline();
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("report.pdf");

        let err = pipeline
            .generate_from_json(test_record_json(), &dest)
            .unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Render(RenderError::EngineDiscovery { .. })
        ));
        assert!(!dest.exists());
    }

    #[test]
    fn test_invalid_record_is_record_error() {
        let pipeline = engineless_pipeline();
        let dir = tempfile::tempdir().unwrap();
        let err = pipeline
            .generate_from_json("{ not json", &dir.path().join("x.pdf"))
            .unwrap_err();
        assert!(matches!(err, PipelineError::Record(_)));
    }
}
