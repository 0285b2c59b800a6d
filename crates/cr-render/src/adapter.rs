//! The render pipeline: locate, load, settle, prune, export, teardown.

use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use crate::locator::{Discovery, EngineLocator};
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// ISO A4 in inches, the unit CDP expects.
const A4_WIDTH_IN: f64 = 8.27;
const A4_HEIGHT_IN: f64 = 11.69;

/// Launch arguments carried on every engine start.
const ENGINE_ARGS: [&str; 3] = [
    "--disable-setuid-sandbox",
    "--disable-dev-shm-usage",
    "--disable-gpu",
];

/// Removes every page container whose only non-empty child is its header,
/// so conditional sections that rendered empty do not leave blank pages in
/// the artifact. Returns the number of pages removed.
const PRUNE_SCRIPT: &str = r#"
(() => {
  let removed = 0;
  for (const page of Array.from(document.querySelectorAll('.page'))) {
    const rest = Array.from(page.children).filter((el) => !el.classList.contains('page-header'));
    const hasContent = rest.some((el) =>
      el.textContent.trim().length > 0 || el.querySelector('img, table, svg, canvas') !== null);
    if (!hasContent) {
      page.remove();
      removed += 1;
    }
  }
  return removed;
})()
"#;

/// Renders composed markup to a PDF artifact.
///
/// Each call owns its engine instance for the duration of the render and
/// releases it on every exit path. Instances are not pooled or shared.
pub struct Renderer {
    config: RenderConfig,
    locator: EngineLocator,
}

impl Renderer {
    /// Renderer with the standard discovery order built from the config.
    pub fn new(config: RenderConfig) -> Self {
        let locator = EngineLocator::from_config(&config);
        Self { config, locator }
    }

    /// Renderer with an injected locator (tests, exotic deployments).
    pub fn with_locator(config: RenderConfig, locator: EngineLocator) -> Self {
        Self { config, locator }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn locator(&self) -> &EngineLocator {
        &self.locator
    }

    /// Render `markup` to a PDF at `destination`.
    ///
    /// The destination directory must already exist. The artifact appears
    /// atomically: bytes go to a sibling temp file first and are renamed
    /// only after a successful export, so a failed render leaves nothing
    /// behind.
    pub fn render(&self, markup: &str, destination: &Path) -> Result<()> {
        let discovery = self.locator.locate()?;
        debug!(phase = "engine-located", "render starting");

        // The engine loads the markup from a scratch file; embedded images
        // are data URIs, so no network fetches happen.
        let mut scratch = tempfile::Builder::new()
            .prefix("competency-report-")
            .suffix(".html")
            .tempfile()?;
        scratch.write_all(markup.as_bytes())?;
        scratch.flush()?;
        let url = format!("file://{}", scratch.path().display());

        let browser = self.launch(&discovery)?;
        let tab = browser
            .new_tab()
            .map_err(|e| RenderError::EngineLaunch(format!("{e:#}")))?;
        tab.set_default_timeout(Duration::from_secs(self.config.load_timeout_secs));

        tab.navigate_to(&url)
            .map_err(|e| RenderError::PageLoad(format!("{e:#}")))?;
        tab.wait_until_navigated().map_err(|e| RenderError::Timeout {
            timeout_secs: self.config.load_timeout_secs,
            reason: format!("{e:#}"),
        })?;
        debug!(phase = "page-loaded", "markup loaded");

        // No completion signal exists for image paint; this fixed grace
        // delay is a documented approximation.
        std::thread::sleep(Duration::from_millis(self.config.settle_delay_ms));
        debug!(phase = "content-settled", delay_ms = self.config.settle_delay_ms, "settle done");

        let pruned = tab
            .evaluate(PRUNE_SCRIPT, false)
            .map_err(|e| RenderError::Export(format!("blank-page pruning failed: {e:#}")))?
            .value
            .and_then(|v| v.as_u64())
            .unwrap_or(0);
        if pruned > 0 {
            debug!(pruned, "removed header-only pages");
        }

        let pdf = tab
            .print_to_pdf(Some(a4_pdf_options()))
            .map_err(|e| RenderError::Export(format!("{e:#}")))?;

        let staging = destination.with_extension("pdf.tmp");
        std::fs::write(&staging, &pdf)
            .map_err(|e| RenderError::Export(format!("write {}: {e}", staging.display())))?;
        if let Err(e) = std::fs::rename(&staging, destination) {
            let _ = std::fs::remove_file(&staging);
            return Err(RenderError::Export(format!(
                "rename to {}: {e}",
                destination.display()
            )));
        }

        info!(
            phase = "exported",
            bytes = pdf.len(),
            path = %destination.display(),
            "artifact exported"
        );
        Ok(())
        // Browser and scratch file drop here, on success and on every
        // error return above.
    }

    fn launch(&self, discovery: &Discovery) -> Result<Browser> {
        let mut args: Vec<&OsStr> = ENGINE_ARGS.iter().map(OsStr::new).collect();
        args.extend(self.config.extra_args.iter().map(|s| OsStr::new(s.as_str())));

        let mut builder = LaunchOptions::default_builder();
        builder.headless(true).sandbox(false).args(args);
        if let Discovery::Executable { path, .. } = discovery {
            builder.path(Some(path.clone()));
        }
        let options = builder
            .build()
            .map_err(|e| RenderError::EngineLaunch(e.to_string()))?;

        Browser::new(options).map_err(|e| RenderError::EngineLaunch(format!("{e:#}")))
    }
}

fn a4_pdf_options() -> PrintToPdfOptions {
    PrintToPdfOptions {
        landscape: Some(false),
        display_header_footer: Some(false),
        print_background: Some(true),
        paper_width: Some(A4_WIDTH_IN),
        paper_height: Some(A4_HEIGHT_IN),
        margin_top: Some(0.0),
        margin_bottom: Some(0.0),
        margin_left: Some(0.0),
        margin_right: Some(0.0),
        prefer_css_page_size: Some(true),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_engine_leaves_no_artifact() {
        let config = RenderConfig {
            engine_path: None,
            engine_env_vars: Vec::new(),
            well_known_paths: Vec::new(),
            managed_environment: false,
            ..RenderConfig::default()
        };
        let renderer = Renderer::new(config);

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("report.pdf");
        let err = renderer.render("<html></html>", &dest).unwrap_err();

        assert!(matches!(err, RenderError::EngineDiscovery { .. }));
        assert!(!dest.exists(), "failed discovery must not create a file");
    }

    #[test]
    fn test_a4_export_options() {
        let options = a4_pdf_options();
        assert_eq!(options.paper_width, Some(A4_WIDTH_IN));
        assert_eq!(options.paper_height, Some(A4_HEIGHT_IN));
        assert_eq!(options.margin_top, Some(0.0));
        assert_eq!(options.print_background, Some(true));
        assert_eq!(options.display_header_footer, Some(false));
        assert_eq!(options.prefer_css_page_size, Some(true));
    }

    #[test]
    fn test_prune_script_targets_page_headers() {
        // The script contract matches the template structure: page
        // containers with a header child.
        assert!(PRUNE_SCRIPT.contains(".page"));
        assert!(PRUNE_SCRIPT.contains("page-header"));
        assert!(PRUNE_SCRIPT.contains("page.remove()"));
    }
}
