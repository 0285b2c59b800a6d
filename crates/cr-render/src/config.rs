//! Render configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the rendering engine adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Explicit engine executable. Checked first and trusted as-is; a bad
    /// path surfaces at launch, not discovery.
    #[serde(default)]
    pub engine_path: Option<PathBuf>,

    /// Environment variables probed for an engine executable, in order.
    #[serde(default = "default_env_vars")]
    pub engine_env_vars: Vec<String>,

    /// Fixed installation paths scanned last.
    #[serde(default = "default_well_known_paths")]
    pub well_known_paths: Vec<PathBuf>,

    /// In a managed environment (provisioned container image) discovery
    /// failure falls back to the engine's bundled default instead of
    /// erroring.
    #[serde(default)]
    pub managed_environment: bool,

    /// Bounded wait for page parse and asset quiescence, in seconds.
    #[serde(default = "default_load_timeout_secs")]
    pub load_timeout_secs: u64,

    /// Grace delay for late-decoding embedded images, in milliseconds.
    /// An approximation by design; there is no completion signal for
    /// image paint.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Additional engine launch arguments.
    #[serde(default)]
    pub extra_args: Vec<String>,
}

fn default_env_vars() -> Vec<String> {
    ["CHROME", "CHROME_PATH", "CHROMIUM_PATH", "BROWSER_EXECUTABLE_PATH"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_well_known_paths() -> Vec<PathBuf> {
    [
        "/usr/bin/google-chrome-stable",
        "/usr/bin/google-chrome",
        "/usr/bin/chromium",
        "/usr/bin/chromium-browser",
        "/snap/bin/chromium",
        "/opt/google/chrome/chrome",
        "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
        "/Applications/Chromium.app/Contents/MacOS/Chromium",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

fn default_load_timeout_secs() -> u64 {
    30
}

fn default_settle_delay_ms() -> u64 {
    1000
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            engine_path: None,
            engine_env_vars: default_env_vars(),
            well_known_paths: default_well_known_paths(),
            managed_environment: false,
            load_timeout_secs: default_load_timeout_secs(),
            settle_delay_ms: default_settle_delay_ms(),
            extra_args: Vec::new(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_engine_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.engine_path = Some(path.into());
        self
    }

    pub fn with_managed_environment(mut self, managed: bool) -> Self {
        self.managed_environment = managed;
        self
    }

    pub fn with_load_timeout_secs(mut self, secs: u64) -> Self {
        self.load_timeout_secs = secs;
        self
    }

    pub fn with_settle_delay_ms(mut self, ms: u64) -> Self {
        self.settle_delay_ms = ms;
        self
    }
}
