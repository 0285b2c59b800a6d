//! Engine discovery.
//!
//! Discovery is an ordered list of strategies behind a trait so that every
//! path (hit, miss, managed fallback) is deterministic in tests without
//! touching the host filesystem or environment.

use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use std::path::PathBuf;
use tracing::debug;

/// One way of finding an engine executable.
pub trait LocateStrategy: Send + Sync {
    /// Strategy name used in logs and discovery errors.
    fn name(&self) -> &'static str;

    /// The executable this strategy finds, if any.
    fn locate(&self) -> Option<PathBuf>;
}

/// Explicitly configured executable path. Taken as-is when present; a
/// misconfigured path surfaces at launch rather than discovery.
pub struct ConfiguredPath {
    path: Option<PathBuf>,
}

impl ConfiguredPath {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl LocateStrategy for ConfiguredPath {
    fn name(&self) -> &'static str {
        "configured-path"
    }

    fn locate(&self) -> Option<PathBuf> {
        self.path.clone()
    }
}

/// Probes environment variables for an executable path.
pub struct EnvProbe {
    vars: Vec<String>,
}

impl EnvProbe {
    pub fn new(vars: Vec<String>) -> Self {
        Self { vars }
    }
}

impl LocateStrategy for EnvProbe {
    fn name(&self) -> &'static str {
        "env-probe"
    }

    fn locate(&self) -> Option<PathBuf> {
        self.vars
            .iter()
            .filter_map(|var| std::env::var_os(var))
            .map(PathBuf::from)
            .find(|path| path.is_file())
    }
}

/// Scans a fixed list of well-known installation paths.
pub struct WellKnownPaths {
    paths: Vec<PathBuf>,
}

impl WellKnownPaths {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl LocateStrategy for WellKnownPaths {
    fn name(&self) -> &'static str {
        "well-known-paths"
    }

    fn locate(&self) -> Option<PathBuf> {
        self.paths.iter().find(|path| path.is_file()).cloned()
    }
}

/// Outcome of engine discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    /// A specific executable, with the strategy that found it.
    Executable {
        path: PathBuf,
        strategy: &'static str,
    },
    /// Nothing found, but the environment is managed: the engine's own
    /// bundled default is used.
    BundledDefault,
}

/// Ordered engine discovery with a managed-environment fallback.
pub struct EngineLocator {
    strategies: Vec<Box<dyn LocateStrategy>>,
    managed: bool,
}

impl EngineLocator {
    /// The standard strategy order: configured path, environment probe,
    /// well-known installation paths.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::with_strategies(
            vec![
                Box::new(ConfiguredPath::new(config.engine_path.clone())),
                Box::new(EnvProbe::new(config.engine_env_vars.clone())),
                Box::new(WellKnownPaths::new(config.well_known_paths.clone())),
            ],
            config.managed_environment,
        )
    }

    /// Custom strategy list, mainly for tests.
    pub fn with_strategies(strategies: Vec<Box<dyn LocateStrategy>>, managed: bool) -> Self {
        Self {
            strategies,
            managed,
        }
    }

    /// Run the strategies in order; first hit wins.
    pub fn locate(&self) -> Result<Discovery> {
        for strategy in &self.strategies {
            if let Some(path) = strategy.locate() {
                debug!(strategy = strategy.name(), path = %path.display(), "engine located");
                return Ok(Discovery::Executable {
                    path,
                    strategy: strategy.name(),
                });
            }
        }

        if self.managed {
            debug!("no engine found, managed environment falls back to bundled default");
            return Ok(Discovery::BundledDefault);
        }

        Err(RenderError::EngineDiscovery {
            searched: self
                .strategies
                .iter()
                .map(|s| s.name())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}
