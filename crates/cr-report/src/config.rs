//! Report assembly configuration.

use cr_chart::ChartConfig;
use cr_classify::ClassifyConfig;
use serde::{Deserialize, Serialize};

/// Tuning for the assembly stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Tiering, capping, and pagination knobs.
    #[serde(default)]
    pub classify: ClassifyConfig,
    /// Chart geometry.
    #[serde(default)]
    pub chart: ChartConfig,
    /// Headline list length (top strengths / opportunities on the summary).
    #[serde(default = "default_headline_len")]
    pub headline_len: usize,
}

fn default_headline_len() -> usize {
    5
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            classify: ClassifyConfig::default(),
            chart: ChartConfig::default(),
            headline_len: default_headline_len(),
        }
    }
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classify(mut self, classify: ClassifyConfig) -> Self {
        self.classify = classify;
        self
    }

    pub fn with_chart(mut self, chart: ChartConfig) -> Self {
        self.chart = chart;
        self
    }
}
