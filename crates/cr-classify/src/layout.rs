//! Layout density classes.

use serde::{Deserialize, Serialize};

/// Visual density of a competency page.
///
/// Fewer cards get a larger class so the page stays visually full; the
/// class has no effect on data correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutClass {
    Xl,
    Lg,
    Md,
    Sm,
    Xs,
    /// Constant-density sections that never rescale.
    Fixed,
}

impl LayoutClass {
    /// CSS class applied to the page container.
    pub fn css_class(&self) -> &'static str {
        match self {
            LayoutClass::Xl => "card-xl",
            LayoutClass::Lg => "card-lg",
            LayoutClass::Md => "card-md",
            LayoutClass::Sm => "card-sm",
            LayoutClass::Xs => "card-xs",
            LayoutClass::Fixed => "card-fixed",
        }
    }
}

/// Breakpoint table mapping item count to a layout class.
///
/// Presentation tuning, not business logic; the defaults match a full A4
/// page but deployments can override any step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutBreakpoints {
    #[serde(default = "default_xl_max")]
    pub xl_max: usize,
    #[serde(default = "default_lg_max")]
    pub lg_max: usize,
    #[serde(default = "default_md_max")]
    pub md_max: usize,
    #[serde(default = "default_sm_max")]
    pub sm_max: usize,
}

fn default_xl_max() -> usize {
    3
}

fn default_lg_max() -> usize {
    5
}

fn default_md_max() -> usize {
    8
}

fn default_sm_max() -> usize {
    12
}

impl Default for LayoutBreakpoints {
    fn default() -> Self {
        Self {
            xl_max: default_xl_max(),
            lg_max: default_lg_max(),
            md_max: default_md_max(),
            sm_max: default_sm_max(),
        }
    }
}

impl LayoutBreakpoints {
    /// Pick the layout class for a page holding `count` items.
    ///
    /// Monotone step function: more items never yields a larger class.
    pub fn class_for(&self, count: usize) -> LayoutClass {
        if count <= self.xl_max {
            LayoutClass::Xl
        } else if count <= self.lg_max {
            LayoutClass::Lg
        } else if count <= self.md_max {
            LayoutClass::Md
        } else if count <= self.sm_max {
            LayoutClass::Sm
        } else {
            LayoutClass::Xs
        }
    }
}
