//! Score tiers and display bands.

use cr_common::ScoredItem;
use serde::{Deserialize, Serialize};

/// One of the three fixed score tiers.
///
/// Thresholds are part of the data contract, not presentation tuning:
/// score >= 7 is High, 5 <= score < 7 is Medium, score < 5 is Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    /// Classify a score into its tier.
    pub fn of_score(score: f64) -> Tier {
        if score >= 7.0 {
            Tier::High
        } else if score >= 5.0 {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    /// Section heading used in the document.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::High => "Strengths",
            Tier::Medium => "Development Areas",
            Tier::Low => "Opportunities",
        }
    }

    /// All tiers in document order.
    pub fn all() -> [Tier; 3] {
        [Tier::High, Tier::Medium, Tier::Low]
    }
}

/// Five-level display refinement of the tier scale.
///
/// Purely presentational: the band picks the card label and its two-tone
/// color pair. Grouping still happens on the three [`Tier`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Exceptional,
    High,
    Medium,
    Low,
    Critical,
}

impl ScoreBand {
    /// Classify a score into its display band.
    pub fn of_score(score: f64) -> ScoreBand {
        if score >= 9.0 {
            ScoreBand::Exceptional
        } else if score >= 7.0 {
            ScoreBand::High
        } else if score >= 5.0 {
            ScoreBand::Medium
        } else if score >= 3.0 {
            ScoreBand::Low
        } else {
            ScoreBand::Critical
        }
    }

    /// Card label for this band.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Exceptional => "Exceptional",
            ScoreBand::High => "High",
            ScoreBand::Medium => "Medium",
            ScoreBand::Low => "Low",
            ScoreBand::Critical => "Very Low",
        }
    }

    /// Foreground accent color.
    pub fn color(&self) -> &'static str {
        match self {
            ScoreBand::Exceptional | ScoreBand::High => "#10B981",
            ScoreBand::Medium => "#F59E0B",
            ScoreBand::Low => "#EF4444",
            ScoreBand::Critical => "#DC2626",
        }
    }

    /// Background tint paired with [`color`](Self::color).
    pub fn bg_color(&self) -> &'static str {
        match self {
            ScoreBand::Exceptional | ScoreBand::High => "#D1FAE5",
            ScoreBand::Medium => "#FEF3C7",
            ScoreBand::Low | ScoreBand::Critical => "#FFE4E6",
        }
    }

    /// Resolved display metadata for template consumption.
    pub fn meta(&self) -> BandMeta {
        BandMeta {
            band: *self,
            label: self.label(),
            color: self.color(),
            bg_color: self.bg_color(),
        }
    }
}

/// Display metadata attached to every classified item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BandMeta {
    pub band: ScoreBand,
    pub label: &'static str,
    pub color: &'static str,
    pub bg_color: &'static str,
}

/// A scored item with its derived display band attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedItem {
    #[serde(flatten)]
    pub item: ScoredItem,
    pub band: BandMeta,
}

impl ClassifiedItem {
    /// Attach band metadata to an item.
    pub fn new(item: ScoredItem) -> Self {
        let band = ScoreBand::of_score(item.score).meta();
        Self { item, band }
    }

    pub fn score(&self) -> f64 {
        self.item.score
    }

    pub fn tier(&self) -> Tier {
        Tier::of_score(self.item.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(Tier::of_score(7.0), Tier::High);
        assert_eq!(Tier::of_score(6.99), Tier::Medium);
        assert_eq!(Tier::of_score(5.0), Tier::Medium);
        assert_eq!(Tier::of_score(4.99), Tier::Low);
        assert_eq!(Tier::of_score(10.0), Tier::High);
        assert_eq!(Tier::of_score(1.0), Tier::Low);
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ScoreBand::of_score(9.0), ScoreBand::Exceptional);
        assert_eq!(ScoreBand::of_score(8.5), ScoreBand::High);
        assert_eq!(ScoreBand::of_score(5.0), ScoreBand::Medium);
        assert_eq!(ScoreBand::of_score(3.0), ScoreBand::Low);
        assert_eq!(ScoreBand::of_score(2.9), ScoreBand::Critical);
    }

    #[test]
    fn test_band_two_tone_pairs() {
        let meta = ScoreBand::of_score(8.0).meta();
        assert_eq!(meta.label, "High");
        assert_eq!(meta.color, "#10B981");
        assert_eq!(meta.bg_color, "#D1FAE5");
    }
}
