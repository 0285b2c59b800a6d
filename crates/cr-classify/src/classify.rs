//! Tier grouping, capping, and page splitting.

use crate::layout::{LayoutBreakpoints, LayoutClass};
use crate::tier::{ClassifiedItem, Tier};
use cr_common::ScoredItem;
use serde::{Deserialize, Serialize};

/// Tuning knobs for classification and pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyConfig {
    /// Hard per-tier capacity; items beyond it are dropped (deliberate
    /// truncation, highest scores kept).
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Largest count that still fits one page; above it the tier splits
    /// into two sub-pages.
    #[serde(default = "default_single_page_max")]
    pub single_page_max: usize,
    #[serde(default)]
    pub breakpoints: LayoutBreakpoints,
}

fn default_capacity() -> usize {
    12
}

fn default_single_page_max() -> usize {
    7
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            single_page_max: default_single_page_max(),
            breakpoints: LayoutBreakpoints::default(),
        }
    }
}

impl ClassifyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_single_page_max(mut self, max: usize) -> Self {
        self.single_page_max = max;
        self
    }
}

/// One rendered page of a tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierPage {
    pub layout: LayoutClass,
    pub items: Vec<ClassifiedItem>,
}

/// All pages of a single tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierGroup {
    pub tier: Tier,
    /// Zero pages for an empty tier, one page up to the single-page
    /// threshold, two above it.
    pub pages: Vec<TierPage>,
}

impl TierGroup {
    fn empty(tier: Tier) -> Self {
        Self {
            tier,
            pages: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total items across all pages.
    pub fn item_count(&self) -> usize {
        self.pages.iter().map(|p| p.items.len()).sum()
    }

    /// Items in page order.
    pub fn items(&self) -> impl Iterator<Item = &ClassifiedItem> {
        self.pages.iter().flat_map(|p| p.items.iter())
    }
}

/// The three tier groups, always present even when empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub high: TierGroup,
    pub medium: TierGroup,
    pub low: TierGroup,
}

impl Classification {
    pub fn group(&self, tier: Tier) -> &TierGroup {
        match tier {
            Tier::High => &self.high,
            Tier::Medium => &self.medium,
            Tier::Low => &self.low,
        }
    }
}

/// Tier, sort, cap, and paginate a flat competency list.
///
/// Items keep their identity order on score ties (stable sort), each tier
/// is capped at `config.capacity`, and tiers above `config.single_page_max`
/// split into two sub-pages of `ceil(n/2)` and `n - ceil(n/2)` items.
pub fn classify(items: &[ScoredItem], config: &ClassifyConfig) -> Classification {
    let mut buckets: [Vec<ClassifiedItem>; 3] = [Vec::new(), Vec::new(), Vec::new()];

    for item in items {
        let classified = ClassifiedItem::new(item.clone());
        let slot = match classified.tier() {
            Tier::High => 0,
            Tier::Medium => 1,
            Tier::Low => 2,
        };
        buckets[slot].push(classified);
    }

    let [high, medium, low] = buckets;
    Classification {
        high: build_group(Tier::High, high, config),
        medium: build_group(Tier::Medium, medium, config),
        low: build_group(Tier::Low, low, config),
    }
}

fn build_group(tier: Tier, mut items: Vec<ClassifiedItem>, config: &ClassifyConfig) -> TierGroup {
    if items.is_empty() {
        return TierGroup::empty(tier);
    }

    // Stable: ties keep input order.
    items.sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(std::cmp::Ordering::Equal));
    items.truncate(config.capacity);

    TierGroup {
        tier,
        pages: paginate(items, config),
    }
}

fn paginate(items: Vec<ClassifiedItem>, config: &ClassifyConfig) -> Vec<TierPage> {
    let n = items.len();
    if n == 0 {
        return Vec::new();
    }
    if n <= config.single_page_max {
        return vec![TierPage {
            layout: config.breakpoints.class_for(n),
            items,
        }];
    }

    let first_len = n.div_ceil(2);
    let mut items = items;
    let second: Vec<ClassifiedItem> = items.split_off(first_len);
    vec![
        TierPage {
            layout: config.breakpoints.class_for(items.len()),
            items,
        },
        TierPage {
            layout: config.breakpoints.class_for(second.len()),
            items: second,
        },
    ]
}

/// Assign a layout class to a pre-tiered array without touching its
/// content: no re-sorting, no capping, no page splitting. Returns `None`
/// for an empty array (no page, no layout class).
pub fn layout_page(items: &[ScoredItem], breakpoints: &LayoutBreakpoints) -> Option<TierPage> {
    if items.is_empty() {
        return None;
    }
    let items: Vec<ClassifiedItem> = items.iter().cloned().map(ClassifiedItem::new).collect();
    Some(TierPage {
        layout: breakpoints.class_for(items.len()),
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, score: f64) -> ScoredItem {
        ScoredItem {
            name: name.to_string(),
            score,
            description: format!("{name} description"),
            detailed_analysis: None,
            definition: None,
        }
    }

    #[test]
    fn test_three_way_partition() {
        let items = vec![item("a", 9.0), item("b", 6.0), item("c", 2.0)];
        let result = classify(&items, &ClassifyConfig::default());

        assert_eq!(result.high.item_count(), 1);
        assert_eq!(result.medium.item_count(), 1);
        assert_eq!(result.low.item_count(), 1);
        assert_eq!(result.high.items().next().unwrap().item.name, "a");
        assert_eq!(result.low.items().next().unwrap().item.name, "c");
        // No splitting at these sizes.
        assert_eq!(result.high.pages.len(), 1);
    }

    #[test]
    fn test_sorted_descending_stable_on_ties() {
        let items = vec![
            item("first-eight", 8.0),
            item("nine", 9.0),
            item("second-eight", 8.0),
        ];
        let result = classify(&items, &ClassifyConfig::default());
        let names: Vec<&str> = result.high.items().map(|c| c.item.name.as_str()).collect();
        assert_eq!(names, ["nine", "first-eight", "second-eight"]);
    }

    #[test]
    fn test_capacity_truncates_lowest_scores() {
        let items: Vec<ScoredItem> = (0..15).map(|i| item(&format!("c{i}"), 7.0 + i as f64 * 0.1)).collect();
        let result = classify(&items, &ClassifyConfig::default());

        assert_eq!(result.high.item_count(), 12);
        // Highest scores survive.
        let min_kept = result
            .high
            .items()
            .map(|c| c.score())
            .fold(f64::INFINITY, f64::min);
        assert!(min_kept >= 7.3);
    }

    #[test]
    fn test_split_above_single_page_threshold() {
        let items: Vec<ScoredItem> = (0..10).map(|i| item(&format!("c{i}"), 8.0)).collect();
        let result = classify(&items, &ClassifyConfig::default());

        assert_eq!(result.high.pages.len(), 2);
        assert_eq!(result.high.pages[0].items.len(), 5);
        assert_eq!(result.high.pages[1].items.len(), 5);
        // Density depends only on count, so equal halves share a class.
        assert_eq!(result.high.pages[0].layout, result.high.pages[1].layout);
        assert_eq!(result.high.pages[0].layout, LayoutClass::Lg);
    }

    #[test]
    fn test_odd_split_sizes() {
        let items: Vec<ScoredItem> = (0..9).map(|i| item(&format!("c{i}"), 6.0)).collect();
        let result = classify(&items, &ClassifyConfig::default());

        assert_eq!(result.medium.pages.len(), 2);
        assert_eq!(result.medium.pages[0].items.len(), 5);
        assert_eq!(result.medium.pages[1].items.len(), 4);
        // Split covers all items, no overlap, no gap.
        assert_eq!(result.medium.item_count(), 9);
    }

    #[test]
    fn test_seven_items_stay_on_one_page() {
        let items: Vec<ScoredItem> = (0..7).map(|i| item(&format!("c{i}"), 8.0)).collect();
        let result = classify(&items, &ClassifyConfig::default());
        assert_eq!(result.high.pages.len(), 1);
        assert_eq!(result.high.pages[0].layout, LayoutClass::Md);
    }

    #[test]
    fn test_empty_input_yields_empty_groups() {
        let result = classify(&[], &ClassifyConfig::default());
        assert!(result.high.is_empty());
        assert!(result.medium.is_empty());
        assert!(result.low.is_empty());
        assert!(result.high.pages.is_empty());
    }

    #[test]
    fn test_single_item_gets_largest_class() {
        let result = classify(&[item("solo", 9.5)], &ClassifyConfig::default());
        assert_eq!(result.high.pages[0].layout, LayoutClass::Xl);
    }

    #[test]
    fn test_layout_page_keeps_order_and_size() {
        let items: Vec<ScoredItem> = vec![item("low-first", 3.0), item("high-second", 9.0)];
        let page = layout_page(&items, &LayoutBreakpoints::default()).unwrap();
        // Pre-tiered input is authoritative: untouched order, no cap.
        assert_eq!(page.items[0].item.name, "low-first");
        assert_eq!(page.items[1].item.name, "high-second");
        assert_eq!(page.layout, LayoutClass::Xl);
    }

    #[test]
    fn test_layout_page_empty_is_none() {
        assert!(layout_page(&[], &LayoutBreakpoints::default()).is_none());
    }

    #[test]
    fn test_layout_page_does_not_cap() {
        let items: Vec<ScoredItem> = (0..20).map(|i| item(&format!("c{i}"), 8.0)).collect();
        let page = layout_page(&items, &LayoutBreakpoints::default()).unwrap();
        assert_eq!(page.items.len(), 20);
        assert_eq!(page.layout, LayoutClass::Xs);
    }
}
