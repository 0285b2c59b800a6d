//! Property tests for tiering and pagination invariants.

use cr_classify::{classify, ClassifyConfig, Tier};
use cr_common::ScoredItem;
use proptest::prelude::*;

fn arb_item() -> impl Strategy<Value = ScoredItem> {
    ("[a-z]{1,8}", 1.0f64..=10.0).prop_map(|(name, score)| ScoredItem {
        name,
        score,
        description: "generated".to_string(),
        detailed_analysis: None,
        definition: None,
    })
}

proptest! {
    #[test]
    fn tier_matches_thresholds(score in 1.0f64..=10.0) {
        let tier = Tier::of_score(score);
        if score >= 7.0 {
            prop_assert_eq!(tier, Tier::High);
        } else if score >= 5.0 {
            prop_assert_eq!(tier, Tier::Medium);
        } else {
            prop_assert_eq!(tier, Tier::Low);
        }
    }

    #[test]
    fn groups_are_sorted_descending(items in prop::collection::vec(arb_item(), 0..30)) {
        let result = classify(&items, &ClassifyConfig::default());
        for group in [&result.high, &result.medium, &result.low] {
            let scores: Vec<f64> = group.items().map(|c| c.score()).collect();
            for pair in scores.windows(2) {
                prop_assert!(pair[0] >= pair[1], "scores not descending: {:?}", scores);
            }
        }
    }

    #[test]
    fn split_covers_everything(n in 8usize..=12) {
        let items: Vec<ScoredItem> = (0..n)
            .map(|i| ScoredItem {
                name: format!("c{i}"),
                score: 8.0,
                description: "x".to_string(),
                detailed_analysis: None,
                definition: None,
            })
            .collect();
        let result = classify(&items, &ClassifyConfig::default());

        prop_assert_eq!(result.high.pages.len(), 2);
        let first = result.high.pages[0].items.len();
        let second = result.high.pages[1].items.len();
        prop_assert_eq!(first, n.div_ceil(2));
        prop_assert_eq!(first + second, n);

        // No overlap, no gap: every input name appears exactly once.
        let mut names: Vec<&str> = result.high.items().map(|c| c.item.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        prop_assert_eq!(names.len(), n);
    }

    #[test]
    fn capacity_is_never_exceeded(items in prop::collection::vec(arb_item(), 0..40)) {
        let config = ClassifyConfig::default();
        let result = classify(&items, &config);
        for group in [&result.high, &result.medium, &result.low] {
            prop_assert!(group.item_count() <= config.capacity);
        }
    }
}
