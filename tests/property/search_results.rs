//! Properties of collection search output.

use proptest::prelude::*;
use sifter::contracts::{verify_field_count, verify_search_results};
use sifter::{build_search, match_with_strategy, FuzzySearch, SearchOptions, Strategy as FuzzyStrategy};

fn item_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z ()\\-]{0,20}").unwrap()
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z ]{0,6}").unwrap()
}

fn fuzzy_strategy() -> impl Strategy<Value = FuzzyStrategy> {
    prop::sample::select(FuzzyStrategy::ALL.to_vec())
}

proptest! {
    /// Output is sorted by score, best first, and satisfies the output contract.
    #[test]
    fn prop_output_is_sorted(
        items in prop::collection::vec(item_strategy(), 0..30),
        query in query_strategy(),
        strategy in fuzzy_strategy(),
    ) {
        let search = build_search(items, SearchOptions::new().with_strategy(strategy));
        let results = search.search(&query);
        prop_assert!(results.windows(2).all(|w| w[0].score <= w[1].score));
        prop_assert!(verify_search_results(&results).is_ok());
        prop_assert!(verify_field_count(&results, 1).is_ok());
    }

    /// An item is in the output iff one of its fields matches on its own.
    #[test]
    fn prop_inclusion_matches_single_field(
        items in prop::collection::vec(item_strategy(), 0..30),
        query in "[a-z]{1,5}",
        strategy in fuzzy_strategy(),
    ) {
        let search = build_search(items.clone(), SearchOptions::new().with_strategy(strategy));
        let results = search.search(&query);

        let expected: usize = items
            .iter()
            .filter(|item| match_with_strategy(item, &query, strategy).is_some())
            .count();
        prop_assert_eq!(results.len(), expected);

        for result in &results {
            let single = match_with_strategy(result.item, &query, strategy).unwrap();
            prop_assert_eq!(result.score, single.score);
            prop_assert_eq!(result.matches[0].as_ref(), Some(&single.ranges));
        }
    }

    /// Two fields: the item score is the better of the two field scores.
    #[test]
    fn prop_item_score_is_best_field(
        pairs in prop::collection::vec((item_strategy(), item_strategy()), 1..20),
        query in "[a-z]{1,5}",
    ) {
        let search = FuzzySearch::with_extractor(
            pairs.clone(),
            |(a, b): &(String, String)| vec![Some(a.clone()), Some(b.clone())],
            FuzzyStrategy::Aggressive,
        );
        for result in search.search(&query) {
            let (a, b) = result.item;
            let scores: Vec<f64> = [a, b]
                .iter()
                .filter_map(|field| match_with_strategy(field, &query, FuzzyStrategy::Aggressive))
                .map(|m| m.score)
                .collect();
            let best = scores.iter().copied().fold(f64::INFINITY, f64::min);
            prop_assert_eq!(result.score, best);
            prop_assert_eq!(result.matches.iter().filter(|m| m.is_some()).count(), scores.len());
        }
    }

    /// Blank queries never return anything.
    #[test]
    fn prop_blank_query_is_empty(
        items in prop::collection::vec(item_strategy(), 0..10),
        blank in "[ \\t]{0,4}",
    ) {
        let search = build_search(items, SearchOptions::default());
        prop_assert!(search.search(&blank).is_empty());
    }
}

#[cfg(feature = "parallel")]
proptest! {
    /// The parallel path returns the same items with the same scores.
    #[test]
    fn prop_parallel_matches_sequential(
        items in prop::collection::vec(item_strategy(), 0..60),
        query in "[a-z]{1,4}",
    ) {
        let search = build_search(items, SearchOptions::new().with_strategy(FuzzyStrategy::Aggressive));
        let mut sequential: Vec<(String, u64)> = search
            .search(&query)
            .iter()
            .map(|r| (r.item.clone(), r.score.to_bits()))
            .collect();
        let mut parallel: Vec<(String, u64)> = search
            .search_parallel(&query)
            .iter()
            .map(|r| (r.item.clone(), r.score.to_bits()))
            .collect();
        sequential.sort();
        parallel.sort();
        prop_assert_eq!(sequential, parallel);
    }
}
