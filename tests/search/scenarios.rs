//! End-to-end collection searches with fully known output.

use super::common::{approx_eq, items, pairs, ranges, FRUITS};
use sifter::{build_search, match_one, MatchTier, SearchOptions, Strategy};

#[test]
fn test_prefix_over_fruits() {
    let search = build_search(FRUITS.to_vec(), SearchOptions::default());
    let results = search.search("ban");

    assert_eq!(results.len(), 1);
    assert_eq!(*results[0].item, "banana");
    assert_eq!(results[0].score, 0.5);
    assert_eq!(results[0].matches, vec![Some(ranges(&[(0, 2)]))]);
}

#[test]
fn test_match_one_word_anchored() {
    let result = match_one("Hello World", "wor").unwrap();

    assert_eq!(result.item, "Hello World");
    assert_eq!(result.score, 1.0);
    assert_eq!(pairs(&result.ranges), vec![(6, 8)]);
    // "wor" != "Wor": the exact-case word tier doesn't apply.
    assert_eq!(result.tier, MatchTier::Word);
}

#[test]
fn test_aggressive_scattered_letters() {
    let search = build_search(
        vec!["Hello World"],
        SearchOptions::new().with_strategy(Strategy::Aggressive),
    );
    let results = search.search("hwl");

    assert_eq!(results.len(), 1);
    assert_eq!(*results[0].item, "Hello World");
    // 2 + 0.4 (word start) + 0.4 (word start) + 1.6 (mid-word, 1 char)
    assert!(approx_eq(results[0].score, 4.4));
    assert_eq!(
        results[0].matches,
        vec![Some(ranges(&[(0, 0), (6, 6), (9, 9)]))]
    );
}

#[test]
fn test_empty_query_returns_nothing() {
    let search = build_search(FRUITS.to_vec(), SearchOptions::default());
    assert!(search.search("").is_empty());
    assert!(search.search(" \t ").is_empty());
}

#[test]
fn test_empty_collection() {
    let search = build_search(Vec::<String>::new(), SearchOptions::default());
    assert!(search.is_empty());
    assert!(search.search("anything").is_empty());
}

#[test]
fn test_ranking_across_tiers() {
    let search = build_search(
        vec![
            "Toggle Comment",
            "comment",
            "Comment Line",
            "Commentary",
            "Uncomment",
            "Clear Output Menu Entry",
        ],
        SearchOptions::default(),
    );
    let results = search.search("comment");
    let scores: Vec<f64> = results.iter().map(|result| result.score).collect();

    assert_eq!(items(&results)[0], "comment");
    assert_eq!(scores[0], 0.0);
    // "Comment Line" and "Commentary" are both prefix matches; order between them is unspecified.
    assert_eq!(scores[1], 0.5);
    assert_eq!(scores[2], 0.5);
    assert_eq!(items(&results)[3], "Toggle Comment");
    assert_eq!(scores[3], 1.0);
    assert_eq!(items(&results)[4], "Uncomment");
    assert_eq!(scores[4], 2.0);
    // Smart fuzzy: c·o·m·m·e·n·t can't be assembled from word starts or 3-char runs.
    assert_eq!(results.len(), 5);
}

#[test]
fn test_blank_match_one_is_a_prefix_match() {
    // The one-off entry point has no blank-query guard.
    let result = match_one("anything", "").unwrap();
    assert_eq!(result.tier, MatchTier::Prefix);
    assert_eq!(result.score, 0.5);
    assert!(result.ranges.is_empty());
}
