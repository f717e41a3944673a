//! The fuzzy fallback strategies: off, smart, aggressive.

use super::common::{approx_eq, chars, pairs};
use sifter::{
    aggressive_fuzzy_match, build_search, match_with_strategy, smart_fuzzy_match, MatchTier,
    SearchOptions, Strategy,
};

#[test]
fn test_off_never_returns_fuzzy_matches() {
    let search = build_search(
        vec!["Open Recent File", "Go to Definition", "Save All"],
        SearchOptions::new().with_strategy(Strategy::Off),
    );
    assert!(search.search("orf").is_empty());
    assert!(search.search("gtd").is_empty());
    // Substring tiers still apply.
    assert_eq!(search.search("recent").len(), 1);
    assert_eq!(search.search("ave").len(), 1);
}

#[test]
fn test_smart_finds_initials() {
    let result = match_with_strategy("Go to Definition", "gtd", Strategy::Smart).unwrap();
    assert_eq!(result.tier, MatchTier::Fuzzy);
    assert_eq!(pairs(&result.ranges), vec![(0, 0), (3, 3), (6, 6)]);
    assert!(approx_eq(result.score, 3.2));
}

#[test]
fn test_smart_rejects_scattered_letters_aggressive_accepts() {
    assert!(match_with_strategy("Preferences", "pfs", Strategy::Smart).is_none());

    let result = match_with_strategy("Preferences", "pfs", Strategy::Aggressive).unwrap();
    assert_eq!(pairs(&result.ranges), vec![(0, 0), (3, 3), (10, 10)]);
    // word start, short mid-word, short mid-word at the end
    assert!(approx_eq(result.score, 2.0 + 0.4 + 1.6 + 1.6));
}

#[test]
fn test_smart_accepts_mid_word_run_of_three() {
    let result = match_with_strategy("my javascript", "script", Strategy::Smart).unwrap();
    // Plain substring wins before any fuzzy matching.
    assert_eq!(result.tier, MatchTier::Contains);

    let result = match_with_strategy("my javascript", "scrmy", Strategy::Smart);
    assert!(result.is_none(), "chunks must move forward through the text");
}

#[test]
fn test_aggressive_merges_adjacent_chars() {
    let result = aggressive_fuzzy_match(&chars("toggle side bar"), &chars("togsb")).unwrap();
    assert_eq!(pairs(&result.ranges), vec![(0, 2), (7, 7), (12, 12)]);
}

#[test]
fn test_aggressive_is_leftmost_not_best() {
    // Greedy takes the 'a' in "data" rather than waiting for "alpha".
    let result = aggressive_fuzzy_match(&chars("data alpha"), &chars("dal")).unwrap();
    assert_eq!(pairs(&result.ranges), vec![(0, 1), (6, 6)]);
}

#[test]
fn test_strategies_agree_on_fixed_tiers() {
    for strategy in Strategy::ALL {
        let result = match_with_strategy("Save All", "save", strategy).unwrap();
        assert_eq!(result.tier, MatchTier::Prefix);
        assert_eq!(result.score, 0.5);
    }
}

#[test]
fn test_fuzzy_matchers_reject_empty_input() {
    assert!(smart_fuzzy_match(&chars("abc"), &[]).is_none());
    assert!(aggressive_fuzzy_match(&chars("abc"), &[]).is_none());
    assert!(smart_fuzzy_match(&[], &chars("a")).is_none());
    assert!(aggressive_fuzzy_match(&[], &chars("a")).is_none());
}

#[test]
fn test_strategy_labels() {
    assert_eq!("OFF".parse::<Strategy>().unwrap(), Strategy::Off);
    assert_eq!(Strategy::Aggressive.to_string(), "aggressive");
    assert!("fzf".parse::<Strategy>().is_err());
    assert_eq!(Strategy::default(), Strategy::Smart);
}
