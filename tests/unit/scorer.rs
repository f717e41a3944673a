//! Consecutive-run scoring of fuzzy chunks.

use super::common::{approx_eq, chars, ranges};
use sifter::scoring::{
    chunk_penalty, multi_word_score, FULL_WORD_CHUNK_PENALTY, FUZZY_BASE_SCORE,
    LONG_CHUNK_PENALTY, SHORT_CHUNK_PENALTY, WORD_START_CHUNK_PENALTY,
};
use sifter::{score_consecutive_chunks, HighlightRange, MatchTier};

#[test]
fn test_whole_word_chunks() {
    let text = chars("open recent file");
    let result = score_consecutive_chunks(ranges(&[(0, 3), (12, 15)]), &text);
    assert!(approx_eq(result.score, FUZZY_BASE_SCORE + 2.0 * FULL_WORD_CHUNK_PENALTY));
    assert_eq!(result.tier, MatchTier::Fuzzy);
}

#[test]
fn test_chunks_after_other_boundaries() {
    // '(' and '-' count as word edges, not just spaces.
    let text = chars("git (pull)-rebase");
    assert_eq!(chunk_penalty(HighlightRange::new(5, 8), &text), FULL_WORD_CHUNK_PENALTY);
    assert_eq!(chunk_penalty(HighlightRange::new(11, 13), &text), WORD_START_CHUNK_PENALTY);
}

#[test]
fn test_mid_word_penalties_by_length() {
    let text = chars("javascript");
    assert_eq!(chunk_penalty(HighlightRange::new(4, 9), &text), LONG_CHUNK_PENALTY);
    assert_eq!(chunk_penalty(HighlightRange::new(4, 5), &text), SHORT_CHUNK_PENALTY);
}

#[test]
fn test_penalties_are_summed_left_to_right() {
    let text = chars("hello world");
    // word start, word start, short mid-word
    let result = score_consecutive_chunks(ranges(&[(0, 0), (6, 6), (9, 9)]), &text);
    assert!(approx_eq(result.score, 4.4));
}

#[test]
fn test_empty_chunk_list_scores_base() {
    let result = score_consecutive_chunks(Vec::new(), &chars("anything"));
    assert_eq!(result.score, FUZZY_BASE_SCORE);
    assert!(result.ranges.is_empty());
}

#[test]
fn test_multi_word_score_formula() {
    for n in 2..10 {
        assert!(approx_eq(multi_word_score(n), 1.5 + 0.2 * n as f64));
    }
}
