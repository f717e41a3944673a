//! Drawing match ranges back onto item text.

use super::common::palette_search;
use sifter::{highlight_segments, highlight_with, match_one, match_with_strategy, Strategy};

fn marked(text: &str, query: &str, strategy: Strategy) -> String {
    let result = match_with_strategy(text, query, strategy).unwrap();
    highlight_with(text, &result.ranges, "[", "]")
}

#[test]
fn test_highlight_each_tier() {
    assert_eq!(marked("Open File", "Open File", Strategy::Smart), "[Open File]");
    assert_eq!(marked("Open File", "open", Strategy::Smart), "[Open] File");
    assert_eq!(marked("Open File", "file", Strategy::Smart), "Open [File]");
    assert_eq!(marked("Outline View", "line", Strategy::Smart), "Out[line] View");
    assert_eq!(
        marked("Toggle Line Comment", "comment toggle", Strategy::Smart),
        "[Toggle] Line [Comment]"
    );
    assert_eq!(
        marked("Toggle Line Comment", "tlc", Strategy::Smart),
        "[T]oggle [L]ine [C]omment"
    );
    assert_eq!(marked("Hello World", "hwl", Strategy::Aggressive), "[H]ello [W]or[l]d");
}

#[test]
fn test_overlapping_multi_word_ranges_render() {
    assert_eq!(marked("scatter cat", "cat scatter", Strategy::Smart), "[scatter] cat");
}

#[test]
fn test_range_past_end_is_clamped() {
    // The word tier sizes this range by the 2-char original query.
    let result = match_one("la e", "e\u{0301}").unwrap();
    assert_eq!(highlight_with("la e", &result.ranges, "[", "]"), "la [e]");
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_precomposed_text_lines_up_with_normalized_ranges() {
    assert_eq!(marked("Crème Brûlée", "brulee", Strategy::Smart), "Crème [Brûlée]");
}

#[test]
fn test_segments_alternate() {
    let search = palette_search(Strategy::Aggressive);
    for result in search.search("opf") {
        let title = &result.item.title;
        if let Some(ranges) = &result.matches[0] {
            let segments = highlight_segments(title, ranges);
            assert!(segments.windows(2).all(|w| w[0].highlighted != w[1].highlighted));
            let rebuilt: String = segments.iter().map(|s| s.text.as_str()).collect();
            assert_eq!(&rebuilt, title);
        }
    }
}
