// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning highlight ranges back into text.
//!
//! Matchers hand out inclusive char ranges. A UI wants runs of text tagged
//! "highlighted" or not. [`highlight_segments`] does the split; [`highlight_with`]
//! wraps the highlighted runs in caller-supplied markers (ANSI codes, `<mark>`).
//!
//! Ranges are treated as a set of marked chars, so overlapping or unsorted
//! ranges (multi-word results can overlap) render fine. Anything past the end
//! of the text is clamped away. That happens when a normalized-index range is
//! drawn over an original string with more chars folded away.

use crate::types::HighlightRange;

/// A run of consecutive chars with the same highlight state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    fn new(highlighted: bool) -> Self {
        Self {
            text: String::new(),
            highlighted,
        }
    }
}

/// Split `text` into alternating plain and highlighted runs.
///
/// Empty text gives no segments. Adjacent segments always differ in
/// `highlighted`.
///
/// # Example
///
/// ```
/// use sifter::{highlight_segments, HighlightRange};
///
/// let segments = highlight_segments("Hello World", &[HighlightRange::new(6, 8)]);
/// let parts: Vec<(&str, bool)> = segments.iter().map(|s| (s.text.as_str(), s.highlighted)).collect();
/// assert_eq!(parts, vec![("Hello ", false), ("Wor", true), ("ld", false)]);
/// ```
pub fn highlight_segments(text: &str, ranges: &[HighlightRange]) -> Vec<Segment> {
    let char_count = text.chars().count();
    let mut marked = vec![false; char_count];
    for range in ranges {
        if range.start >= char_count {
            continue;
        }
        let end = range.end.min(char_count - 1);
        for flag in &mut marked[range.start..=end] {
            *flag = true;
        }
    }

    let mut segments: Vec<Segment> = Vec::new();
    for (c, highlighted) in text.chars().zip(marked) {
        match segments.last_mut() {
            Some(segment) if segment.highlighted == highlighted => segment.text.push(c),
            _ => {
                let mut segment = Segment::new(highlighted);
                segment.text.push(c);
                segments.push(segment);
            }
        }
    }
    segments
}

/// Render `text` with every highlighted run wrapped in `open` / `close`.
///
/// ```
/// use sifter::{highlight_with, HighlightRange};
///
/// let html = highlight_with("Hello World", &[HighlightRange::new(0, 0), HighlightRange::new(6, 6)], "<b>", "</b>");
/// assert_eq!(html, "<b>H</b>ello <b>W</b>orld");
/// ```
pub fn highlight_with(text: &str, ranges: &[HighlightRange], open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in highlight_segments(text, ranges) {
        if segment.highlighted {
            out.push_str(open);
            out.push_str(&segment.text);
            out.push_str(close);
        } else {
            out.push_str(&segment.text);
        }
    }
    out
}
