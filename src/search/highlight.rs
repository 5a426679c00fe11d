//! Match highlighting.
//!
//! Splits display text into matched and unmatched runs so the renderer can
//! style every occurrence of the query. The query is always treated as literal
//! text: characters are compared one by one and no pattern is ever compiled, so
//! input such as `"(.*"` or `"[a"` matches itself and cannot fail.
//!
//! # Case Folding
//!
//! Comparison lowercases each source character on its own. A match must start
//! and end on source character boundaries, which keeps segments valid even for
//! characters whose lowercase form is longer than the original (e.g. `İ`).

use super::fold::{fold_case, match_len_at};
use serde::Serialize;

/// One run of display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    fn new(text: &str, matched: bool) -> Self {
        Self {
            text: text.to_string(),
            matched,
        }
    }
}

/// Splits `text` into segments, tagging every non-overlapping,
/// case-insensitive occurrence of `query`.
///
/// Surrounding whitespace of `query` is ignored. Concatenating the returned
/// segment texts always reproduces `text` exactly. When there is nothing to
/// highlight the result is a single unmatched segment holding `text`.
///
/// # Examples
///
/// ```
/// use storefront_search::search::highlight;
///
/// let segments = highlight("Smart Feeder Pro", "FEED");
/// let texts: Vec<_> = segments.iter().map(|s| (s.text.as_str(), s.matched)).collect();
/// assert_eq!(texts, vec![("Smart ", false), ("Feed", true), ("er Pro", false)]);
/// ```
#[must_use]
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    let needle: Vec<char> = fold_case(query.trim()).chars().collect();
    if needle.is_empty() {
        return vec![Segment::new(text, false)];
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_at = |idx: usize| chars.get(idx).map_or(text.len(), |&(byte, _)| byte);

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut idx = 0;

    while idx < chars.len() {
        let Some(len) = match_len_at(&chars[idx..], &needle) else {
            idx += 1;
            continue;
        };

        let start = byte_at(idx);
        let end = byte_at(idx + len);
        if start > plain_start {
            segments.push(Segment::new(&text[plain_start..start], false));
        }
        segments.push(Segment::new(&text[start..end], true));
        plain_start = end;
        idx += len;
    }

    if plain_start < text.len() || segments.is_empty() {
        segments.push(Segment::new(&text[plain_start..], false));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    fn matched(segments: &[Segment]) -> Vec<&str> {
        segments
            .iter()
            .filter(|s| s.matched)
            .map(|s| s.text.as_str())
            .collect()
    }

    #[test]
    fn test_empty_query_yields_single_plain_segment() {
        let segments = highlight("Auto Litter Box", "");
        assert_eq!(segments, vec![Segment::new("Auto Litter Box", false)]);
    }

    #[test]
    fn test_highlights_all_occurrences() {
        let segments = highlight("Collar for cool cats", "co");
        assert_eq!(matched(&segments), vec!["Co", "co"]);
        assert_eq!(joined(&segments), "Collar for cool cats");
    }

    #[test]
    fn test_occurrences_do_not_overlap() {
        let segments = highlight("aaaa", "aa");
        assert_eq!(matched(&segments), vec!["aa", "aa"]);
        assert_eq!(segments.len(), 2);
    }

    #[test]
    fn test_match_at_both_ends() {
        let segments = highlight("box of box", "box");
        assert_eq!(
            segments,
            vec![
                Segment::new("box", true),
                Segment::new(" of ", false),
                Segment::new("box", true),
            ]
        );
    }

    #[test]
    fn test_no_match_keeps_text_intact() {
        let segments = highlight("GPS Tracker Collar", "feeder");
        assert_eq!(segments, vec![Segment::new("GPS Tracker Collar", false)]);
    }

    #[test]
    fn test_special_characters_are_literal() {
        for query in ["(.*", "[a", "\\", "a+b?", "$^", "{2}"] {
            let text = format!("before {query} after");
            let segments = highlight(&text, query);
            assert_eq!(matched(&segments), vec![query]);
            assert_eq!(joined(&segments), text);
        }
    }

    #[test]
    fn test_pattern_like_query_does_not_match_as_pattern() {
        let segments = highlight("Smart Feeder", ".*");
        assert_eq!(segments, vec![Segment::new("Smart Feeder", false)]);
    }

    #[test]
    fn test_query_whitespace_is_trimmed() {
        let segments = highlight("Smart Feeder", "  feed ");
        assert_eq!(matched(&segments), vec!["Feed"]);
    }

    #[test]
    fn test_multibyte_text_round_trips() {
        let text = "Çat Fountaİn — Ünïcode çat";
        let segments = highlight(text, "çat");
        assert_eq!(matched(&segments), vec!["Çat", "çat"]);
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn test_expanding_lowercase_characters() {
        // 'İ' lowercases to two chars: "i\u{307}".
        let text = "İİ and ii";
        let segments = highlight(text, "i\u{307}");
        assert_eq!(matched(&segments), vec!["İ", "İ"]);
        assert_eq!(joined(&segments), text);

        let plain = highlight(text, "i");
        assert_eq!(joined(&plain), text);
        assert_eq!(matched(&plain), vec!["i", "i"]);
    }

    #[test]
    fn test_round_trip_over_sample_inputs() {
        let texts = ["", "a", "Smart Feeder Pro", "ßtraße", "🐱 cat 🐱", "AaAaA"];
        let queries = ["", "a", "cat", "ss", "🐱", "aa", "zz"];
        for text in texts {
            for query in queries {
                assert_eq!(joined(&highlight(text, query)), text, "{text:?} / {query:?}");
            }
        }
    }
}
