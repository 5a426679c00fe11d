//! Case folding shared by normalization, matching and highlighting.
//!
//! Folding lowercases one source character at a time with
//! [`char::to_lowercase`], never with the context-sensitive
//! [`str::to_lowercase`] (which turns a final `Σ` into `ς`). A folded needle
//! only matches when it starts and ends on source character boundaries, so a
//! product reported by the matcher always has a highlightable run.

/// Lowercases `text` character by character.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Returns `true` if the already-folded `needle` occurs in `text`.
///
/// An empty needle is contained everywhere.
#[must_use]
pub fn contains_folded(text: &str, needle: &str) -> bool {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return true;
    }
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    (0..chars.len()).any(|idx| match_len_at(&chars[idx..], &needle).is_some())
}

/// Returns how many source characters a match of `needle` starting at the
/// front of `chars` consumes, or `None` if there is no match there.
pub(crate) fn match_len_at(chars: &[(usize, char)], needle: &[char]) -> Option<usize> {
    let mut matched = 0;

    for (consumed, &(_, c)) in chars.iter().enumerate() {
        for lower in c.to_lowercase() {
            if needle.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(consumed + 1);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_sigma_folds_like_any_sigma() {
        assert_eq!(fold_case("ΟΔΟΣ"), "οδοσ");
        assert_ne!("ΟΔΟΣ".to_lowercase(), fold_case("ΟΔΟΣ"));
    }

    #[test]
    fn test_contains_folded() {
        assert!(contains_folded("Smart Feeder Pro", "feed"));
        assert!(contains_folded("ΟΔΟΣ Feeder", "οδοσ"));
        assert!(!contains_folded("ΟΔΟΣ Feeder", "ος"));
        assert!(contains_folded("anything", ""));
    }

    #[test]
    fn test_needle_cannot_end_inside_expanded_char() {
        // 'İ' folds to "i\u{307}"; a bare "i" must not match inside it.
        assert!(!contains_folded("İ", "i"));
        assert!(contains_folded("İ", "i\u{307}"));
    }
}
