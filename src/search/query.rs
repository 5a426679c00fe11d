//! Query normalization.

use super::fold::fold_case;

/// Normalizes raw input into the form used for matching.
///
/// Lowercases and trims the input. Whitespace-only input becomes the empty
/// string, which callers treat as "no search".
///
/// # Examples
///
/// ```
/// use storefront_search::search::normalize_query;
///
/// assert_eq!(normalize_query("  Smart FEEDER "), "smart feeder");
/// assert_eq!(normalize_query("   "), "");
/// ```
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    fold_case(raw).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize_query("\tGPS Collar\n"), "gps collar");
    }

    #[test]
    fn test_normalize_keeps_inner_whitespace() {
        assert_eq!(normalize_query("auto  litter"), "auto  litter");
    }

    #[test]
    fn test_normalize_folds_per_character() {
        assert_eq!(normalize_query("ΟΔΟΣ"), "οδοσ");
    }

    #[test]
    fn test_normalize_empty_and_blank() {
        assert_eq!(normalize_query(""), "");
        assert_eq!(normalize_query(" \t "), "");
    }
}
