//! Text folding for case-insensitive search
//!
//! Both the search term and the searched fields go through the same folding
//! (canonical composition, then lowercase) so that visually identical input
//! matches regardless of how it was encoded or capitalised.

use unicode_normalization::UnicodeNormalization;

/// Fold text for case-insensitive comparison
pub fn fold(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

/// Whether `haystack`, once folded, contains an already folded needle
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    if folded_needle.is_empty() {
        return true;
    }
    fold(haystack).contains(folded_needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_lowercases() {
        assert_eq!(fold("Mens Cotton JACKET"), "mens cotton jacket");
    }

    #[test]
    fn test_fold_composes() {
        // "e" + combining acute accent vs precomposed "é"
        assert_eq!(fold("Cafe\u{301}"), fold("CAFÉ"));
    }

    #[test]
    fn test_contains_folded() {
        let needle = fold("Backpack");
        assert!(contains_folded("Fjallraven - Foldsack No. 1 BACKPACK", &needle));
        assert!(!contains_folded("Slim Fit T-Shirt", &needle));
        assert!(contains_folded("anything", ""));
    }
}
