// Unicode normalization and folding used by dictionary lookups

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize a word to NFC.
///
/// Every stored entry and every lookup query passes through this first, so
/// composed ("é") and decomposed ("e" + U+0301) spellings compare equal.
pub fn normalize(word: &str) -> String {
    word.nfc().collect()
}

/// Case fold: lowercase every letter, keeping diacritics.
///
/// The result is re-normalized to NFC because some lowercase mappings
/// (U+0130, for one) expand into a base letter plus a combining mark.
pub fn case_fold(word: &str) -> String {
    word.to_lowercase().nfc().collect()
}

/// Diacritic fold: decompose and drop every combining mark, keeping case.
pub fn strip_diacritics(word: &str) -> String {
    word.nfd().filter(|&c| !is_combining_mark(c)).collect()
}

/// Full fold: case fold followed by diacritic fold.
///
/// Only the explicit ignore-case lookup compares words in this form.
pub fn full_fold(word: &str) -> String {
    strip_diacritics(&word.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_composes() {
        assert_eq!(normalize("cafe\u{0301}"), "caf\u{00E9}");
        assert_eq!(normalize("caf\u{00E9}"), "caf\u{00E9}");
    }

    #[test]
    fn case_fold_keeps_accents() {
        assert_eq!(case_fold("RH\u{00D4}NE"), "rh\u{00F4}ne");
        assert_eq!(case_fold("Caf\u{00E9}"), "caf\u{00E9}");
    }

    #[test]
    fn case_fold_output_is_nfc() {
        let folded = case_fold("\u{0130}stanbul");
        assert_eq!(folded, normalize(&folded));
    }

    #[test]
    fn strip_diacritics_keeps_case() {
        assert_eq!(strip_diacritics("Rh\u{00F4}ne"), "Rhone");
        assert_eq!(strip_diacritics("CAF\u{00C9}"), "CAFE");
    }

    #[test]
    fn full_fold_removes_case_and_accents() {
        assert_eq!(full_fold("RH\u{00D4}NE"), "rhone");
        assert_eq!(full_fold("rh\u{00F4}ne"), "rhone");
        assert_eq!(full_fold("Cafe\u{0301}"), "cafe");
    }

    #[test]
    fn folding_plain_ascii_is_identity_for_lowercase() {
        assert_eq!(case_fold("snarf"), "snarf");
        assert_eq!(full_fold("snarf"), "snarf");
    }
}
