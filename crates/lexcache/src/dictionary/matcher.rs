// Word matching: exact, acronym, generic-word and full-fold tiers

use hashbrown::HashMap;
use lexcache_core::case::{is_acronym, is_all_lower};
use lexcache_core::entry::WordEntry;
use lexcache_core::fold::{case_fold, full_fold, normalize};

use super::SpellingDictionary;

/// Per-lookup options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Fold case and accents for every entry. `None` uses the default (off).
    pub ignore_case: Option<bool>,
}

impl MatchOptions {
    pub fn ignore_case(ignore_case: bool) -> Self {
        Self {
            ignore_case: Some(ignore_case),
        }
    }

    fn full_fold(&self) -> bool {
        self.ignore_case.unwrap_or(false)
    }
}

/// Precomputed keys for the folded tiers.
///
/// Each table maps a folded key to whether any entry folding to it is
/// forbidden; a key's presence means at least one entry matches.
#[derive(Debug, Clone, Default)]
pub(super) struct FoldIndex {
    case_folded: HashMap<String, bool>,
    fully_folded: HashMap<String, bool>,
}

impl FoldIndex {
    pub(super) fn new<'a>(entries: impl Iterator<Item = &'a WordEntry>) -> Self {
        let mut index = Self::default();
        for entry in entries {
            *index
                .case_folded
                .entry(case_fold(&entry.text))
                .or_insert(false) |= entry.forbidden;
            *index
                .fully_folded
                .entry(full_fold(&entry.text))
                .or_insert(false) |= entry.forbidden;
        }
        index
    }
}

impl SpellingDictionary {
    /// Check whether `word` is in the dictionary, with default options.
    pub fn has(&self, word: &str) -> bool {
        self.has_with_options(word, &MatchOptions::default())
    }

    /// Check whether `word` is in the dictionary.
    ///
    /// Tiers are tried in order and the first one that matches decides:
    ///
    /// 1. Exact: the NFC text is stored.
    /// 2. Acronym: an all-uppercase word of two or more characters matches
    ///    any entry case-insensitively ("RHÔNE" finds "Rhône").
    /// 3. Generic word: the lowercased word matches an all-lowercase entry,
    ///    so "Café" and "CAFÉ" find "café" but "rhône" does not find "Rhône".
    /// 4. Full fold, only with `ignore_case`: case and accents are both
    ///    folded ("rhone" finds "Rhône").
    ///
    /// A forbidden entry that matches makes the answer `false`.
    pub fn has_with_options(&self, word: &str, options: &MatchOptions) -> bool {
        let word = normalize(word);

        if let Some(entry) = self.entries.get(word.as_str()) {
            return !entry.forbidden;
        }

        let lowered = case_fold(&word);

        if is_acronym(&word) {
            if let Some(&forbidden) = self.index.case_folded.get(lowered.as_str()) {
                return !forbidden;
            }
        }

        if let Some(entry) = self.entries.get(lowered.as_str()) {
            if is_all_lower(&entry.text) {
                return !entry.forbidden;
            }
        }

        if options.full_fold() {
            if let Some(&forbidden) = self.index.fully_folded.get(full_fold(&word).as_str()) {
                return !forbidden;
            }
        }

        false
    }
}
