// Spelling Dictionary: an immutable word set plus the errors met while building it

mod matcher;

pub use matcher::MatchOptions;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use lexcache_core::entry::WordEntry;

use crate::error::LoadError;
use crate::parser::parse_words;
use matcher::FoldIndex;

/// A set of word entries answering membership queries.
///
/// Built once and immutable afterwards; lookups never mutate it, so a
/// dictionary is shared freely behind an `Arc`. Load failures do not prevent
/// construction: they are collected in [`errors`](Self::errors) alongside
/// whatever entries could be read.
#[derive(Debug, Clone)]
pub struct SpellingDictionary {
    name: String,
    source: Option<String>,
    /// Entries keyed by their NFC text.
    entries: HashMap<String, WordEntry>,
    index: FoldIndex,
    case_sensitive: bool,
    errors: Vec<LoadError>,
}

impl SpellingDictionary {
    /// Build a dictionary from parsed entries.
    ///
    /// Entries with the same text are combined: the result is forbidden if
    /// any of them is.
    pub fn from_entries<I>(
        name: impl Into<String>,
        source: Option<String>,
        entries: I,
        case_sensitive: bool,
    ) -> Self
    where
        I: IntoIterator<Item = WordEntry>,
    {
        let mut table = HashMap::new();
        for entry in entries {
            insert_entry(&mut table, entry);
        }
        Self::build(name.into(), source, table, case_sensitive, Vec::new())
    }

    /// Build a dictionary from an inline list of marked words.
    pub fn from_words<S: AsRef<str>>(
        name: impl Into<String>,
        words: &[S],
        case_sensitive: bool,
    ) -> Self {
        Self::from_entries(name, None, parse_words(words), case_sensitive)
    }

    /// An empty dictionary carrying a single load error.
    pub fn failed(name: impl Into<String>, source: Option<String>, error: LoadError) -> Self {
        Self::build(name.into(), source, HashMap::new(), false, vec![error])
    }

    /// Combine several dictionaries into one.
    ///
    /// Entries are unioned, and a forbidden marking from any part suppresses
    /// the word in the result. Errors are concatenated in part order. The
    /// result is case sensitive if any part is.
    pub fn merge<'a, I>(name: impl Into<String>, parts: I) -> Self
    where
        I: IntoIterator<Item = &'a SpellingDictionary>,
    {
        let mut table = HashMap::new();
        let mut errors = Vec::new();
        let mut case_sensitive = false;

        for part in parts {
            for entry in part.entries.values() {
                insert_entry(&mut table, entry.clone());
            }
            errors.extend(part.errors.iter().cloned());
            case_sensitive |= part.case_sensitive;
        }

        Self::build(name.into(), None, table, case_sensitive, errors)
    }

    fn build(
        name: String,
        source: Option<String>,
        entries: HashMap<String, WordEntry>,
        case_sensitive: bool,
        errors: Vec<LoadError>,
    ) -> Self {
        let index = FoldIndex::new(entries.values());
        Self {
            name,
            source,
            entries,
            index,
            case_sensitive,
            errors,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved source this dictionary was read from, if any.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Errors collected while loading, in source order.
    pub fn errors(&self) -> &[LoadError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The stored entry for an exact (NFC) text, forbidden or not.
    pub fn entry(&self, text: &str) -> Option<&WordEntry> {
        self.entries.get(text)
    }

    /// All entries, in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.values()
    }
}

fn insert_entry(table: &mut HashMap<String, WordEntry>, entry: WordEntry) {
    match table.entry(entry.text.clone()) {
        Entry::Occupied(mut occupied) => {
            let existing = occupied.get_mut();
            existing.forbidden |= entry.forbidden;
            existing.compound = existing.compound.merge(entry.compound);
        }
        Entry::Vacant(vacant) => {
            vacant.insert(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadErrorKind;
    use lexcache_core::entry::CompoundPolicy;

    #[test]
    fn duplicate_entries_are_combined() {
        let dict = SpellingDictionary::from_words("d", &["word", "!word", "word*"], false);
        assert_eq!(dict.len(), 1);
        let entry = dict.entry("word").unwrap();
        assert!(entry.forbidden);
        assert_eq!(entry.compound, CompoundPolicy::LooseBothEnds);
    }

    #[test]
    fn failed_dictionary_is_empty_with_one_error() {
        let dict = SpellingDictionary::failed(
            "html",
            None,
            LoadError::definition_not_found("html"),
        );
        assert!(dict.is_empty());
        assert_eq!(dict.errors().len(), 1);
        assert_eq!(dict.errors()[0].kind(), LoadErrorKind::DefinitionNotFound);
        assert!(!dict.has("html"));
    }

    #[test]
    fn merge_unions_entries() {
        let a = SpellingDictionary::from_words("a", &["one", "two"], false);
        let b = SpellingDictionary::from_words("b", &["three"], false);
        let merged = SpellingDictionary::merge("ab", [&a, &b]);
        assert_eq!(merged.len(), 3);
        assert!(merged.has("one"));
        assert!(merged.has("three"));
    }

    #[test]
    fn merge_forbidden_wins_in_either_order() {
        let allow = SpellingDictionary::from_words("allow", &["word"], false);
        let forbid = SpellingDictionary::from_words("forbid", &["!word"], false);

        let merged = SpellingDictionary::merge("m", [&allow, &forbid]);
        assert!(!merged.has("word"));
        let merged = SpellingDictionary::merge("m", [&forbid, &allow]);
        assert!(!merged.has("word"));
    }

    #[test]
    fn merge_concatenates_errors_in_order() {
        let first = SpellingDictionary::failed("first", None, LoadError::definition_not_found("first"));
        let ok = SpellingDictionary::from_words("ok", &["one"], false);
        let second = SpellingDictionary::failed("second", None, LoadError::definition_not_found("second"));

        let merged = SpellingDictionary::merge("m", [&first, &ok, &second]);
        let sources: Vec<&str> = merged.errors().iter().map(|e| e.dictionary()).collect();
        assert_eq!(sources, ["first", "second"]);
        assert!(merged.has("one"));
    }

    #[test]
    fn merge_case_sensitive_if_any_part_is() {
        let a = SpellingDictionary::from_words("a", &["one"], false);
        let b = SpellingDictionary::from_words("b", &["two"], true);
        assert!(SpellingDictionary::merge("m", [&a, &b]).case_sensitive());
        assert!(!SpellingDictionary::merge("m", [&a]).case_sensitive());
    }

    #[test]
    fn accessors() {
        let dict = SpellingDictionary::from_entries(
            "words",
            Some("file:///tmp/words.txt".to_string()),
            vec![WordEntry::new("one")],
            false,
        );
        assert_eq!(dict.name(), "words");
        assert_eq!(dict.source(), Some("file:///tmp/words.txt"));
        assert_eq!(dict.words().count(), 1);
        assert!(dict.errors().is_empty());
    }
}
