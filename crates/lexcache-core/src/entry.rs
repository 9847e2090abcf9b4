// Word entries and the marker syntax of a single word-list line

use crate::fold::normalize;

/// Leading marker: the word is forbidden.
const FORBID_MARKER: char = '!';

/// Boundary marker: the word may only appear as part of a compound.
const COMPOUND_REQUIRED_MARKER: char = '+';

/// Boundary marker: the word may appear alone or compounded on either end.
const COMPOUND_OPTIONAL_MARKER: char = '*';

fn is_leading_marker(c: char) -> bool {
    matches!(
        c,
        FORBID_MARKER | COMPOUND_REQUIRED_MARKER | COMPOUND_OPTIONAL_MARKER
    )
}

fn is_trailing_marker(c: char) -> bool {
    matches!(c, COMPOUND_REQUIRED_MARKER | COMPOUND_OPTIONAL_MARKER)
}

/// How an entry may take part in compound words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompoundPolicy {
    /// Plain word, no compound markers.
    #[default]
    None,
    /// `+` on either end: a compound boundary is required there.
    ForceBoundary,
    /// `*` on either end: compounding is allowed but not required.
    LooseBothEnds,
}

impl CompoundPolicy {
    /// Combine the policies of two entries with the same text.
    ///
    /// Markers are never dropped: the looser policy wins over the stricter
    /// one, and either wins over `None`.
    pub fn merge(self, other: CompoundPolicy) -> CompoundPolicy {
        match (self, other) {
            (CompoundPolicy::LooseBothEnds, _) | (_, CompoundPolicy::LooseBothEnds) => {
                CompoundPolicy::LooseBothEnds
            }
            (CompoundPolicy::ForceBoundary, _) | (_, CompoundPolicy::ForceBoundary) => {
                CompoundPolicy::ForceBoundary
            }
            _ => CompoundPolicy::None,
        }
    }
}

/// A single word record stored in a dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordEntry {
    /// The word itself, NFC-normalized, with all markers removed.
    pub text: String,
    /// A forbidden entry is never reported as a valid word.
    pub forbidden: bool,
    pub compound: CompoundPolicy,
}

impl WordEntry {
    /// Create a plain, allowed entry. The text is normalized to NFC.
    pub fn new(text: &str) -> Self {
        Self {
            text: normalize(text),
            forbidden: false,
            compound: CompoundPolicy::None,
        }
    }

    /// Return the same entry marked forbidden.
    pub fn forbid(mut self) -> Self {
        self.forbidden = true;
        self
    }
}

/// Parse one line of a word list into a [`WordEntry`].
///
/// The line is trimmed, then split into a leading run of `!`/`+`/`*`
/// markers, the word, and a trailing run of `*`/`+` markers. A `!` anywhere
/// in the leading run makes the entry forbidden. The compound policy is
/// derived from the boundary markers on both ends independently of `!`.
///
/// Returns `None` for blank lines and for lines that consist only of markers.
pub fn parse_entry(line: &str) -> Option<WordEntry> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let core_start = line.find(|c| !is_leading_marker(c)).unwrap_or(line.len());
    let (prefix, rest) = line.split_at(core_start);
    let core = rest.trim_end_matches(is_trailing_marker);
    let suffix = &rest[core.len()..];

    let core = core.trim();
    if core.is_empty() {
        return None;
    }

    let forbidden = prefix.contains(FORBID_MARKER);
    let has_marker = |marker: char| prefix.contains(marker) || suffix.contains(marker);
    let compound = if has_marker(COMPOUND_OPTIONAL_MARKER) {
        CompoundPolicy::LooseBothEnds
    } else if has_marker(COMPOUND_REQUIRED_MARKER) {
        CompoundPolicy::ForceBoundary
    } else {
        CompoundPolicy::None
    };

    Some(WordEntry {
        text: normalize(core),
        forbidden,
        compound,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> WordEntry {
        parse_entry(line).unwrap()
    }

    #[test]
    fn plain_word() {
        let e = parse("hello");
        assert_eq!(e.text, "hello");
        assert!(!e.forbidden);
        assert_eq!(e.compound, CompoundPolicy::None);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(parse("  hello\t").text, "hello");
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert!(parse_entry("").is_none());
        assert!(parse_entry("   \t ").is_none());
    }

    #[test]
    fn marker_only_lines_are_skipped() {
        assert!(parse_entry("!").is_none());
        assert!(parse_entry("+*").is_none());
        assert!(parse_entry("!+ *").is_none());
    }

    #[test]
    fn forbidden_marker() {
        let e = parse("!snarf");
        assert_eq!(e.text, "snarf");
        assert!(e.forbidden);
        assert_eq!(e.compound, CompoundPolicy::None);
    }

    #[test]
    fn forbidden_marker_after_boundary_marker() {
        let e = parse("+!snarf");
        assert_eq!(e.text, "snarf");
        assert!(e.forbidden);
        assert_eq!(e.compound, CompoundPolicy::ForceBoundary);
    }

    #[test]
    fn trailing_bang_is_part_of_the_word() {
        let e = parse("yahoo!");
        assert_eq!(e.text, "yahoo!");
        assert!(!e.forbidden);
    }

    #[test]
    fn required_boundary_markers() {
        assert_eq!(parse("+ing").compound, CompoundPolicy::ForceBoundary);
        assert_eq!(parse("pre+").compound, CompoundPolicy::ForceBoundary);
        assert_eq!(parse("+ing").text, "ing");
        assert_eq!(parse("pre+").text, "pre");
    }

    #[test]
    fn optional_boundary_markers() {
        let e = parse("*work*");
        assert_eq!(e.text, "work");
        assert_eq!(e.compound, CompoundPolicy::LooseBothEnds);
        assert_eq!(parse("+work*").compound, CompoundPolicy::LooseBothEnds);
    }

    #[test]
    fn forbidden_with_boundary_markers() {
        let e = parse("!*word+");
        assert_eq!(e.text, "word");
        assert!(e.forbidden);
        assert_eq!(e.compound, CompoundPolicy::LooseBothEnds);
    }

    #[test]
    fn inner_markers_are_kept() {
        assert_eq!(parse("c++").text, "c");
        assert_eq!(parse("a+b").text, "a+b");
        assert_eq!(parse("a*b").text, "a*b");
    }

    #[test]
    fn text_is_nfc_normalized() {
        assert_eq!(parse("cafe\u{0301}").text, "caf\u{00E9}");
    }

    #[test]
    fn merge_policies() {
        use CompoundPolicy as P;
        assert_eq!(P::None.merge(P::None), P::None);
        assert_eq!(P::None.merge(P::ForceBoundary), P::ForceBoundary);
        assert_eq!(P::ForceBoundary.merge(P::LooseBothEnds), P::LooseBothEnds);
        assert_eq!(P::LooseBothEnds.merge(P::None), P::LooseBothEnds);
    }

    #[test]
    fn forbid_marks_entry() {
        let e = WordEntry::new("word").forbid();
        assert!(e.forbidden);
        assert_eq!(e.text, "word");
    }
}
