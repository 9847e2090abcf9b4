// Word List Parser: raw word-list text to entries

use lexcache_core::entry::{WordEntry, parse_entry};

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Parse the content of a word-list file, one word per line.
///
/// Blank and whitespace-only lines are skipped, and a leading byte order mark
/// is ignored. Each remaining line goes through [`parse_entry`], so markers are
/// resolved here once and never re-derived at lookup time.
pub fn parse_word_list(content: &str) -> Vec<WordEntry> {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    content.lines().filter_map(parse_entry).collect()
}

/// Parse an inline word list, such as `words` from the settings.
pub fn parse_words<S: AsRef<str>>(words: &[S]) -> Vec<WordEntry> {
    words.iter().filter_map(|w| parse_entry(w.as_ref())).collect()
}
