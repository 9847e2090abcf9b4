// Case pattern detection for dictionary words and lookup queries

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found in the word (only digits, punctuation, etc.).
    NoLetters,
    /// All letters are lowercase: "café".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Café".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "iPhone", "McDonald".
    Complex,
    /// All letters are uppercase: "CAFÉ".
    AllUpper,
}

/// Detect the case pattern of a word.
///
/// Non-letter characters (digits, punctuation, combining marks) are ignored
/// when determining the pattern. Letters without case (CJK, for example)
/// count as letters but do not break an all-upper or all-lower run.
pub fn detect_case(word: &str) -> CaseType {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return CaseType::NoLetters;
    };

    let mut first_uc = false;
    let mut rest_lc = true;
    let mut all_uc = true;
    let mut no_letters = true;

    if first.is_uppercase() {
        first_uc = true;
        no_letters = false;
    }
    if first.is_lowercase() {
        all_uc = false;
        no_letters = false;
    }

    for c in chars {
        if c.is_uppercase() {
            no_letters = false;
            rest_lc = false;
        }
        if c.is_lowercase() {
            all_uc = false;
            no_letters = false;
        }
    }

    if no_letters {
        return CaseType::NoLetters;
    }
    if all_uc {
        return CaseType::AllUpper;
    }
    if !rest_lc {
        return CaseType::Complex;
    }
    if first_uc {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}

/// Whether `word` reads as an acronym: at least two characters, at least one
/// letter, and every letter uppercase ("NASA", "CAFÉ", "B2B").
pub fn is_acronym(word: &str) -> bool {
    detect_case(word) == CaseType::AllUpper && word.chars().nth(1).is_some()
}

/// Whether every letter in `word` is lowercase and there is at least one.
///
/// Entries for which this holds are "generic" words and accept any
/// capitalization of the lookup query.
pub fn is_all_lower(word: &str) -> bool {
    detect_case(word) == CaseType::AllLower
}
