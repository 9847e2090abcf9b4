// Composite Dictionary Builder: settings to one merged dictionary

use std::sync::Arc;

use crate::cache::DictionaryCache;
use crate::definition::DictionarySettings;
use crate::dictionary::SpellingDictionary;
use crate::parser::parse_words;

/// Name of the dictionary returned by [`get_dictionary`].
pub const COMPOSITE_NAME: &str = "[settings]";

/// Load every dictionary named in `settings` and merge them, together with
/// the inline word lists, into one dictionary.
///
/// Part order is `dictionaries` (as listed), then `words`, `userWords` and
/// `flagWords`. Every flag word is forbidden, so it is rejected even when a
/// loaded dictionary lists it. Load errors of all parts are kept in order.
pub async fn get_dictionary(
    cache: &DictionaryCache,
    settings: &DictionarySettings,
) -> SpellingDictionary {
    let loaded = cache
        .load_many(&settings.dictionaries, &settings.dictionary_definitions)
        .await;
    compose(loaded, settings)
}

/// Blocking variant of [`get_dictionary`].
///
/// # Panics
///
/// Panics if called from within an asynchronous execution context; see
/// [`DictionaryCache::get_sync`].
pub fn get_dictionary_sync(
    cache: &DictionaryCache,
    settings: &DictionarySettings,
) -> SpellingDictionary {
    let loaded = cache.load_many_sync(&settings.dictionaries, &settings.dictionary_definitions);
    compose(loaded, settings)
}

fn compose(loaded: Vec<Arc<SpellingDictionary>>, settings: &DictionarySettings) -> SpellingDictionary {
    let case_sensitive = settings.case_sensitive.unwrap_or(false);
    let inline = [
        SpellingDictionary::from_words("[words]", &settings.words, case_sensitive),
        SpellingDictionary::from_words("[userWords]", &settings.user_words, case_sensitive),
        SpellingDictionary::from_entries(
            "[flagWords]",
            None,
            parse_words(&settings.flag_words)
                .into_iter()
                .map(|entry| entry.forbid()),
            case_sensitive,
        ),
    ];

    SpellingDictionary::merge(
        COMPOSITE_NAME,
        loaded.iter().map(Arc::as_ref).chain(inline.iter()),
    )
}
