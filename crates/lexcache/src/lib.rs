//! Spelling dictionary loading, caching and word matching.
//!
//! Word lists are read through a [`FileResourceProvider`], parsed once and
//! cached by resolved source in a [`DictionaryCache`]. The resulting
//! [`SpellingDictionary`] answers membership queries with case and accent
//! folding; [`get_dictionary`] merges everything a [`DictionarySettings`]
//! names into one dictionary.
//!
//! ```no_run
//! # async fn demo() -> Result<(), lexcache::definition::SettingsError> {
//! use lexcache::{DictionaryCache, DictionarySettings, get_dictionary};
//!
//! let settings = DictionarySettings::from_json_file("lexcache.json".as_ref())?;
//! let cache = DictionaryCache::default();
//! let dictionary = get_dictionary(&cache, &settings).await;
//! for error in dictionary.errors() {
//!     eprintln!("{error}");
//! }
//! let known = dictionary.has("Café");
//! # let _ = known;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod cache;
pub mod definition;
pub mod dictionary;
pub mod error;
pub mod parser;
pub mod provider;

pub use builder::{get_dictionary, get_dictionary_sync};
pub use cache::{CachedDictionary, DictionaryCache};
pub use definition::{DictionaryDefinition, DictionarySettings};
pub use dictionary::{MatchOptions, SpellingDictionary};
pub use error::{LoadError, LoadErrorKind, ProviderError};
pub use provider::{FileResourceProvider, LocalProvider, StatComparison, StatSnapshot};
