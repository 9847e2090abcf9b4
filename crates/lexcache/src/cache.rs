// Dictionary Cache Manager: parsed dictionaries keyed by resolved source

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use futures::future::join_all;
use hashbrown::HashMap;
use tracing::{debug, warn};
use url::Url;

use crate::definition::DictionaryDefinition;
use crate::dictionary::SpellingDictionary;
use crate::error::{LoadError, LoadErrorKind, ProviderError};
use crate::parser::{parse_word_list, parse_words};
use crate::provider::{FileResourceProvider, LocalProvider, StatComparison, StatSnapshot};

/// Result of [`DictionaryCache::get`].
#[derive(Debug, Clone)]
pub struct CachedDictionary {
    pub dictionary: Arc<SpellingDictionary>,
    /// `true` if the source was parsed by this call, `false` if the cached
    /// dictionary was returned.
    pub fresh: bool,
}

/// A parsed dictionary together with the source state it was parsed from.
struct CacheEntry {
    key: String,
    /// `None` when the stat failed; such an entry never survives revalidation.
    stat: Option<StatSnapshot>,
    dictionary: Arc<SpellingDictionary>,
    /// Inline words layered over `dictionary`, keyed by the word list.
    /// Dropped together with the entry when the source is re-parsed.
    layers: Vec<(Vec<String>, Arc<SpellingDictionary>)>,
    loaded_at: Instant,
}

impl CacheEntry {
    /// The cached dictionary with a definition's inline words on top.
    fn layered(&mut self, words: Option<&[String]>) -> Arc<SpellingDictionary> {
        let Some(words) = words.filter(|w| !w.is_empty()) else {
            return Arc::clone(&self.dictionary);
        };
        if let Some((_, layered)) = self.layers.iter().find(|(key, _)| key.as_slice() == words) {
            return Arc::clone(layered);
        }

        let inline = SpellingDictionary::from_entries(
            self.dictionary.name(),
            None,
            parse_words(words),
            self.dictionary.case_sensitive(),
        );
        let layered = Arc::new(SpellingDictionary::merge(
            self.dictionary.name(),
            [self.dictionary.as_ref(), &inline],
        ));
        self.layers.push((words.to_vec(), Arc::clone(&layered)));
        layered
    }
}

/// One cache key. The async mutex serializes loads of the same source, so at
/// most one read is in flight per key and concurrent callers wait for it.
#[derive(Default)]
struct CacheSlot {
    state: tokio::sync::Mutex<Option<CacheEntry>>,
}

/// Outcome of checking a cached entry before reuse.
enum Reuse {
    Valid,
    Stale,
}

/// Caches parsed dictionaries by resolved source identity.
///
/// A cached dictionary is returned unchanged until [`refresh`](Self::refresh)
/// marks it stale. The next `get` then re-stats the source: an unchanged stat
/// keeps the parsed dictionary, a changed or failed stat re-parses it.
///
/// Load failures never escape: a source that cannot be read yields an empty
/// dictionary carrying a single [`LoadError`].
///
/// The cache is an ordinary value; create one per session and share it by
/// reference or `Arc`.
pub struct DictionaryCache {
    provider: Arc<dyn FileResourceProvider>,
    slots: Mutex<HashMap<String, Arc<CacheSlot>>>,
    /// Entries loaded at or before this instant must be revalidated.
    stale_before: Mutex<Option<Instant>>,
}

impl Default for DictionaryCache {
    fn default() -> Self {
        Self::new(Arc::new(LocalProvider::new()))
    }
}

impl DictionaryCache {
    pub fn new(provider: Arc<dyn FileResourceProvider>) -> Self {
        Self {
            provider,
            slots: Mutex::new(HashMap::new()),
            stale_before: Mutex::new(None),
        }
    }

    /// Number of sources the cache has seen.
    pub fn len(&self) -> usize {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mark every entry loaded more than `max_age` ago as stale.
    ///
    /// `Duration::ZERO` marks the whole cache. Parsed data is kept; stale
    /// entries are revalidated against the source on their next `get`.
    pub fn refresh(&self, max_age: Duration) {
        let Some(cutoff) = Instant::now().checked_sub(max_age) else {
            return;
        };
        let mut stale_before = self
            .stale_before
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if stale_before.is_none_or(|current| current < cutoff) {
            *stale_before = Some(cutoff);
        }
        debug!(?max_age, "dictionary cache refreshed");
    }

    /// Load the dictionary for `definition`, using the cache when possible.
    pub async fn get(&self, definition: &DictionaryDefinition) -> CachedDictionary {
        let url = match self.resolve(definition) {
            Ok(url) => url,
            Err(uncached) => return uncached,
        };
        let key = url.to_string();
        let slot = self.slot(&key);
        let mut state = slot.state.lock().await;

        let checked_at = Instant::now();
        let stat = match state.as_mut() {
            Some(entry) => match self.check(entry) {
                Reuse::Valid => return hit(definition, entry),
                Reuse::Stale => {
                    let stat = self.provider.stat(&url).await;
                    if self.revalidate(entry, &stat, checked_at) {
                        return hit(definition, entry);
                    }
                    stat
                }
            },
            None => self.provider.stat(&url).await,
        };

        let (stat, content) = match stat {
            Ok(stat) => (Some(stat), self.provider.read_content(&url).await),
            Err(err) if err.is_not_found() => (None, Err(err)),
            Err(err) => {
                debug!(%key, %err, "stat failed, reading anyway");
                (None, self.provider.read_content(&url).await)
            }
        };
        let entry = build_entry(&definition.name, key, checked_at, stat, content);
        store(&mut state, definition, entry)
    }

    /// Blocking variant of [`get`](Self::get), sharing the same cache table.
    ///
    /// Remote sources fail with a "failed to load" error since the provider
    /// refuses blocking network reads.
    ///
    /// # Panics
    ///
    /// Panics if called from within an asynchronous execution context (a
    /// task on a tokio runtime). That is a caller error, not a load failure:
    /// async callers use [`get`](Self::get), and code already on a blocking
    /// thread (`spawn_blocking`) may call this freely. I/O failures never
    /// panic; they are reported as load errors like in `get`.
    pub fn get_sync(&self, definition: &DictionaryDefinition) -> CachedDictionary {
        let url = match self.resolve(definition) {
            Ok(url) => url,
            Err(uncached) => return uncached,
        };
        let key = url.to_string();
        let slot = self.slot(&key);
        let mut state = slot.state.blocking_lock();

        let checked_at = Instant::now();
        let stat = match state.as_mut() {
            Some(entry) => match self.check(entry) {
                Reuse::Valid => return hit(definition, entry),
                Reuse::Stale => {
                    let stat = self.provider.stat_sync(&url);
                    if self.revalidate(entry, &stat, checked_at) {
                        return hit(definition, entry);
                    }
                    stat
                }
            },
            None => self.provider.stat_sync(&url),
        };

        let (stat, content) = match stat {
            Ok(stat) => (Some(stat), self.provider.read_content_sync(&url)),
            Err(err) if err.is_not_found() => (None, Err(err)),
            Err(err) => {
                debug!(%key, %err, "stat failed, reading anyway");
                (None, self.provider.read_content_sync(&url))
            }
        };
        let entry = build_entry(&definition.name, key, checked_at, stat, content);
        store(&mut state, definition, entry)
    }

    /// Load the dictionaries named in `names`, concurrently.
    ///
    /// The result has one dictionary per name, in the order of `names`. A name
    /// without a definition yields an empty dictionary with a "definition not
    /// found" error. When several definitions share a name the last one wins.
    pub async fn load_many<S: AsRef<str>>(
        &self,
        names: &[S],
        definitions: &[DictionaryDefinition],
    ) -> Vec<Arc<SpellingDictionary>> {
        let by_name = index_definitions(definitions);
        let loads = names.iter().map(|name| {
            let name = name.as_ref();
            let definition = by_name.get(name).copied();
            async move {
                match definition {
                    Some(definition) => self.get(definition).await.dictionary,
                    None => Arc::new(not_found(name)),
                }
            }
        });
        join_all(loads).await
    }

    /// Blocking variant of [`load_many`](Self::load_many). Loads run one after
    /// another.
    ///
    /// # Panics
    ///
    /// Same as [`get_sync`](Self::get_sync).
    pub fn load_many_sync<S: AsRef<str>>(
        &self,
        names: &[S],
        definitions: &[DictionaryDefinition],
    ) -> Vec<Arc<SpellingDictionary>> {
        let by_name = index_definitions(definitions);
        names
            .iter()
            .map(|name| match by_name.get(name.as_ref()) {
                Some(definition) => self.get_sync(definition).dictionary,
                None => Arc::new(not_found(name.as_ref())),
            })
            .collect()
    }

    /// Resolve a definition's source, or produce its final result directly
    /// when there is nothing to cache.
    fn resolve(
        &self,
        definition: &DictionaryDefinition,
    ) -> Result<Url, CachedDictionary> {
        let Some(path) = definition.path.as_deref() else {
            let dictionary = match definition.words.as_deref() {
                Some(words) => SpellingDictionary::from_words(&definition.name, words, false),
                None => {
                    let error = LoadError::new(
                        LoadErrorKind::FailedToLoad,
                        &definition.name,
                        "definition has neither path nor words",
                    );
                    warn!(dictionary = %definition.name, %error, "dictionary not loaded");
                    SpellingDictionary::failed(&definition.name, None, error)
                }
            };
            return Err(CachedDictionary {
                dictionary: Arc::new(dictionary),
                fresh: true,
            });
        };

        self.provider
            .resolve(path, definition.relative_to.as_deref())
            .map_err(|err| {
                let error = LoadError::from_provider(&definition.name, err);
                warn!(dictionary = %definition.name, %error, "dictionary source not resolved");
                CachedDictionary {
                    dictionary: Arc::new(SpellingDictionary::failed(
                        &definition.name,
                        Some(path.to_string()),
                        error,
                    )),
                    fresh: true,
                }
            })
    }

    fn slot(&self, key: &str) -> Arc<CacheSlot> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.entry(key.to_string()).or_default().clone()
    }

    fn check(&self, entry: &CacheEntry) -> Reuse {
        let stale_before = *self
            .stale_before
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        match stale_before {
            Some(cutoff) if entry.loaded_at <= cutoff => Reuse::Stale,
            _ => Reuse::Valid,
        }
    }

    /// Keep a stale entry if its source is unchanged, refreshing `loaded_at`.
    fn revalidate(
        &self,
        entry: &mut CacheEntry,
        current: &Result<StatSnapshot, ProviderError>,
        checked_at: Instant,
    ) -> bool {
        let unchanged = match (&entry.stat, current) {
            (Some(cached), Ok(current)) => {
                self.provider.compare_stat(cached, current) == StatComparison::Equal
            }
            _ => false,
        };
        if unchanged {
            entry.loaded_at = checked_at;
            debug!(key = %entry.key, "dictionary source unchanged, keeping cached copy");
        } else {
            debug!(key = %entry.key, "dictionary source changed, reloading");
        }
        unchanged
    }
}

fn index_definitions(definitions: &[DictionaryDefinition]) -> HashMap<&str, &DictionaryDefinition> {
    definitions.iter().map(|d| (d.name.as_str(), d)).collect()
}

fn not_found(name: &str) -> SpellingDictionary {
    let error = LoadError::definition_not_found(name);
    warn!(dictionary = name, %error, "dictionary not loaded");
    SpellingDictionary::failed(name, None, error)
}

fn hit(definition: &DictionaryDefinition, entry: &mut CacheEntry) -> CachedDictionary {
    debug!(key = %entry.key, "dictionary cache hit");
    CachedDictionary {
        dictionary: entry.layered(definition.words.as_deref()),
        fresh: false,
    }
}

fn store(
    state: &mut Option<CacheEntry>,
    definition: &DictionaryDefinition,
    entry: CacheEntry,
) -> CachedDictionary {
    let entry = state.insert(entry);
    CachedDictionary {
        dictionary: entry.layered(definition.words.as_deref()),
        fresh: true,
    }
}

/// Build a cache entry from the outcome of a load.
///
/// `stat` is `None` when the stat failed; the read still decides whether the
/// load succeeded, and the entry is re-parsed on its next revalidation.
fn build_entry(
    name: &str,
    key: String,
    loaded_at: Instant,
    stat: Option<StatSnapshot>,
    content: Result<String, ProviderError>,
) -> CacheEntry {
    let dictionary = match content {
        Ok(text) => {
            let entries = parse_word_list(&text);
            debug!(%key, entries = entries.len(), "dictionary parsed");
            SpellingDictionary::from_entries(name, Some(key.clone()), entries, false)
        }
        Err(err) => {
            let error = LoadError::from_provider(name, err);
            warn!(%key, %error, "dictionary not loaded");
            SpellingDictionary::failed(name, Some(key.clone()), error)
        }
    };

    CacheEntry {
        key,
        stat,
        dictionary: Arc::new(dictionary),
        layers: Vec::new(),
        loaded_at,
    }
}
