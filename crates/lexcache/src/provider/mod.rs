// File Resource Provider: the transport seam between the cache and storage

pub mod local;

use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

use async_trait::async_trait;
use url::Url;

use crate::error::ProviderError;

pub use local::LocalProvider;

/// Metadata snapshot of a resource, used to detect changes between loads.
///
/// Callers treat this as opaque and only compare snapshots through
/// [`FileResourceProvider::compare_stat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatSnapshot {
    size: u64,
    modified: Option<SystemTime>,
}

impl StatSnapshot {
    pub fn new(size: u64, modified: Option<SystemTime>) -> Self {
        Self { size, modified }
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }
}

/// Outcome of comparing two [`StatSnapshot`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatComparison {
    Equal,
    Changed,
}

/// Resolves references and reads word-list content and metadata.
///
/// The cache never touches storage directly; everything goes through this
/// trait so tests can substitute an in-memory implementation.
#[async_trait]
pub trait FileResourceProvider: Send + Sync {
    /// Turn a path or URL into the canonical URL used as the cache key.
    ///
    /// `relative_to` is the directory relative paths are resolved against;
    /// the current directory is used when it is `None`.
    fn resolve(&self, reference: &str, relative_to: Option<&Path>) -> Result<Url, ProviderError> {
        resolve_reference(reference, relative_to)
    }

    /// Read the full text content of a resource.
    async fn read_content(&self, url: &Url) -> Result<String, ProviderError>;

    /// Blocking variant of [`read_content`](Self::read_content).
    ///
    /// Fails with [`ProviderError::RemoteSync`] for network resources.
    fn read_content_sync(&self, url: &Url) -> Result<String, ProviderError>;

    /// Fetch a metadata snapshot of a resource.
    async fn stat(&self, url: &Url) -> Result<StatSnapshot, ProviderError>;

    /// Blocking variant of [`stat`](Self::stat).
    fn stat_sync(&self, url: &Url) -> Result<StatSnapshot, ProviderError>;

    /// Compare two snapshots of the same resource.
    fn compare_stat(&self, left: &StatSnapshot, right: &StatSnapshot) -> StatComparison {
        if left == right {
            StatComparison::Equal
        } else {
            StatComparison::Changed
        }
    }
}

/// Default reference resolution shared by providers.
///
/// Anything with a URL scheme of two or more characters is parsed as a URL
/// (so Windows drive letters stay paths). Everything else is a filesystem
/// path: made absolute against `relative_to` (or the current directory),
/// lexically normalized and converted to a `file:` URL.
pub fn resolve_reference(reference: &str, relative_to: Option<&Path>) -> Result<Url, ProviderError> {
    let invalid = || ProviderError::InvalidReference {
        reference: reference.to_string(),
    };

    if has_url_scheme(reference) {
        return Url::parse(reference).map_err(|_| invalid());
    }

    let path = Path::new(reference);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let base = match relative_to {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir().map_err(|_| invalid())?,
        };
        base.join(path)
    };

    Url::from_file_path(normalize_path(&absolute)).map_err(|()| invalid())
}

fn has_url_scheme(reference: &str) -> bool {
    let Some((scheme, _)) = reference.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    scheme.len() >= 2
        && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Remove `.` and `..` components without touching the filesystem.
fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
