// Error types: provider failures and the load errors attached to dictionaries

use std::fmt;
use std::io;
use std::sync::Arc;

/// Failure reported by a [`FileResourceProvider`](crate::provider::FileResourceProvider).
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The resource does not exist.
    #[error("resource not found: {reference}")]
    SourceNotFound { reference: String },

    /// The resource exists but could not be read.
    #[error("failed to read {reference}: {source}")]
    SourceRead {
        reference: String,
        #[source]
        source: io::Error,
    },

    /// The content is not valid UTF-8.
    #[error("{reference} is not valid UTF-8")]
    InvalidEncoding { reference: String },

    /// Metadata lookup failed for a reason other than a missing resource.
    #[error("failed to stat {reference}: {source}")]
    Stat {
        reference: String,
        #[source]
        source: io::Error,
    },

    /// The provider has no transport for this URL scheme.
    #[error("unsupported scheme `{scheme}` for {reference}")]
    UnsupportedScheme { reference: String, scheme: String },

    /// A blocking read was requested for a remote resource.
    #[error("{reference} is remote and cannot be read synchronously")]
    RemoteSync { reference: String },

    /// The reference could not be turned into a resource location.
    #[error("cannot resolve `{reference}` to a resource location")]
    InvalidReference { reference: String },
}

impl ProviderError {
    /// Map an I/O error from a read to the matching provider error.
    pub fn from_read(reference: impl Into<String>, err: io::Error) -> Self {
        let reference = reference.into();
        if err.kind() == io::ErrorKind::NotFound {
            ProviderError::SourceNotFound { reference }
        } else {
            ProviderError::SourceRead {
                reference,
                source: err,
            }
        }
    }

    /// Map an I/O error from a metadata lookup to the matching provider error.
    pub fn from_stat(reference: impl Into<String>, err: io::Error) -> Self {
        let reference = reference.into();
        if err.kind() == io::ErrorKind::NotFound {
            ProviderError::SourceNotFound { reference }
        } else {
            ProviderError::Stat {
                reference,
                source: err,
            }
        }
    }

    /// Whether the resource is known not to exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::SourceNotFound { .. })
    }
}

/// Category of a [`LoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadErrorKind {
    /// The dictionary source does not exist.
    MissingFile,
    /// The source exists but could not be read, decoded or resolved.
    FailedToLoad,
    /// A requested dictionary name has no definition.
    DefinitionNotFound,
}

impl LoadErrorKind {
    /// Human-readable category label.
    pub fn label(self) -> &'static str {
        match self {
            LoadErrorKind::MissingFile => "missing dictionary file",
            LoadErrorKind::FailedToLoad => "failed to load",
            LoadErrorKind::DefinitionNotFound => "definition not found",
        }
    }
}

impl fmt::Display for LoadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A per-source failure captured while building a dictionary.
///
/// Load errors never abort a load; they are attached to the resulting
/// [`SpellingDictionary`](crate::dictionary::SpellingDictionary) and read back
/// with `errors()`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{kind}: {message} (dictionary \"{dictionary}\")")]
pub struct LoadError {
    kind: LoadErrorKind,
    /// Name of the dictionary the failure belongs to.
    dictionary: String,
    message: String,
    #[source]
    cause: Option<Arc<ProviderError>>,
}

impl LoadError {
    pub fn new(
        kind: LoadErrorKind,
        dictionary: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            dictionary: dictionary.into(),
            message: message.into(),
            cause: None,
        }
    }

    /// Wrap a provider failure for dictionary `name`.
    ///
    /// A missing resource becomes [`LoadErrorKind::MissingFile`]; anything
    /// else becomes [`LoadErrorKind::FailedToLoad`].
    pub fn from_provider(name: &str, err: ProviderError) -> Self {
        let kind = if err.is_not_found() {
            LoadErrorKind::MissingFile
        } else {
            LoadErrorKind::FailedToLoad
        };
        Self {
            kind,
            dictionary: name.to_string(),
            message: "failed to load".to_string(),
            cause: Some(Arc::new(err)),
        }
    }

    pub fn definition_not_found(name: &str) -> Self {
        Self::new(LoadErrorKind::DefinitionNotFound, name, "no matching definition")
    }

    pub fn kind(&self) -> LoadErrorKind {
        self.kind
    }

    /// The category label, e.g. `"missing dictionary file"`.
    pub fn name(&self) -> &'static str {
        self.kind.label()
    }

    /// Short description of the failure, e.g. `"failed to load"`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Name of the dictionary that failed.
    pub fn dictionary(&self) -> &str {
        &self.dictionary
    }

    /// The underlying provider failure, if any.
    pub fn cause(&self) -> Option<&ProviderError> {
        self.cause.as_deref()
    }
}
