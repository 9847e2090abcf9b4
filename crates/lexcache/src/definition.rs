// Dictionary definitions and the settings surface they arrive in

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A named dictionary source, as supplied by configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryDefinition {
    /// Unique name used by `dictionaries` to select this definition.
    pub name: String,

    /// Path or URL of the word-list file.
    #[serde(default, alias = "source", skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Inline words, added on top of the file content (or used alone when
    /// there is no `path`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<String>>,

    /// Directory a relative `path` is resolved against. Set from the
    /// location of the settings file the definition came from.
    #[serde(skip)]
    pub relative_to: Option<PathBuf>,
}

impl DictionaryDefinition {
    /// A definition backed by a word-list file.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// A definition backed only by inline words.
    pub fn inline<S: AsRef<str>>(name: impl Into<String>, words: &[S]) -> Self {
        Self {
            name: name.into(),
            words: Some(words.iter().map(|w| w.as_ref().to_string()).collect()),
            ..Self::default()
        }
    }

    /// Resolve a relative `path` against `dir`.
    pub fn relative_to(mut self, dir: impl Into<PathBuf>) -> Self {
        self.relative_to = Some(dir.into());
        self
    }
}

/// Error type for reading settings files.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The dictionary-related part of a spell-checker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DictionarySettings {
    /// Names of the definitions to load, in order.
    pub dictionaries: Vec<String>,
    pub dictionary_definitions: Vec<DictionaryDefinition>,
    /// Project words. Markers (`!`, `+`, `*`) are honored.
    pub words: Vec<String>,
    /// The user's personal words.
    pub user_words: Vec<String>,
    /// Words that are always reported as misspelled.
    pub flag_words: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
}

impl DictionarySettings {
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file.
    ///
    /// Relative dictionary paths in the file resolve against the file's
    /// directory.
    pub fn from_json_file(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut settings = Self::from_json_str(&json)?;

        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let dir = std::path::absolute(&dir).unwrap_or(dir);
        for def in &mut settings.dictionary_definitions {
            if def.relative_to.is_none() {
                def.relative_to = Some(dir.clone());
            }
        }
        Ok(settings)
    }
}
