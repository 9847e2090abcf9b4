// Local filesystem provider

use std::path::PathBuf;

use async_trait::async_trait;
use url::Url;

use super::{FileResourceProvider, StatSnapshot};
use crate::error::ProviderError;

/// Provider backed by the local filesystem.
///
/// Serves `file:` URLs. Network schemes are recognized but have no
/// transport here: async access reports [`ProviderError::UnsupportedScheme`]
/// and blocking access reports [`ProviderError::RemoteSync`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalProvider;

impl LocalProvider {
    pub fn new() -> Self {
        Self
    }

    fn local_path(url: &Url) -> Result<PathBuf, ProviderError> {
        if url.scheme() != "file" {
            return Err(ProviderError::UnsupportedScheme {
                reference: url.to_string(),
                scheme: url.scheme().to_string(),
            });
        }
        url.to_file_path()
            .map_err(|()| ProviderError::InvalidReference {
                reference: url.to_string(),
            })
    }

    fn blocking_path(url: &Url) -> Result<PathBuf, ProviderError> {
        if is_remote(url) {
            return Err(ProviderError::RemoteSync {
                reference: url.to_string(),
            });
        }
        Self::local_path(url)
    }
}

fn is_remote(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https" | "ftp")
}

fn decode(url: &Url, bytes: Vec<u8>) -> Result<String, ProviderError> {
    String::from_utf8(bytes).map_err(|_| ProviderError::InvalidEncoding {
        reference: url.to_string(),
    })
}

fn snapshot(metadata: &std::fs::Metadata) -> StatSnapshot {
    StatSnapshot::new(metadata.len(), metadata.modified().ok())
}

#[async_trait]
impl FileResourceProvider for LocalProvider {
    async fn read_content(&self, url: &Url) -> Result<String, ProviderError> {
        let path = Self::local_path(url)?;
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| ProviderError::from_read(url.as_str(), e))?;
        decode(url, bytes)
    }

    fn read_content_sync(&self, url: &Url) -> Result<String, ProviderError> {
        let path = Self::blocking_path(url)?;
        let bytes = std::fs::read(&path).map_err(|e| ProviderError::from_read(url.as_str(), e))?;
        decode(url, bytes)
    }

    async fn stat(&self, url: &Url) -> Result<StatSnapshot, ProviderError> {
        let path = Self::local_path(url)?;
        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|e| ProviderError::from_stat(url.as_str(), e))?;
        Ok(snapshot(&metadata))
    }

    fn stat_sync(&self, url: &Url) -> Result<StatSnapshot, ProviderError> {
        let path = Self::blocking_path(url)?;
        let metadata =
            std::fs::metadata(&path).map_err(|e| ProviderError::from_stat(url.as_str(), e))?;
        Ok(snapshot(&metadata))
    }
}
