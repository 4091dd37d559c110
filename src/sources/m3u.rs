//! M3U playlist sources
//!
//! Playlists are normally downloaded over HTTP(S); a local file can stand in
//! for offline runs and fixtures.

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, error};

use super::traits::PlaylistSource;
use crate::config::SourceConfig;
use crate::errors::{SourceError, SourceResult};
use crate::utils::{StandardHttpClient, UrlUtils, decode_lossy};

/// Playlist fetched with a single HTTP GET
pub struct HttpPlaylistSource {
    url: String,
    http_client: StandardHttpClient,
}

impl HttpPlaylistSource {
    pub fn new(url: impl Into<String>, http_client: StandardHttpClient) -> Self {
        Self {
            url: url.into(),
            http_client,
        }
    }

    pub fn from_config(config: &SourceConfig) -> SourceResult<Self> {
        let http_client = StandardHttpClient::new(
            config.connect_timeout,
            config.request_timeout,
            config.user_agent.as_deref(),
        )?;
        Ok(Self::new(config.url.trim(), http_client))
    }
}

#[async_trait]
impl PlaylistSource for HttpPlaylistSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch_playlist(&self) -> SourceResult<String> {
        self.http_client.fetch_text(&self.url).await.inspect_err(|e| {
            error!(
                "Failed to fetch playlist from '{}': {}",
                UrlUtils::obfuscate_credentials(&self.url),
                e
            );
        })
    }
}

/// Playlist read from the local filesystem
pub struct FilePlaylistSource {
    location: String,
    path: PathBuf,
}

impl FilePlaylistSource {
    pub fn new(location: &str) -> SourceResult<Self> {
        let path = UrlUtils::to_local_path(location).ok_or_else(|| {
            SourceError::invalid_location(location, "not a local file path or file:// URL")
        })?;
        Ok(Self {
            location: location.to_string(),
            path,
        })
    }
}

#[async_trait]
impl PlaylistSource for FilePlaylistSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch_playlist(&self) -> SourceResult<String> {
        debug!("Reading playlist from {}", self.path.display());
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            SourceError::invalid_location(self.path.display().to_string(), e.to_string())
        })?;
        Ok(decode_lossy(&bytes, &self.location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_file_source_reads_playlist() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "#EXTM3U\n#EXTINF:-1,Local\nhttp://example.com/local\n").unwrap();

        let source = FilePlaylistSource::new(file.path().to_str().unwrap()).unwrap();
        let content = source.fetch_playlist().await.unwrap();
        assert!(content.contains("#EXTINF:-1,Local"));
    }

    #[tokio::test]
    async fn test_invalid_utf8_byte_keeps_the_playlist() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"#EXTM3U\n#EXTINF:-1,Caf\xE9 TV\nhttp://example.com/cafe\n#EXTINF:-1,Aaj Tak\nhttp://example.com/aajtak\n",
        )
        .unwrap();

        let source = FilePlaylistSource::new(file.path().to_str().unwrap()).unwrap();
        let content = source.fetch_playlist().await.unwrap();
        assert!(content.contains("Caf\u{FFFD} TV"));
        assert!(content.contains("#EXTINF:-1,Aaj Tak"));
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.m3u");
        let source = FilePlaylistSource::new(missing.to_str().unwrap()).unwrap();

        assert!(matches!(
            source.fetch_playlist().await,
            Err(SourceError::InvalidLocation { .. })
        ));
    }
}
