//! Source factory: picks the playlist source for a configured location

use tracing::debug;

use super::m3u::{FilePlaylistSource, HttpPlaylistSource};
use super::traits::PlaylistSource;
use crate::config::SourceConfig;
use crate::errors::SourceResult;
use crate::utils::UrlUtils;

pub struct PlaylistSourceFactory;

impl PlaylistSourceFactory {
    /// HTTP(S) locations are downloaded, anything else is read from disk
    pub fn create(config: &SourceConfig) -> SourceResult<Box<dyn PlaylistSource>> {
        if UrlUtils::is_http_url(&config.url) {
            debug!("Using HTTP playlist source");
            Ok(Box::new(HttpPlaylistSource::from_config(config)?))
        } else {
            debug!("Using local file playlist source");
            Ok(Box::new(FilePlaylistSource::new(config.url.trim())?))
        }
    }
}
