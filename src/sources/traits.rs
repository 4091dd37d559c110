use async_trait::async_trait;

use crate::errors::SourceResult;

/// Anything that can produce the raw playlist text for a run
#[async_trait]
pub trait PlaylistSource: Send + Sync {
    /// Location used for logging (may carry credentials, obfuscate before use)
    fn location(&self) -> &str;

    /// Fetch the whole playlist; any failure is fatal to the run
    async fn fetch_playlist(&self) -> SourceResult<String>;
}
