use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

use crate::errors::{SourceError, SourceResult};
use crate::utils::text::decode_lossy;
use crate::utils::url::UrlUtils;

/// Thin reqwest wrapper used to download playlists
#[derive(Debug, Clone)]
pub struct StandardHttpClient {
    client: Client,
}

impl StandardHttpClient {
    /// Create a client with connection and total request timeouts
    pub fn new(
        connect_timeout: Duration,
        request_timeout: Duration,
        user_agent: Option<&str>,
    ) -> SourceResult<Self> {
        let mut builder = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout);
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent.to_string());
        }

        let client = builder
            .build()
            .map_err(|e| SourceError::client_setup(e.to_string()))?;

        Ok(Self { client })
    }

    /// GET a URL and return its body as text
    ///
    /// Transport failures and non-2xx statuses are both errors. Invalid UTF-8
    /// is replaced rather than rejected.
    pub async fn fetch_text(&self, url: &str) -> SourceResult<String> {
        let safe_url = UrlUtils::obfuscate_credentials(url);
        debug!("Fetching text content from: {}", safe_url);

        let response = self.client.get(url).send().await.map_err(|e| {
            SourceError::unreachable(
                safe_url.clone(),
                UrlUtils::obfuscate_credentials(&e.to_string()),
            )
        })?;

        let bytes = Self::success_body(response, &safe_url).await?;

        let content = decode_lossy(&bytes, &safe_url);

        debug!("Successfully fetched {} characters of text content", content.len());
        Ok(content)
    }

    async fn success_body(response: Response, safe_url: &str) -> SourceResult<Vec<u8>> {
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::http(
                status.as_u16(),
                format!(
                    "{} - URL: {}",
                    status.canonical_reason().unwrap_or("Unknown"),
                    safe_url
                ),
            ));
        }

        let bytes = response.bytes().await.map_err(|e| {
            SourceError::unreachable(
                safe_url.to_string(),
                format!("Failed to read response: {}", UrlUtils::obfuscate_credentials(&e.to_string())),
            )
        })?;

        debug!("Fetched {} bytes of raw content", bytes.len());
        Ok(bytes.to_vec())
    }
}
