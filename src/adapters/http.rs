use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fetches corpus files published over HTTP(S).
#[derive(Debug, Clone)]
pub struct CorpusFetcher {
    client: Client,
}

impl CorpusFetcher {
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("urdu-philology/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Raw body bytes; decoding is left to the caller's configured encoding.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("Fetching corpus from: {}", url);
        let response = self.client.get(url).send().await?;
        tracing::debug!("Corpus response status: {}", response.status());

        let response = response.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
