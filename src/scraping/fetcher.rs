//! HTTP transport behind a narrow trait, so the crawl loop can be driven
//! against scripted pages in tests.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

const USER_AGENT: &str = concat!("questcrawl/", env!("CARGO_PKG_VERSION"));

/// Connection-establishment bound; the full per-request deadline is passed
/// to each fetch.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// What came back from one GET, success status or not.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

/// Transport-level failure. Non-2xx statuses are not errors here; they
/// come back as a normal [`FetchedPage`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("timed out after {timeout:?}")]
    Timeout { timeout: Duration },
    #[error("network error: {0}")]
    Network(String),
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    /// One GET with a hard per-request deadline.
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<FetchedPage, FetchError>;
}

/// Production fetcher: one shared reqwest client, per-request timeout,
/// transparent gzip/brotli/deflate decompression.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<FetchedPage, FetchError> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify(e, timeout))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| classify(e, timeout))?;

        Ok(FetchedPage { status, body })
    }
}

fn classify(error: reqwest::Error, timeout: Duration) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout { timeout }
    } else {
        FetchError::Network(error.to_string())
    }
}
