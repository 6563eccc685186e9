//! HTTP fetcher for downloading blocklists.

use futures::stream::{self, StreamExt, TryStreamExt};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{HostsError, Result};

/// Default per-request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// HTTP client for fetching blocklists
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a fetcher with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a fetcher whose requests each time out after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("hostsgen/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(HostsError::Client)?;
        Ok(Self { client })
    }

    /// Fetch a single URL, returning the raw body.
    ///
    /// Any non-success status is an error. There is no retry.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!("Fetching {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| request_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HostsError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| request_error(url, e))?;

        info!("Fetched {} ({} bytes)", url, body.len());
        Ok(body.to_vec())
    }

    /// Fetch every URL concurrently, one in-flight request per URL.
    ///
    /// Payloads come back in completion order. The first failure aborts
    /// the whole batch; outstanding requests are dropped.
    pub async fn fetch_all<S: AsRef<str>>(&self, urls: &[S]) -> Result<Vec<Vec<u8>>> {
        if urls.is_empty() {
            return Ok(Vec::new());
        }

        stream::iter(urls.iter().map(|url| self.fetch(url.as_ref())))
            .buffer_unordered(urls.len())
            .try_collect()
            .await
    }
}

fn request_error(url: &str, source: reqwest::Error) -> HostsError {
    if source.is_timeout() {
        HostsError::Timeout {
            url: url.to_string(),
        }
    } else {
        HostsError::Fetch {
            url: url.to_string(),
            source,
        }
    }
}
