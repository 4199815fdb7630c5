use async_trait::async_trait;
use std::sync::Arc;

use crate::fetcher::{backoff::calculate_backoff_delay, errors::FetchError};
use tracing::{instrument, warn};

/// Loads a URL and returns the final rendered markup.
///
/// The extraction core only ever talks to this trait, so pages can come from
/// an HTTP client, a browser, or fixtures on disk.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageLoader: Send + Sync {
    async fn load_page(&self, url: &str) -> Result<String, FetchError>;
}

#[async_trait]
impl<L: PageLoader + ?Sized> PageLoader for Arc<L> {
    async fn load_page(&self, url: &str) -> Result<String, FetchError> {
        (**self).load_page(url).await
    }
}

/// Retries transient load failures with exponential backoff.
///
/// Blocked responses and other non-retryable errors are returned on the
/// first attempt.
#[derive(Debug, Clone)]
pub struct RetryingLoader<L> {
    inner: L,
    max_retries: u32,
    base_delay_ms: u64,
}

impl<L: PageLoader> RetryingLoader<L> {
    pub fn new(inner: L, max_retries: u32, base_delay_ms: u64) -> Self {
        Self {
            inner,
            max_retries,
            base_delay_ms,
        }
    }
}

#[async_trait]
impl<L: PageLoader> PageLoader for RetryingLoader<L> {
    #[instrument(skip(self), fields(max_retries = self.max_retries))]
    async fn load_page(&self, url: &str) -> Result<String, FetchError> {
        let mut attempt = 0;
        loop {
            match self.inner.load_page(url).await {
                Ok(body) => return Ok(body),
                Err(err) if err.should_retry() && attempt < self.max_retries => {
                    let delay = calculate_backoff_delay(attempt, self.base_delay_ms);
                    warn!(
                        "Retryable error loading {} (attempt {}): {}; retrying in {:?}",
                        url,
                        attempt + 1,
                        err,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
