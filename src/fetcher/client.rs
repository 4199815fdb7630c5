use crate::fetcher::{
    errors::FetchError, loader::PageLoader, pipeline::process_response, types::PageResponse,
};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::{sync::Arc, time::Duration};
use tokio::sync::Semaphore;
use tracing::{debug, instrument};

const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024; // 5MB
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Settings for [`HttpPageLoader`].
#[derive(Debug, Clone)]
pub struct LoaderSettings {
    /// Upper bound for a single page load, connect included.
    pub page_timeout: Duration,
    /// Page loads allowed in flight at once across all operations.
    pub max_concurrent_loads: usize,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            page_timeout: Duration::from_secs(30),
            max_concurrent_loads: 4,
        }
    }
}

/// Page loader backed by a single shared HTTP client.
///
/// Cloning is cheap and every clone shares the same connection pool and the
/// same in-flight budget. Each load holds one permit for its whole lifetime,
/// released on every exit path when the permit is dropped.
#[derive(Debug, Clone)]
pub struct HttpPageLoader {
    client: Client,
    permits: Arc<Semaphore>,
}

impl HttpPageLoader {
    pub fn new(settings: &LoaderSettings) -> Result<Self, FetchError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            reqwest::header::HeaderValue::from_static("en-US,en;q=0.9"),
        );

        let client = ClientBuilder::new()
            .connect_timeout(settings.page_timeout.min(Duration::from_secs(10)))
            .timeout(settings.page_timeout)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Unknown(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            permits: Arc::new(Semaphore::new(settings.max_concurrent_loads.max(1))),
        })
    }

    #[instrument(skip_all, fields(url = %url))]
    pub async fn fetch(&self, url: &str) -> Result<PageResponse, FetchError> {
        let parsed_url = url::Url::parse(url)?;

        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| FetchError::Unknown(e.to_string()))?;

        let response = self
            .client
            .get(parsed_url)
            .send()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        if let Some(content_length) = response.content_length()
            && content_length > MAX_BODY_SIZE
        {
            return Err(FetchError::BodyTooLarge(content_length));
        }

        let final_url = response.url().clone();
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::from_status(status));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("text/html")
            .to_string();

        // The team search endpoint answers with bare JSON
        if !content_type.contains("text/html")
            && !content_type.contains("application/xhtml")
            && !content_type.contains("application/json")
            && !content_type.contains("text/plain")
        {
            return Err(FetchError::UnsupportedContentType(content_type));
        }

        let body_bytes = response
            .bytes()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        // Content-Length may be missing or wrong
        if body_bytes.len() as u64 > MAX_BODY_SIZE {
            return Err(FetchError::BodyTooLarge(body_bytes.len() as u64));
        }

        let page = process_response(final_url, status, &body_bytes, &content_type)?;
        debug!(
            "Fetched {} (status: {}, charset: {}, size: {} bytes)",
            page.url_final,
            page.status,
            page.charset,
            page.body_utf8.len()
        );
        Ok(page)
    }
}

#[async_trait]
impl PageLoader for HttpPageLoader {
    async fn load_page(&self, url: &str) -> Result<String, FetchError> {
        self.fetch(url).await.map(|page| page.body_utf8)
    }
}
