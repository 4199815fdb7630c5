use thiserror::Error;

use crate::fetcher::{FetchError, Rejection};

/// Failure of a public operation.
#[derive(Error, Debug)]
pub enum HltvError {
    /// A challenge or block page was served instead of content.
    #[error("access denied: {0}")]
    AccessDenied(String),

    /// A lookup matched nothing.
    #[error("not found: {0}")]
    NotFound(String),

    /// A field the page schema guarantees was missing; the site markup changed.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Network or timeout failure; safe to retry with backoff.
    #[error("transient fetch error: {0}")]
    Transient(#[source] FetchError),

    /// A fetch failure retrying will not fix (e.g. 404).
    #[error("fetch failed: {0}")]
    Fetch(#[source] FetchError),

    /// A listing never produced an empty page within the page cap.
    #[error("listing did not terminate within {max_pages} pages")]
    TooManyPages { max_pages: u32 },
}

impl HltvError {
    pub fn malformed(what: impl Into<String>) -> Self {
        Self::MalformedResponse(what.into())
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}

impl From<FetchError> for HltvError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Blocked { status } => {
                Self::AccessDenied(format!("origin refused the request with status {status}"))
            }
            err if err.should_retry() => Self::Transient(err),
            err => Self::Fetch(err),
        }
    }
}

impl From<Rejection> for HltvError {
    fn from(rejection: Rejection) -> Self {
        Self::AccessDenied(rejection.to_string())
    }
}
