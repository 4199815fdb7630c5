use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use url::Url;

/// A fully decoded page as returned by the origin.
#[derive(Debug)]
pub struct PageResponse {
    pub url_final: Url,
    pub status: StatusCode,
    pub body_utf8: String,
    /// WHATWG name of the encoding the body was decoded from.
    pub charset: &'static str,
    pub fetched_at: DateTime<Utc>,
}
