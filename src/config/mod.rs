//! Runtime configuration.
//!
//! `Config::from_env` reads environment variables and falls back to
//! development defaults for anything unset. Numeric values that do not parse
//! are rejected rather than silently replaced by a default.

use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::fetcher::LoaderSettings;

pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_BASE_URL: &str = "HLTV_BASE_URL";
pub const ENV_PAGE_TIMEOUT_SECS: &str = "HLTV_PAGE_TIMEOUT_SECS";
pub const ENV_MAX_CONCURRENT_LOADS: &str = "HLTV_MAX_CONCURRENT_LOADS";
pub const ENV_MAX_PAGES: &str = "HLTV_MAX_PAGES";
pub const ENV_FETCH_RETRIES: &str = "HLTV_FETCH_RETRIES";
pub const ENV_RETRY_BASE_MS: &str = "HLTV_RETRY_BASE_MS";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_BASE_URL: &str = "https://www.hltv.org";
const DEFAULT_PAGE_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_CONCURRENT_LOADS: usize = 4;
const DEFAULT_MAX_PAGES: u32 = 250;
const DEFAULT_FETCH_RETRIES: u32 = 2;
const DEFAULT_RETRY_BASE_MS: u64 = 500;

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    base_url: String,
    page_timeout: Duration,
    max_concurrent_loads: usize,
    max_pages: u32,
    fetch_retries: u32,
    retry_base_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            page_timeout: Duration::from_secs(DEFAULT_PAGE_TIMEOUT_SECS),
            max_concurrent_loads: DEFAULT_MAX_CONCURRENT_LOADS,
            max_pages: DEFAULT_MAX_PAGES,
            fetch_retries: DEFAULT_FETCH_RETRIES,
            retry_base_ms: DEFAULT_RETRY_BASE_MS,
        }
    }
}

impl Config {
    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let base_url = env::var(ENV_BASE_URL)
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        url::Url::parse(&base_url).map_err(|e| ConfigError::InvalidValue {
            field: ENV_BASE_URL,
            reason: e.to_string(),
        })?;

        let page_timeout_secs: u64 = numeric(ENV_PAGE_TIMEOUT_SECS, DEFAULT_PAGE_TIMEOUT_SECS)?;
        if page_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: ENV_PAGE_TIMEOUT_SECS,
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            bind_addr,
            base_url,
            page_timeout: Duration::from_secs(page_timeout_secs),
            max_concurrent_loads: numeric(ENV_MAX_CONCURRENT_LOADS, DEFAULT_MAX_CONCURRENT_LOADS)?,
            max_pages: numeric(ENV_MAX_PAGES, DEFAULT_MAX_PAGES)?,
            fetch_retries: numeric(ENV_FETCH_RETRIES, DEFAULT_FETCH_RETRIES)?,
            retry_base_ms: numeric(ENV_RETRY_BASE_MS, DEFAULT_RETRY_BASE_MS)?,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    /// Site root every page path is appended to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }

    pub fn fetch_retries(&self) -> u32 {
        self.fetch_retries
    }

    pub fn retry_base_ms(&self) -> u64 {
        self.retry_base_ms
    }

    pub fn loader_settings(&self) -> LoaderSettings {
        LoaderSettings {
            page_timeout: self.page_timeout,
            max_concurrent_loads: self.max_concurrent_loads,
        }
    }
}

fn numeric<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            field: key,
            reason: format!("{raw:?}: {e}"),
        }),
        Err(_) => Ok(default),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
