//! Client configuration

use crate::error::{ClientError, ClientResult};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_SESSION_DIR: &str = ".etimad";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Low-stock poll period (5 minutes)
pub const DEFAULT_LOW_STOCK_INTERVAL_SECS: u64 = 300;

/// Client configuration for the Etimad Mart backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "http://localhost:5000/api")
    pub base_url: String,

    /// Bearer token to start with, if already known
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Directory holding `session.json`; `None` keeps the session in memory
    pub session_dir: Option<PathBuf>,

    /// Low-stock poll interval
    pub low_stock_interval: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
            session_dir: None,
            low_stock_interval: Duration::from_secs(DEFAULT_LOW_STOCK_INTERVAL_SECS),
        }
    }

    /// Load from the process environment, reading `.env` first if present
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `ETIMAD_API_URL` | `http://localhost:5000/api` |
    /// | `ETIMAD_SESSION_DIR` | `.etimad` |
    /// | `ETIMAD_HTTP_TIMEOUT_SECS` | `30` |
    /// | `ETIMAD_LOW_STOCK_INTERVAL_SECS` | `300` |
    pub fn from_env() -> ClientResult<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] over an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let base_url = lookup("ETIMAD_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let session_dir = lookup("ETIMAD_SESSION_DIR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SESSION_DIR.to_string());
        let timeout = parse_secs(&lookup, "ETIMAD_HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let interval = parse_secs(
            &lookup,
            "ETIMAD_LOW_STOCK_INTERVAL_SECS",
            DEFAULT_LOW_STOCK_INTERVAL_SECS,
        )?;

        Ok(Self::new(base_url)
            .with_timeout(timeout)
            .with_session_dir(session_dir)
            .with_low_stock_interval(Duration::from_secs(interval)))
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Persist the session under this directory
    pub fn with_session_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.session_dir = Some(dir.into());
        self
    }

    pub fn with_low_stock_interval(mut self, interval: Duration) -> Self {
        self.low_stock_interval = interval;
        self
    }

    /// Join a relative endpoint path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

fn parse_secs(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: u64,
) -> ClientResult<u64> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| {
            ClientError::Config(format!(
                "{} must be a whole number of seconds, got {:?}",
                key, raw
            ))
        }),
    }
}
