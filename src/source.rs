//! Data sources for the news payload.
//!
//! The module uses a trait-based design so the loader does not care where
//! the JSON comes from:
//! - [`NewsSource`]: Core trait returning the raw payload body
//! - [`HttpSource`]: `GET output.json` resolved against a page origin
//! - [`FileSource`]: Reads the payload from disk for offline builds
//!
//! Neither source retries, and neither adds a timeout beyond the
//! transport's own.

use crate::error::{ConfigError, LoadError};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, instrument, warn};
use url::Url;

/// Default payload path, relative to the page origin.
pub const DEFAULT_PAYLOAD_PATH: &str = "output.json";

/// Trait for fetching the raw news payload.
pub trait NewsSource {
    /// Fetch the payload body. A non-success HTTP status is an error even
    /// when the response carries a body.
    async fn fetch(&self) -> Result<String, LoadError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Fetches the payload over HTTP with a single unauthenticated GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpSource {
    /// Resolve `path` against `base_url` the way a page resolves a relative fetch.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the base does not parse or
    /// the path cannot be joined onto it.
    pub fn new(base_url: &str, path: &str) -> Result<Self, ConfigError> {
        let base = Url::parse(base_url).map_err(|_| ConfigError::InvalidBaseUrl(base_url.to_string()))?;
        let url = base
            .join(path)
            .map_err(|_| ConfigError::InvalidBaseUrl(base_url.to_string()))?;
        Ok(Self {
            client: reqwest::Client::new(),
            url,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl NewsSource for HttpSource {
    #[instrument(level = "info", skip_all, fields(url = %self.url))]
    async fn fetch(&self) -> Result<String, LoadError> {
        let t0 = Instant::now();
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "News request returned non-success status");
            return Err(LoadError::HttpStatus(status.as_u16()));
        }
        let body = response.text().await?;
        debug!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis(),
            "Fetched news payload"
        );
        Ok(body)
    }

    fn describe(&self) -> String {
        self.url().to_string()
    }
}

/// Reads the payload from a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl NewsSource for FileSource {
    #[instrument(level = "info", skip_all, fields(path = %self.path.display()))]
    async fn fetch(&self) -> Result<String, LoadError> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        debug!(bytes = body.len(), "Read news payload");
        Ok(body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
