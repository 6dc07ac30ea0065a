//! Error types for loading news and configuring the page.
//!
//! - [`LoadError`]: why a single load attempt failed. Every variant is
//!   terminal for that attempt and handled by the page's failure policy.
//! - [`ConfigError`]: problems detected at startup, before any load runs.

use thiserror::Error;

/// Why a news load attempt failed.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The transport failed before a response arrived.
    #[error("failed to fetch news: {0}")]
    Fetch(String),

    /// The server answered with a non-success status.
    #[error("news request returned HTTP {0}")]
    HttpStatus(u16),

    /// The body was not valid JSON, or not the shape the layout expects.
    #[error("failed to parse news payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read news file: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for LoadError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => LoadError::HttpStatus(status.as_u16()),
            None => LoadError::Fetch(e.to_string()),
        }
    }
}

/// Startup configuration problems. These fail fast.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required scaffold element is absent from the page template.
    #[error("page scaffold is missing required element `{0}`")]
    MissingElement(&'static str),

    #[error("invalid config file {path}: {source}")]
    InvalidConfigFile {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid base URL `{0}`")]
    InvalidBaseUrl(String),

    #[error("invalid event `{0}`")]
    InvalidEvent(String),

    #[error("page size must be at least 1")]
    ZeroPageSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_messages() {
        assert_eq!(LoadError::HttpStatus(404).to_string(), "news request returned HTTP 404");
        assert!(LoadError::Fetch("connection refused".into())
            .to_string()
            .contains("connection refused"));
    }

    #[test]
    fn test_parse_error_from_serde() {
        let err = serde_json::from_str::<Vec<serde_json::Value>>("{oops").unwrap_err();
        let load: LoadError = err.into();
        assert!(matches!(load, LoadError::Parse(_)));
    }

    #[test]
    fn test_config_error_names_element() {
        let err = ConfigError::MissingElement("#news-container");
        assert_eq!(
            err.to_string(),
            "page scaffold is missing required element `#news-container`"
        );
    }
}
