//! Page configuration: optional YAML file merged under the CLI flags.
//!
//! ```yaml
//! layout: list          # list | featured
//! on_failure: error     # error | sample
//! page_size: 6
//! load_delay_ms: 1000
//! source_file: ./output.json
//! palette:
//!   - https://images.example/1.jpg
//! ```

use crate::cli::Cli;
use crate::error::ConfigError;
use crate::loader::{DEFAULT_LOAD_DELAY_MS, FailurePolicy};
use crate::models::Layout;
use crate::normalize::default_palette;
use crate::page::pagination::DEFAULT_PAGE_SIZE;
use crate::source::{FileSource, HttpSource};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, instrument};

/// Contents of the optional YAML config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub layout: Option<Layout>,
    pub on_failure: Option<FailurePolicy>,
    pub page_size: Option<usize>,
    pub load_delay_ms: Option<u64>,
    pub palette: Option<Vec<String>>,
    pub source_file: Option<PathBuf>,
}

/// Read and parse a YAML config file.
#[instrument(level = "info", skip_all, fields(%path))]
pub async fn load_file_config(path: &str) -> Result<FileConfig, ConfigError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
    let config = serde_yaml::from_str(&text).map_err(|source| ConfigError::InvalidConfigFile {
        path: path.to_string(),
        source,
    })?;
    info!("Loaded configuration");
    Ok(config)
}

/// Resolved settings for one page session.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSettings {
    pub layout: Layout,
    pub on_failure: FailurePolicy,
    pub page_size: usize,
    pub load_delay: Duration,
    pub palette: Vec<String>,
}

impl PageSettings {
    /// Merge CLI flags over the file config over built-in defaults.
    ///
    /// The failure policy defaults per layout when neither source sets it.
    pub fn resolve(cli: &Cli, file: &FileConfig) -> Result<Self, ConfigError> {
        let layout = cli.layout.or(file.layout).unwrap_or_default();
        let page_size = cli.page_size.or(file.page_size).unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(Self {
            layout,
            on_failure: cli
                .on_failure
                .or(file.on_failure)
                .unwrap_or_else(|| FailurePolicy::default_for(layout)),
            page_size,
            load_delay: Duration::from_millis(
                cli.load_delay_ms
                    .or(file.load_delay_ms)
                    .unwrap_or(DEFAULT_LOAD_DELAY_MS),
            ),
            palette: file.palette.clone().unwrap_or_else(default_palette),
        })
    }
}

/// Where the payload is read from.
#[derive(Debug, Clone)]
pub enum SourceSpec {
    Http(HttpSource),
    File(FileSource),
}

impl SourceSpec {
    /// A local file (CLI, then config file) wins over the HTTP origin.
    pub fn resolve(cli: &Cli, file: &FileConfig) -> Result<Self, ConfigError> {
        match cli.source_file.as_ref().or(file.source_file.as_ref()) {
            Some(path) => Ok(SourceSpec::File(FileSource::new(path))),
            None => Ok(SourceSpec::Http(HttpSource::new(&cli.base_url, &cli.source_path)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["ai_news_page"]);
        let settings = PageSettings::resolve(&cli, &FileConfig::default()).unwrap();

        assert_eq!(settings.layout, Layout::List);
        assert_eq!(settings.on_failure, FailurePolicy::ShowError);
        assert_eq!(settings.page_size, 6);
        assert_eq!(settings.load_delay, Duration::from_millis(1000));
        assert_eq!(settings.palette.len(), 8);
    }

    #[test]
    fn test_featured_defaults_to_sample_fallback() {
        let cli = Cli::parse_from(["ai_news_page", "--layout", "featured"]);
        let settings = PageSettings::resolve(&cli, &FileConfig::default()).unwrap();
        assert_eq!(settings.on_failure, FailurePolicy::FallbackToSample);
    }

    #[test]
    fn test_cli_overrides_file() {
        let file: FileConfig = serde_yaml::from_str(
            "layout: featured\non_failure: error\npage_size: 3\nload_delay_ms: 0\npalette: [a, b]\n",
        )
        .unwrap();
        let cli = Cli::parse_from(["ai_news_page", "--page-size", "9", "--on-failure", "sample"]);
        let settings = PageSettings::resolve(&cli, &file).unwrap();

        assert_eq!(settings.layout, Layout::Featured);
        assert_eq!(settings.on_failure, FailurePolicy::FallbackToSample);
        assert_eq!(settings.page_size, 9);
        assert_eq!(settings.load_delay, Duration::ZERO);
        assert_eq!(settings.palette, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let cli = Cli::parse_from(["ai_news_page", "--page-size", "0"]);
        assert!(matches!(
            PageSettings::resolve(&cli, &FileConfig::default()),
            Err(ConfigError::ZeroPageSize)
        ));
    }

    #[test]
    fn test_source_selection() {
        let cli = Cli::parse_from(["ai_news_page", "--base-url", "https://news.example/"]);
        match SourceSpec::resolve(&cli, &FileConfig::default()).unwrap() {
            SourceSpec::Http(source) => {
                assert_eq!(source.url().as_str(), "https://news.example/output.json")
            }
            other => panic!("expected http source, got {other:?}"),
        }

        let file = FileConfig {
            source_file: Some(PathBuf::from("data/output.json")),
            ..FileConfig::default()
        };
        assert!(matches!(
            SourceSpec::resolve(&cli, &file).unwrap(),
            SourceSpec::File(_)
        ));
    }

    #[tokio::test]
    async fn test_load_file_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        assert!(matches!(
            load_file_config(missing.to_str().unwrap()).await,
            Err(ConfigError::Read { .. })
        ));

        let bad = dir.path().join("bad.yaml");
        tokio::fs::write(&bad, "page_size: lots\n").await.unwrap();
        assert!(matches!(
            load_file_config(bad.to_str().unwrap()).await,
            Err(ConfigError::InvalidConfigFile { .. })
        ));

        let good = dir.path().join("good.yaml");
        tokio::fs::write(&good, "layout: featured\n").await.unwrap();
        let config = load_file_config(good.to_str().unwrap()).await.unwrap();
        assert_eq!(config.layout, Some(Layout::Featured));
    }
}
