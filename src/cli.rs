//! Command-line interface definitions for the news page builder.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Most options can also come from environment variables or the optional
//! YAML config file; command-line flags win.

use crate::loader::FailurePolicy;
use crate::models::Layout;
use crate::page::events::UiEvent;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the news page builder.
///
/// # Examples
///
/// ```sh
/// # Fetch output.json from a running site and write index.html
/// ai_news_page --base-url http://localhost:8000/ -o ./index.html
///
/// # Build offline from a local payload, featured layout
/// ai_news_page --source-file ./output.json --layout featured -o ./index.html
///
/// # Replay a session: filter, then reveal one more page
/// ai_news_page --source-file ./output.json -e filter:research -e load-more
///
/// # Open the subscribe modal before the news arrives
/// ai_news_page --early-event open-modal -e subscribe:Ada:ada@example.com:weekly
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Page origin the payload path is resolved against
    #[arg(long, env = "NEWS_BASE_URL", default_value = "http://localhost:8000/")]
    pub base_url: String,

    /// Payload path relative to the page origin
    #[arg(long, default_value = crate::source::DEFAULT_PAYLOAD_PATH)]
    pub source_path: String,

    /// Read the payload from a local file instead of fetching it
    #[arg(long, env = "NEWS_SOURCE_FILE")]
    pub source_file: Option<PathBuf>,

    /// Page layout (overrides the config file)
    #[arg(short, long, value_enum)]
    pub layout: Option<Layout>,

    /// What to show when loading fails (defaults per layout)
    #[arg(long, value_enum)]
    pub on_failure: Option<FailurePolicy>,

    /// Records revealed per "load more" page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Smoothing delay before a loaded payload is shown, in milliseconds
    #[arg(long)]
    pub load_delay_ms: Option<u64>,

    /// Optional page scaffold (HTML) supplying the filter buttons
    #[arg(short, long)]
    pub template: Option<String>,

    /// Path of the rendered HTML page
    #[arg(short = 'o', long, default_value = "index.html")]
    pub html_output: String,

    /// Optional directory for the normalized records JSON
    #[arg(short, long)]
    pub json_output_dir: Option<String>,

    /// Optional path to a YAML config file
    #[arg(short, long, env = "NEWS_PAGE_CONFIG")]
    pub config: Option<String>,

    /// UI events to replay once the news has loaded, in order
    #[arg(short, long = "event")]
    pub events: Vec<UiEvent>,

    /// UI events dispatched while the news is still loading
    #[arg(long = "early-event")]
    pub early_events: Vec<UiEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["ai_news_page"]);

        assert_eq!(cli.source_path, "output.json");
        assert_eq!(cli.html_output, "index.html");
        assert!(cli.layout.is_none());
        assert!(cli.events.is_empty());
        assert!(cli.early_events.is_empty());
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "ai_news_page",
            "-l",
            "featured",
            "-o",
            "/tmp/page.html",
            "-j",
            "/tmp/json",
        ]);

        assert_eq!(cli.layout, Some(Layout::Featured));
        assert_eq!(cli.html_output, "/tmp/page.html");
        assert_eq!(cli.json_output_dir.as_deref(), Some("/tmp/json"));
    }

    #[test]
    fn test_cli_events_and_policy() {
        let cli = Cli::parse_from([
            "ai_news_page",
            "--on-failure",
            "sample",
            "-e",
            "filter:research",
            "--event",
            "load-more",
        ]);

        assert_eq!(cli.on_failure, Some(FailurePolicy::FallbackToSample));
        assert_eq!(
            cli.events,
            vec![UiEvent::Filter("research".to_string()), UiEvent::LoadMore]
        );
    }

    #[test]
    fn test_cli_rejects_bad_event() {
        assert!(Cli::try_parse_from(["ai_news_page", "-e", "jump"]).is_err());
    }
}
