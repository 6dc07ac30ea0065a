//! # AI News Page
//!
//! Builds a static news page from a summarized AI news payload
//! (`output.json`): the payload is fetched once, normalized into display
//! records, rendered into cards, and driven through the page's filter,
//! "load more", subscription modal and scroll-to-top affordances.
//!
//! ## Usage
//!
//! ```sh
//! ai_news_page --source-file ./output.json -o ./site/index.html
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Scaffold**: Validate the page template and read its filter buttons
//! 2. **Loading**: Fetch and parse the payload while UI events keep flowing
//! 3. **Rendering**: Normalize records, render cards, apply filter/pagination
//! 4. **Output**: Write the HTML page and, optionally, a JSON snapshot

use clap::Parser;
use futures::stream;
use itertools::Itertools;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod app;
mod cli;
mod config;
mod error;
mod loader;
mod models;
mod normalize;
mod outputs;
mod page;
mod render;
mod sample;
mod scaffold;
mod source;
mod utils;

use app::run_session;
use cli::Cli;
use config::{FileConfig, PageSettings, SourceSpec, load_file_config};
use error::ConfigError;
use loader::Loader;
use outputs::{html, json};
use page::PageController;
use page::filter::ALL;
use scaffold::Scaffold;
use utils::ensure_writable_dir;

#[tokio::main(flavor = "current_thread")]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("ai_news_page starting up");

    let args = Cli::parse();
    debug!(?args.html_output, ?args.json_output_dir, events = args.events.len(), "Parsed CLI arguments");

    // ---- Configuration ----
    let file_config = match &args.config {
        Some(path) => load_file_config(path).await?,
        None => FileConfig::default(),
    };
    let settings = PageSettings::resolve(&args, &file_config)?;
    info!(
        layout = ?settings.layout,
        on_failure = ?settings.on_failure,
        page_size = settings.page_size,
        load_delay_ms = settings.load_delay.as_millis() as u64,
        "Resolved page settings"
    );

    // ---- Scaffold ----
    let scaffold = load_scaffold(&args, &settings).await.inspect_err(|e| {
        error!(error = %e, "Page scaffold is unusable");
    })?;

    // Early check: ensure JSON output dir is writable
    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir,
                error = %e,
                "JSON output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    // ---- Page session ----
    let mut page = PageController::new(&settings, scaffold.buttons.clone());
    let early_events = stream::iter(args.early_events.clone());
    let events = args.events.clone();
    match SourceSpec::resolve(&args, &file_config)? {
        SourceSpec::Http(source) => {
            let loader = Loader::new(source, settings.layout, settings.load_delay);
            run_session(&mut page, &loader, early_events, events).await;
        }
        SourceSpec::File(source) => {
            let loader = Loader::new(source, settings.layout, settings.load_delay);
            run_session(&mut page, &loader, early_events, events).await;
        }
    }
    report_unfilterable_categories(&page);

    // ---- Outputs ----
    if let Err(e) = html::write_page(&scaffold, &page, &args.html_output).await {
        error!(path = %args.html_output, error = %e, "Failed writing HTML page");
        return Err(e);
    }
    info!(path = %args.html_output, "Wrote HTML page");

    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = json::write_snapshot(&page, dir).await {
            error!(error = %e, "Failed to write JSON snapshot");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );
    Ok(())
}

/// Read and validate the page scaffold, falling back to the built-in one.
async fn load_scaffold(args: &Cli, settings: &PageSettings) -> Result<Scaffold, ConfigError> {
    match &args.template {
        Some(path) => {
            let html = tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::Read {
                    path: path.clone(),
                    source,
                })?;
            let scaffold = Scaffold::parse(&html)?;
            info!(%path, buttons = scaffold.buttons.len(), "Loaded page scaffold");
            Ok(scaffold)
        }
        None => Scaffold::builtin(settings.layout),
    }
}

/// Warn about record categories no filter button can select.
fn report_unfilterable_categories(page: &PageController) {
    let categories = page
        .records()
        .iter()
        .map(|r| r.category.as_str())
        .unique()
        .collect::<Vec<_>>();
    info!(?categories, "Categories in payload");

    let missing = categories
        .iter()
        .filter(|c| **c != ALL && !page.buttons().iter().any(|b| b.category == **c))
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        warn!(?missing, "Some categories have no filter button; they only show under \"all\"");
    }
}
