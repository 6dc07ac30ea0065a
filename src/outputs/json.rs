//! JSON output of the normalized records.
//!
//! Writes a snapshot of what the page rendered, so other tools can consume
//! the normalized records without re-implementing the defaults:
//! ```text
//! json_output_dir/
//! └── news.json
//! ```

use crate::loader::LoadState;
use crate::models::{DisplayRecord, Layout};
use crate::page::PageController;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

pub const SNAPSHOT_FILENAME: &str = "news.json";

/// What the page rendered, as serialized to `news.json`.
#[derive(Debug, Serialize)]
pub struct PageSnapshot<'a> {
    pub generated_at: DateTime<Utc>,
    pub layout: Layout,
    pub load: &'a LoadState,
    pub filter: &'a str,
    pub page: usize,
    pub page_size: usize,
    pub rendered: usize,
    pub records: &'a [DisplayRecord],
}

impl<'a> PageSnapshot<'a> {
    pub fn capture(page: &'a PageController, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            layout: page.layout(),
            load: page.load_state(),
            filter: page.filter().current(),
            page: page.pages().page(),
            page_size: page.pages().page_size(),
            rendered: page.container().cards().len(),
            records: page.records(),
        }
    }
}

/// Write the snapshot of `page` into `json_output_dir`.
///
/// # Output Path
///
/// `{json_output_dir}/news.json`
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_snapshot(
    page: &PageController,
    json_output_dir: &str,
) -> Result<(), Box<dyn Error>> {
    let snapshot = PageSnapshot::capture(page, Utc::now());
    let json = serde_json::to_string_pretty(&snapshot)?;

    if let Err(e) = fs::create_dir_all(json_output_dir).await {
        error!(%json_output_dir, error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let path = format!("{}/{}", json_output_dir.trim_end_matches('/'), SNAPSHOT_FILENAME);
    fs::write(&path, json).await?;
    info!(%path, records = snapshot.records.len(), "Wrote news snapshot");
    Ok(())
}
