//! The fetch/load pipeline.
//!
//! A load moves through `Idle → Loading → {Success, Failure}` exactly once:
//!
//! 1. **Fetch**: one request to the [`NewsSource`]; a non-success status fails
//! 2. **Parse**: the body must be JSON of the shape the [`Layout`] expects
//! 3. **Smoothing**: an optional fixed delay before the page is updated
//!
//! There is no retry, no cancellation, and no timeout of our own. What a
//! failure looks like on the page is decided by the [`FailurePolicy`].

use crate::error::LoadError;
use crate::models::{FeaturedPayload, Layout, NewsPayload};
use crate::source::NewsSource;
use crate::utils::truncate_for_log;
use clap::ValueEnum;
use serde::{Deserialize, Serialize, de};
use serde_json::Value;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

/// Default smoothing delay before a successful payload is displayed.
pub const DEFAULT_LOAD_DELAY_MS: u64 = 1000;

/// Message shown in place of the cards when a load fails under [`FailurePolicy::ShowError`].
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load news. Please try again later.";

/// Where a page is in its single load attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Success {
        records: usize,
    },
    Failure {
        reason: String,
        fell_back: bool,
    },
}

/// What the page does when a load fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Replace the container with [`LOAD_ERROR_MESSAGE`].
    #[value(name = "error")]
    #[serde(rename = "error")]
    ShowError,
    /// Render the built-in sample dataset instead.
    #[value(name = "sample")]
    #[serde(rename = "sample")]
    FallbackToSample,
}

impl FailurePolicy {
    /// The list layout surfaces the error; the featured layout masks it.
    pub fn default_for(layout: Layout) -> Self {
        match layout {
            Layout::List => FailurePolicy::ShowError,
            Layout::Featured => FailurePolicy::FallbackToSample,
        }
    }
}

/// Parse a payload body into the shape `layout` expects.
///
/// # Errors
///
/// [`LoadError::Parse`] if the body is not JSON, or if a list layout gets
/// something other than an array, or a featured layout something other
/// than an object.
pub fn parse_payload(body: &str, layout: Layout) -> Result<NewsPayload, LoadError> {
    match layout {
        Layout::List => {
            let items: Vec<Value> = serde_json::from_str(body)?;
            Ok(NewsPayload::List(items))
        }
        Layout::Featured => match serde_json::from_str::<Value>(body)? {
            Value::Object(object) => Ok(NewsPayload::Featured(FeaturedPayload::from_object(object))),
            other => Err(LoadError::Parse(de::Error::invalid_type(
                unexpected(&other),
                &"a JSON object with best_news, most_viral_news and relevant_news",
            ))),
        },
    }
}

fn unexpected(value: &Value) -> de::Unexpected<'_> {
    match value {
        Value::Null => de::Unexpected::Unit,
        Value::Bool(b) => de::Unexpected::Bool(*b),
        Value::Number(_) => de::Unexpected::Other("number"),
        Value::String(s) => de::Unexpected::Str(s),
        Value::Array(_) => de::Unexpected::Seq,
        Value::Object(_) => de::Unexpected::Map,
    }
}

/// Runs one load attempt against a source.
#[derive(Debug)]
pub struct Loader<S> {
    source: S,
    layout: Layout,
    delay: Duration,
}

impl<S: NewsSource> Loader<S> {
    pub fn new(source: S, layout: Layout, delay: Duration) -> Self {
        Self {
            source,
            layout,
            delay,
        }
    }

    /// Fetch, parse and (on success) wait out the smoothing delay.
    #[instrument(level = "info", skip_all, fields(source = %self.source.describe(), layout = ?self.layout))]
    pub async fn load(&self) -> Result<NewsPayload, LoadError> {
        let t0 = Instant::now();
        let body = self.source.fetch().await?;
        let payload = parse_payload(&body, self.layout).inspect_err(|e| {
            warn!(
                error = %e,
                body_preview = %truncate_for_log(&body, 200),
                "News payload did not parse"
            );
        })?;
        if payload.is_empty() {
            warn!("News payload has no entries");
        }
        debug!(entries = payload.len(), "Parsed news payload");

        if !self.delay.is_zero() {
            debug!(delay_ms = self.delay.as_millis() as u64, "Smoothing delay");
            sleep(self.delay).await;
        }
        info!(
            entries = payload.len(),
            elapsed_ms = t0.elapsed().as_millis(),
            "News payload loaded"
        );
        Ok(payload)
    }
}
