//! Data models for the news payload and its render-ready representation.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Layout`]: Which payload shape and card layout a page uses
//! - [`FeaturedPayload`]: The fixed three-slot payload (`best_news`, ...)
//! - [`DisplayRecord`]: A normalized, render-ready news entry
//! - [`FeaturedSlot`]: The named slots of the featured layout
//!
//! List payloads are kept as raw [`serde_json::Value`] items so that a
//! malformed individual item can never fail the whole batch.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The two page layouts, each tied to one payload shape.
///
/// - [`Layout::List`]: a JSON array of `{title?, summary?, tag?, url?}`,
///   paginated and filterable, with palette images.
/// - [`Layout::Featured`]: an object with exactly three named entries,
///   rendered as three fixed cards with emphasis highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    List,
    Featured,
}

/// A raw payload fetched from the data source, already split by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum NewsPayload {
    List(Vec<Value>),
    Featured(FeaturedPayload),
}

impl NewsPayload {
    /// Number of raw entries in the payload.
    pub fn len(&self) -> usize {
        match self {
            NewsPayload::List(items) => items.len(),
            NewsPayload::Featured(_) => FeaturedSlot::ALL.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The fixed three-slot payload produced by the upstream summarizer.
///
/// Slots are kept as raw [`serde_json::Value`]s, like list items: a slot
/// that is missing or malformed normalizes from defaults without failing
/// its siblings. When summarization fails upstream the payload only carries
/// two slots; the third stays [`Value::Null`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeaturedPayload {
    pub best_news: Value,
    pub most_viral_news: Value,
    pub relevant_news: Value,
}

impl FeaturedPayload {
    /// Pick the three slots out of a top-level JSON object. Other keys are ignored.
    pub fn from_object(mut object: Map<String, Value>) -> Self {
        let mut take = |slot: FeaturedSlot| object.remove(slot.key()).unwrap_or_default();
        Self {
            best_news: take(FeaturedSlot::Best),
            most_viral_news: take(FeaturedSlot::MostViral),
            relevant_news: take(FeaturedSlot::Relevant),
        }
    }

    /// The raw entry stored in `slot`.
    pub fn slot(&self, slot: FeaturedSlot) -> &Value {
        match slot {
            FeaturedSlot::Best => &self.best_news,
            FeaturedSlot::MostViral => &self.most_viral_news,
            FeaturedSlot::Relevant => &self.relevant_news,
        }
    }
}

/// The named slots of the featured layout, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeaturedSlot {
    Best,
    MostViral,
    Relevant,
}

impl FeaturedSlot {
    pub const ALL: [FeaturedSlot; 3] = [
        FeaturedSlot::Best,
        FeaturedSlot::MostViral,
        FeaturedSlot::Relevant,
    ];

    /// Key of the slot in the payload object.
    pub fn key(self) -> &'static str {
        match self {
            FeaturedSlot::Best => "best_news",
            FeaturedSlot::MostViral => "most_viral_news",
            FeaturedSlot::Relevant => "relevant_news",
        }
    }

    /// The category label cards in this slot carry.
    pub fn category(self) -> &'static str {
        match self {
            FeaturedSlot::Best => "best",
            FeaturedSlot::MostViral => "viral",
            FeaturedSlot::Relevant => "relevant",
        }
    }

    /// Heading shown above the card.
    pub fn heading(self) -> &'static str {
        match self {
            FeaturedSlot::Best => "Best News",
            FeaturedSlot::MostViral => "Most Viral News",
            FeaturedSlot::Relevant => "Relevant News",
        }
    }
}

/// A normalized, render-ready news entry.
///
/// Every field is populated; defaults are applied by the normalizer.
/// Records are never mutated after creation, only re-sliced and re-filtered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplayRecord {
    pub title: String,
    pub description: String,
    pub category: String,
    pub url: String,
    /// Palette image for the list layout, `None` for the featured layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
