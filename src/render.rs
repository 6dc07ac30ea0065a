//! Card rendering for display records.
//!
//! Rendering is a pure function from records to [`CardNode`]s. The page
//! controller replaces its whole card list with the result, so rendering the
//! same records twice yields the same cards. Record text is HTML-escaped;
//! in the featured layout summaries also go through [`emphasize`].

use crate::models::{DisplayRecord, FeaturedSlot, Layout};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Write;

/// Non-greedy `**text**` marker, spanning line breaks. An unterminated
/// marker never matches, and `****` stays literal since a span needs text.
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\*\*(.+?)\*\*").unwrap());

/// One-shot entrance animation played when a card becomes visible.
pub const ENTRANCE_ANIMATION: &str = "fadeInUp 0.6s ease-out";

/// A rendered news card together with its visibility attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardNode {
    /// Category carried as `data-category`, used by the filter pass.
    pub category: String,
    /// Inner markup of the card.
    pub body: String,
    pub hidden: bool,
    /// Transient animation attribute, set by the filter pass.
    pub animation: Option<&'static str>,
}

impl CardNode {
    /// Serialize the card element.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write!(
            out,
            "<div class=\"news-card{}\" data-category=\"{}\"",
            if self.hidden { " hidden" } else { "" },
            escape_html(&self.category)
        )
        .unwrap();
        if let Some(animation) = self.animation {
            write!(out, " style=\"animation: {animation}\"").unwrap();
        }
        write!(out, ">{}</div>", self.body).unwrap();
        out
    }
}

/// Render records into cards for `layout`.
///
/// Cards start visible with no animation; the caller applies the active
/// filter afterwards.
pub fn render_cards(records: &[DisplayRecord], layout: Layout) -> Vec<CardNode> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| CardNode {
            category: record.category.clone(),
            body: match layout {
                Layout::List => list_card_body(record),
                Layout::Featured => featured_card_body(record, FeaturedSlot::ALL.get(i).copied()),
            },
            hidden: false,
            animation: None,
        })
        .collect()
}

fn list_card_body(record: &DisplayRecord) -> String {
    let mut out = String::new();
    if let Some(image) = &record.image {
        write!(out, "<img src=\"{}\" alt=\"AI News Image\">", escape_html(image)).unwrap();
    }
    write!(
        out,
        "<h3>{}</h3><p>{}</p><a href=\"{}\" target=\"_blank\">Read More</a>",
        escape_html(&record.title),
        escape_html(&record.description),
        escape_html(&record.url)
    )
    .unwrap();
    out
}

fn featured_card_body(record: &DisplayRecord, slot: Option<FeaturedSlot>) -> String {
    let mut out = String::new();
    if let Some(slot) = slot {
        write!(out, "<span class=\"news-label\">{}</span>", slot.heading()).unwrap();
    }
    write!(
        out,
        "<h3>{}</h3><p>{}</p><a href=\"{}\" target=\"_blank\">Read More</a>",
        escape_html(&record.title),
        emphasize(&escape_html(&record.description)),
        escape_html(&record.url)
    )
    .unwrap();
    out
}

/// Rewrite every `**text**` into an emphasized span, dropping the markers.
///
/// ```ignore
/// assert_eq!(emphasize("a **b** c"), "a <span class=\"highlight\">b</span> c");
/// assert_eq!(emphasize("a **b c"), "a **b c");
/// ```
pub fn emphasize(text: &str) -> String {
    EMPHASIS
        .replace_all(text, "<span class=\"highlight\">$1</span>")
        .into_owned()
}

/// Escape the HTML-significant characters of `s`.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
