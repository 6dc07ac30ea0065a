//! Page scaffold validation.
//!
//! The scaffold is the HTML template the page is installed over. Every
//! element role the controllers rely on must be present; a missing one is a
//! configuration error reported at startup instead of a failure on first use.
//! Filter buttons are read from `.filter-btn[data-category]`.

use crate::error::ConfigError;
use crate::models::Layout;
use crate::page::filter::FilterButton;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, instrument};

/// Element roles the page needs, by selector.
pub const REQUIRED_ELEMENTS: [&str; 11] = [
    "#subscribe-btn",
    "#subscribe-modal",
    ".close-btn",
    "#subscribe-form",
    "#news-container",
    "#load-more-btn",
    "#loading",
    ".filter-btn",
    "#name",
    "#email",
    "#frequency",
];

static REQUIRED: Lazy<Vec<(&'static str, Selector)>> = Lazy::new(|| {
    REQUIRED_ELEMENTS
        .iter()
        .map(|s| (*s, Selector::parse(s).unwrap()))
        .collect()
});
static FILTER_BUTTON: Lazy<Selector> = Lazy::new(|| Selector::parse(".filter-btn").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());

const DEFAULT_TITLE: &str = "AI News";

/// Scaffold used for the list layout when no template is given.
pub const LIST_SCAFFOLD: &str = r#"<!DOCTYPE html>
<html><head><title>AI News</title></head><body>
<button id="subscribe-btn">Subscribe</button>
<nav class="filters">
  <button class="filter-btn active" data-category="all">All</button>
  <button class="filter-btn" data-category="general">General</button>
  <button class="filter-btn" data-category="research">Research</button>
  <button class="filter-btn" data-category="industry">Industry</button>
  <button class="filter-btn" data-category="policy">Policy</button>
</nav>
<div id="loading" class="hidden"></div>
<div id="news-container"></div>
<button id="load-more-btn">Load More</button>
<div id="subscribe-modal" class="modal"><div class="modal-content">
  <span class="close-btn">&times;</span>
  <form id="subscribe-form">
    <input id="name"><input id="email"><select id="frequency"></select>
  </form>
</div></div>
</body></html>"#;

/// Scaffold used for the featured layout when no template is given.
pub const FEATURED_SCAFFOLD: &str = r#"<!DOCTYPE html>
<html><head><title>AI News Highlights</title></head><body>
<button id="subscribe-btn">Subscribe</button>
<nav class="filters">
  <button class="filter-btn active" data-category="all">All</button>
  <button class="filter-btn" data-category="best">Best</button>
  <button class="filter-btn" data-category="viral">Most Viral</button>
  <button class="filter-btn" data-category="relevant">Relevant</button>
</nav>
<div id="loading" class="hidden"></div>
<div id="news-container"></div>
<button id="load-more-btn">Load More</button>
<div id="subscribe-modal" class="modal"><div class="modal-content">
  <span class="close-btn">&times;</span>
  <form id="subscribe-form">
    <input id="name"><input id="email"><select id="frequency"></select>
  </form>
</div></div>
</body></html>"#;

/// The validated scaffold: what the page controller and HTML writer need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffold {
    pub title: String,
    pub buttons: Vec<FilterButton>,
}

impl Scaffold {
    /// Built-in scaffold for `layout`.
    pub fn builtin(layout: Layout) -> Result<Self, ConfigError> {
        match layout {
            Layout::List => Self::parse(LIST_SCAFFOLD),
            Layout::Featured => Self::parse(FEATURED_SCAFFOLD),
        }
    }

    /// Validate `html` and extract the title and filter buttons.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingElement`] naming the first absent role, also
    /// when a filter button lacks its `data-category`.
    #[instrument(level = "debug", skip_all)]
    pub fn parse(html: &str) -> Result<Self, ConfigError> {
        let document = Html::parse_document(html);

        for (name, selector) in REQUIRED.iter() {
            if document.select(selector).next().is_none() {
                return Err(ConfigError::MissingElement(*name));
            }
        }

        let mut buttons = Vec::new();
        for element in document.select(&FILTER_BUTTON) {
            let category = element
                .value()
                .attr("data-category")
                .ok_or(ConfigError::MissingElement(".filter-btn[data-category]"))?;
            let label = element.text().collect::<Vec<_>>().join(" ").trim().to_string();
            buttons.push(FilterButton {
                category: category.to_string(),
                label: if label.is_empty() { category.to_string() } else { label },
                active: element.value().classes().any(|c| c == "active"),
            });
        }

        let title = document
            .select(&TITLE)
            .next()
            .map(|t| t.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        debug!(buttons = buttons.len(), %title, "Validated page scaffold");
        Ok(Self { title, buttons })
    }
}
