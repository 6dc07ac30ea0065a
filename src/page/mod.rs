//! The page controller: single owner of all mutable page state.
//!
//! Every handler takes `&mut self`, so handlers run one at a time and never
//! interleave. The controller holds:
//! - the display records derived from the last load (never mutated)
//! - [`filter::FilterState`] and [`pagination::PageState`]
//! - the rendered [`Container`], filter buttons and affordance visibility
//! - the [`modal::ModalState`] and [`scroll::ScrollState`]
//!
//! Nothing here touches a real DOM; [`crate::outputs::html`] serializes the
//! final state into a document.

pub mod events;
pub mod filter;
pub mod modal;
pub mod pagination;
pub mod scroll;

use crate::config::PageSettings;
use crate::error::LoadError;
use crate::loader::{FailurePolicy, LOAD_ERROR_MESSAGE, LoadState};
use crate::models::{DisplayRecord, Layout, NewsPayload};
use crate::normalize::normalize;
use crate::render::{CardNode, render_cards};
use crate::sample::sample_payload;
use chrono::{DateTime, Utc};
use events::UiEvent;
use filter::{FilterButton, FilterState};
use modal::ModalState;
use pagination::PageState;
use scroll::ScrollState;
use tracing::{debug, error, info, instrument, warn};

/// Contents of the news container element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Container {
    #[default]
    Empty,
    Cards(Vec<CardNode>),
    Error(String),
}

impl Container {
    pub fn cards(&self) -> &[CardNode] {
        match self {
            Container::Cards(cards) => cards,
            _ => &[],
        }
    }
}

#[derive(Debug)]
pub struct PageController {
    layout: Layout,
    on_failure: FailurePolicy,
    palette: Vec<String>,
    records: Vec<DisplayRecord>,
    filter: FilterState,
    pages: PageState,
    load_state: LoadState,
    container: Container,
    buttons: Vec<FilterButton>,
    loading_visible: bool,
    load_more_visible: bool,
    modal: ModalState,
    scroll: ScrollState,
}

impl PageController {
    /// Install the controller over the scaffold's filter buttons.
    pub fn new(settings: &PageSettings, buttons: Vec<FilterButton>) -> Self {
        Self {
            layout: settings.layout,
            on_failure: settings.on_failure,
            palette: settings.palette.clone(),
            records: Vec::new(),
            filter: FilterState::default(),
            pages: PageState::new(settings.page_size),
            load_state: LoadState::Idle,
            container: Container::Empty,
            buttons,
            loading_visible: false,
            load_more_visible: true,
            modal: ModalState::default(),
            scroll: ScrollState::default(),
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn records(&self) -> &[DisplayRecord] {
        &self.records
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn pages(&self) -> &PageState {
        &self.pages
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    pub fn loading_visible(&self) -> bool {
        self.loading_visible
    }

    pub fn load_more_visible(&self) -> bool {
        self.load_more_visible
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Enter `Loading`: show the indicator. The caller issues the fetch.
    pub fn begin_loading(&mut self) {
        self.load_state = LoadState::Loading;
        self.loading_visible = true;
        info!("Loading news");
    }

    /// Apply the outcome of the single load attempt.
    #[instrument(level = "info", skip_all)]
    pub fn finish_loading(&mut self, outcome: Result<NewsPayload, LoadError>) {
        match outcome {
            Ok(payload) => {
                self.records = normalize(&payload, &self.palette);
                self.display_current_page();
                self.loading_visible = false;
                self.load_state = LoadState::Success {
                    records: self.records.len(),
                };
                info!(records = self.records.len(), "News loaded");
            }
            Err(e) => {
                error!(error = %e, "Error loading news");
                self.loading_visible = false;
                match self.on_failure {
                    FailurePolicy::ShowError => {
                        self.container = Container::Error(LOAD_ERROR_MESSAGE.to_string());
                        self.load_state = LoadState::Failure {
                            reason: e.to_string(),
                            fell_back: false,
                        };
                    }
                    FailurePolicy::FallbackToSample => {
                        self.records = normalize(&sample_payload(self.layout), &self.palette);
                        self.display_current_page();
                        self.load_state = LoadState::Failure {
                            reason: e.to_string(),
                            fell_back: true,
                        };
                        info!(records = self.records.len(), "Rendered built-in sample news");
                    }
                }
            }
        }
    }

    /// Handle one UI event. `now` timestamps banners and expires old ones.
    pub fn dispatch(&mut self, event: UiEvent, now: DateTime<Utc>) {
        debug!(?event, "Dispatching UI event");
        self.modal.expire_banners(now);
        match event {
            UiEvent::Filter(category) => self.activate_filter(&category),
            UiEvent::LoadMore => self.load_more(),
            UiEvent::OpenModal => self.modal.open(),
            UiEvent::CloseModal => self.modal.close(),
            UiEvent::Click(target) => self.modal.window_click(&target),
            UiEvent::Subscribe(form) => {
                self.modal.submit(form, now);
            }
            UiEvent::Scroll(offset) => self.scroll.on_scroll(offset),
            UiEvent::ScrollTop => self.scroll.scroll_to_top(),
        }
    }

    /// Make `category` the active filter and re-apply visibility.
    ///
    /// Only scaffold filter buttons can activate a filter; an unknown
    /// category is ignored so exactly one button stays active.
    pub fn activate_filter(&mut self, category: &str) {
        if !self.buttons.iter().any(|b| b.category == category) {
            warn!(%category, "No filter button for category; ignoring");
            return;
        }
        filter::activate_button(&mut self.buttons, category);
        self.filter.set(category);
        self.apply_filter();
        debug!(%category, visible = self.visible_cards(), "Filter applied");
    }

    /// Reveal the next page of records.
    pub fn load_more(&mut self) {
        self.pages.advance();
        self.display_current_page();
        debug!(page = self.pages.page(), rendered = self.container.cards().len(), "Loaded more news");
    }

    /// Number of cards currently visible.
    pub fn visible_cards(&self) -> usize {
        self.container.cards().iter().filter(|c| !c.hidden).count()
    }

    /// Replace the container with the current page prefix, then filter.
    fn display_current_page(&mut self) {
        let cards = render_cards(self.pages.slice(&self.records), self.layout);
        self.container = Container::Cards(cards);
        self.apply_filter();
        if self.load_more_visible && self.pages.is_exhausted(self.records.len()) {
            self.load_more_visible = false;
            debug!(total = self.records.len(), "All news rendered; hiding load more");
        }
    }

    fn apply_filter(&mut self) {
        if let Container::Cards(cards) = &mut self.container {
            filter::apply_visibility(cards, &self.filter);
        }
    }
}
