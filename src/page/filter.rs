//! Category filtering over rendered cards.
//!
//! Filtering is visibility-only: cards are hidden or shown, never removed,
//! and records are never re-fetched.

use crate::render::{CardNode, ENTRANCE_ANIMATION};
use serde::Serialize;

/// The category value that matches every card.
pub const ALL: &str = "all";

/// The single active category gating card visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterState {
    current: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            current: ALL.to_string(),
        }
    }
}

impl FilterState {
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn set(&mut self, category: &str) {
        self.current = category.to_string();
    }

    /// A card is visible iff the filter is `all` or names its category.
    pub fn matches(&self, category: &str) -> bool {
        self.current == ALL || self.current == category
    }
}

/// A filter button from the page scaffold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterButton {
    pub category: String,
    pub label: String,
    pub active: bool,
}

/// Deactivate every button, then activate the ones for `category`.
///
/// Returns how many buttons ended up active.
pub fn activate_button(buttons: &mut [FilterButton], category: &str) -> usize {
    for button in buttons.iter_mut() {
        button.active = false;
    }
    let mut active = 0;
    if let Some(button) = buttons.iter_mut().find(|b| b.category == category) {
        button.active = true;
        active += 1;
    }
    active
}

/// Apply `filter` to `cards`. Shown cards replay the entrance animation,
/// hidden cards carry no animation.
pub fn apply_visibility(cards: &mut [CardNode], filter: &FilterState) {
    for card in cards.iter_mut() {
        if filter.matches(&card.category) {
            card.hidden = false;
            card.animation = Some(ENTRANCE_ANIMATION);
        } else {
            card.hidden = true;
            card.animation = None;
        }
    }
}
