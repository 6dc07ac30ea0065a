//! Scroll-to-top affordance.

use serde::Serialize;

/// Offset (px) past which the scroll-to-top button appears.
pub const SCROLL_THRESHOLD: u32 = 300;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScrollState {
    pub offset: u32,
    pub button_visible: bool,
}

impl ScrollState {
    pub fn on_scroll(&mut self, offset: u32) {
        self.offset = offset;
        self.button_visible = offset > SCROLL_THRESHOLD;
    }

    pub fn scroll_to_top(&mut self) {
        self.on_scroll(0);
    }
}
