//! The subscription modal and its success banner.
//!
//! Purely cosmetic: submitting the form shows a thank-you banner and closes
//! the dialog. Nothing is transmitted anywhere.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::{debug, info};

/// Element id of the modal backdrop; a window click on it closes the modal.
pub const MODAL_ID: &str = "subscribe-modal";

/// How long a success banner stays on the page.
pub const BANNER_LIFETIME_SECS: i64 = 5;

/// Values of the subscription form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubscriptionForm {
    pub name: String,
    pub email: String,
    pub frequency: String,
}

/// A transient success message inserted at the top of the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub message: String,
    pub shown_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModalState {
    pub open: bool,
    /// Body scrolling is locked while the modal is open.
    pub scroll_locked: bool,
    pub banners: Vec<Banner>,
}

impl ModalState {
    pub fn open(&mut self) {
        self.open = true;
        self.scroll_locked = true;
        debug!("Subscribe modal opened");
    }

    pub fn close(&mut self) {
        self.open = false;
        self.scroll_locked = false;
        debug!("Subscribe modal closed");
    }

    /// Window click handler: only a click on the backdrop itself closes.
    pub fn window_click(&mut self, target: &str) {
        if target == MODAL_ID {
            self.close();
        }
    }

    /// Handle a form submission: show the banner and close.
    ///
    /// The submitted values only live in the banner; the rendered form is
    /// always blank.
    pub fn submit(&mut self, form: SubscriptionForm, now: DateTime<Utc>) -> &Banner {
        let message = format!(
            "Thank you {}! You've been subscribed with email: {} for {} updates.",
            form.name, form.email, form.frequency
        );
        info!(frequency = %form.frequency, "Subscription form submitted");
        self.banners.insert(
            0,
            Banner {
                message,
                shown_at: now,
            },
        );
        self.close();
        &self.banners[0]
    }

    /// Drop banners older than [`BANNER_LIFETIME_SECS`].
    pub fn expire_banners(&mut self, now: DateTime<Utc>) {
        let lifetime = Duration::seconds(BANNER_LIFETIME_SECS);
        self.banners.retain(|b| now - b.shown_at < lifetime);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SubscriptionForm {
        SubscriptionForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            frequency: "weekly".to_string(),
        }
    }

    #[test]
    fn test_open_close_toggles_scroll_lock() {
        let mut modal = ModalState::default();
        modal.open();
        assert!(modal.open && modal.scroll_locked);
        modal.close();
        assert!(!modal.open && !modal.scroll_locked);
    }

    #[test]
    fn test_outside_click_only_on_backdrop() {
        let mut modal = ModalState::default();
        modal.open();
        modal.window_click("email");
        assert!(modal.open);
        modal.window_click(MODAL_ID);
        assert!(!modal.open);
    }

    #[test]
    fn test_submit_shows_banner_and_closes() {
        let mut modal = ModalState::default();
        modal.open();
        let now = Utc::now();

        let banner = modal.submit(form(), now).clone();
        assert_eq!(
            banner.message,
            "Thank you Ada! You've been subscribed with email: ada@example.com for weekly updates."
        );
        assert!(!modal.open);
        assert_eq!(modal.banners.len(), 1);
    }

    #[test]
    fn test_banner_expires_after_five_seconds() {
        let mut modal = ModalState::default();
        let t0 = Utc::now();
        modal.submit(form(), t0);

        modal.expire_banners(t0 + Duration::milliseconds(4999));
        assert_eq!(modal.banners.len(), 1);
        modal.expire_banners(t0 + Duration::seconds(5));
        assert!(modal.banners.is_empty());
    }

    #[test]
    fn test_newest_banner_first() {
        let mut modal = ModalState::default();
        let t0 = Utc::now();
        modal.submit(form(), t0);
        let mut second = form();
        second.name = "Grace".to_string();
        modal.submit(second, t0 + Duration::seconds(1));

        assert!(modal.banners[0].message.starts_with("Thank you Grace!"));
    }
}
