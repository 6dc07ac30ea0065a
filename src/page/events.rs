//! UI events dispatched to the page controller.
//!
//! Events are parsed from short textual commands so a page session can be
//! scripted from the command line:
//!
//! | Command | Event |
//! |---------|-------|
//! | `filter:<category>` | filter button activation |
//! | `load-more` | "load more" button |
//! | `open-modal` / `close-modal` | subscribe button / close button |
//! | `click:<element-id>` | window click on an element |
//! | `subscribe:<name>:<email>:<frequency>` | subscription form submit |
//! | `scroll:<offset>` | window scroll |
//! | `scroll-top` | scroll-to-top button |

use crate::error::ConfigError;
use crate::page::modal::SubscriptionForm;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Filter(String),
    LoadMore,
    OpenModal,
    CloseModal,
    Click(String),
    Subscribe(SubscriptionForm),
    Scroll(u32),
    ScrollTop,
}

impl FromStr for UiEvent {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidEvent(s.to_string());
        let (command, arg) = match s.split_once(':') {
            Some((command, arg)) => (command, Some(arg)),
            None => (s, None),
        };

        match (command.trim(), arg) {
            ("load-more", None) => Ok(UiEvent::LoadMore),
            ("open-modal", None) => Ok(UiEvent::OpenModal),
            ("close-modal", None) => Ok(UiEvent::CloseModal),
            ("scroll-top", None) => Ok(UiEvent::ScrollTop),
            ("filter", Some(category)) if !category.is_empty() => {
                Ok(UiEvent::Filter(category.to_string()))
            }
            ("click", Some(target)) if !target.is_empty() => Ok(UiEvent::Click(target.to_string())),
            ("scroll", Some(offset)) => offset
                .trim()
                .parse()
                .map(UiEvent::Scroll)
                .map_err(|_| invalid()),
            ("subscribe", Some(fields)) => {
                let parts: Vec<&str> = fields.splitn(3, ':').collect();
                match parts.as_slice() {
                    [name, email, frequency] => Ok(UiEvent::Subscribe(SubscriptionForm {
                        name: name.to_string(),
                        email: email.to_string(),
                        frequency: frequency.to_string(),
                    })),
                    _ => Err(invalid()),
                }
            }
            _ => Err(invalid()),
        }
    }
}
