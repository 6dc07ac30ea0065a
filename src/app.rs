//! The page session: one load attempt plus the UI events around it.
//!
//! Everything runs on the calling task. While the fetch is in flight the
//! session keeps dispatching UI events, so the page stays responsive; the
//! load outcome is applied exactly once, between two events, never in the
//! middle of one. No locks are needed because the controller has a single
//! owner.

use crate::loader::Loader;
use crate::page::PageController;
use crate::page::events::UiEvent;
use crate::source::NewsSource;
use chrono::Utc;
use futures::stream::{Stream, StreamExt};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Run one page session.
///
/// * `during_load` - events that arrive while the load is in flight; any
///   still pending when the load finishes are dispatched afterwards
/// * `after_load` - events dispatched once the load outcome is applied
#[instrument(level = "info", skip_all)]
pub async fn run_session<S, E, A>(
    page: &mut PageController,
    loader: &Loader<S>,
    during_load: E,
    after_load: A,
) where
    S: NewsSource,
    E: Stream<Item = UiEvent>,
    A: IntoIterator<Item = UiEvent>,
{
    let t0 = Instant::now();
    page.begin_loading();

    let load = loader.load();
    tokio::pin!(load);
    let events = during_load.fuse();
    tokio::pin!(events);

    let mut handled = 0usize;
    let outcome = loop {
        tokio::select! {
            result = &mut load => break result,
            Some(event) = events.next() => {
                page.dispatch(event, Utc::now());
                handled += 1;
            }
        }
    };
    debug!(handled, "Events handled while loading");
    page.finish_loading(outcome);

    while let Some(event) = events.next().await {
        page.dispatch(event, Utc::now());
    }
    for event in after_load {
        page.dispatch(event, Utc::now());
    }

    info!(
        elapsed_ms = t0.elapsed().as_millis(),
        state = ?page.load_state(),
        rendered = page.container().cards().len(),
        visible = page.visible_cards(),
        "Page session complete"
    );
}
