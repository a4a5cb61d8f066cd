//! Enrich-all handlers for the review TUI.
//!
//! Enrich-all is a placeholder: it never reads or writes records. Triggering
//! it shows a "started" notice and arms a timer; when the timer fires, the
//! completion notice is shown if its run is still outstanding.

use std::any::Any;
use std::time::Duration;

use bubbletea_rs::Cmd;

use super::ReviewApp;
use crate::tui::messages::AppMsg;
use crate::tui::state::{EnrichmentToken, Notice};

impl ReviewApp {
    /// Dispatches enrich-all messages to their handlers.
    pub(super) fn handle_enrichment_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::EnrichAll => self.handle_enrich_all(),
            AppMsg::EnrichmentComplete(token) => self.handle_enrichment_complete(*token),
            _ => {
                // Unreachable: caller filters to enrichment messages.
                None
            }
        }
    }

    fn handle_enrich_all(&mut self) -> Option<Cmd> {
        if !self.screen.variant().has_accepted_section() {
            tracing::trace!("{} screen has no enrich-all", self.screen.variant());
            return None;
        }

        let token = self.enrichment.start();
        tracing::debug!("enrichment {token:?} started");
        self.notify(Notice::enrichment_started());
        Some(Self::arm_enrichment_timer(self.enrich_delay, token))
    }

    fn handle_enrichment_complete(&mut self, token: EnrichmentToken) -> Option<Cmd> {
        if self.enrichment.finish(token) {
            tracing::debug!("enrichment {token:?} complete");
            self.notify(Notice::enrichment_complete());
        } else {
            tracing::trace!("ignoring completion for unknown enrichment {token:?}");
        }
        None
    }

    /// Creates a command that reports completion of run `token` after
    /// `delay`.
    pub(super) fn arm_enrichment_timer(delay: Duration, token: EnrichmentToken) -> Cmd {
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            Some(Box::new(AppMsg::EnrichmentComplete(token)) as Box<dyn Any + Send>)
        })
    }
}
