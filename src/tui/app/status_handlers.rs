//! Reclassify handlers for the review TUI.
//!
//! Keyboard actions act on the row under the cursor and respect the row's
//! available actions, so an action matching the record's current status is
//! ignored. Reclassifying by identity goes straight to the screen.

use bubbletea_rs::Cmd;

use super::ReviewApp;
use crate::review::{RecordId, TargetStatus};
use crate::tui::messages::AppMsg;
use crate::tui::state::{RowAction, available_actions};

impl ReviewApp {
    /// Dispatches reclassify messages to their handlers.
    pub(super) fn handle_status_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Reclassify(target) => self.handle_reclassify_selected(*target),
            AppMsg::ReclassifyRecord { id, target } => self.handle_reclassify_record(*id, *target),
            _ => {
                // Unreachable: caller filters to status messages.
                None
            }
        }
    }

    fn handle_reclassify_selected(&mut self, target: TargetStatus) -> Option<Cmd> {
        let row = self.selected_row()?;
        let status = self.screen.record(row.record_id)?.status;
        let actions = available_actions(row.section, status, self.screen.variant());

        if !actions.contains(&RowAction::for_target(target)) {
            tracing::trace!(
                "{target:?} not offered for record {} in {:?}",
                row.record_id,
                row.section
            );
            return None;
        }

        self.handle_reclassify_record(row.record_id, target)
    }

    fn handle_reclassify_record(&mut self, id: RecordId, target: TargetStatus) -> Option<Cmd> {
        if let Some(notice) = self.screen.reclassify(id, target) {
            self.notify(notice);
            self.clamp_cursor();
        }
        None
    }
}
