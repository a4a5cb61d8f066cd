//! Inline edit handlers for the review TUI.
//!
//! Editing is only available in screen variants that support it. While a
//! session is open, typed keys go to the focused scratch buffer; the record
//! itself is untouched until the session is committed.

use bubbletea_rs::Cmd;

use super::ReviewApp;
use crate::review::RecordId;
use crate::tui::messages::AppMsg;
use crate::tui::state::{RowAction, available_actions};

impl ReviewApp {
    /// Dispatches inline edit messages to their handlers.
    pub(super) fn handle_edit_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::BeginEdit => self.handle_begin_edit_selected(),
            AppMsg::BeginEditRecord(id) => self.handle_begin_edit(*id),
            AppMsg::EditInput(character) => {
                if let Some(session) = self.screen.editing_mut() {
                    session.push_char(*character);
                }
                None
            }
            AppMsg::EditBackspace => {
                if let Some(session) = self.screen.editing_mut() {
                    session.backspace();
                }
                None
            }
            AppMsg::EditToggleField => {
                if let Some(session) = self.screen.editing_mut() {
                    session.toggle_focus();
                }
                None
            }
            AppMsg::CommitEdit => self.handle_commit_edit(),
            AppMsg::CancelEdit => {
                self.screen.cancel_edit();
                None
            }
            _ => {
                // Unreachable: caller filters to edit messages.
                None
            }
        }
    }

    fn handle_begin_edit_selected(&mut self) -> Option<Cmd> {
        let row = self.selected_row()?;
        let status = self.screen.record(row.record_id)?.status;
        let actions = available_actions(row.section, status, self.screen.variant());

        if !actions.contains(&RowAction::Edit) {
            tracing::trace!("edit not offered for record {}", row.record_id);
            return None;
        }

        self.handle_begin_edit(row.record_id)
    }

    fn handle_begin_edit(&mut self, id: RecordId) -> Option<Cmd> {
        if !self.screen.variant().supports_editing() {
            tracing::trace!("{} screen does not support editing", self.screen.variant());
            return None;
        }

        if self.screen.begin_edit(id) {
            self.search_active = false;
        }
        None
    }

    fn handle_commit_edit(&mut self) -> Option<Cmd> {
        if let Some(notice) = self.screen.commit_edit() {
            self.notify(notice);
            self.clamp_cursor();
        }
        None
    }
}
