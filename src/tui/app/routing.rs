//! Message routing and dispatch logic.
//!
//! This module handles routing messages based on the current input mode and
//! dispatching them to appropriate category handlers. It implements the
//! mode-based routing pattern where the edit and search modes may handle or
//! block messages differently from browsing.

use bubbletea_rs::Cmd;

use super::ReviewApp;
use crate::tui::messages::AppMsg;

/// Result of input mode-based routing.
enum InputModeRouting {
    Handled(Option<Cmd>),
    Fallthrough,
}

impl ReviewApp {
    /// Routes messages while an edit session is open.
    ///
    /// Escape cancels the edit. Navigation and filter messages are blocked
    /// so the edited row stays where it is.
    fn try_handle_in_edit_mode(&mut self, msg: &AppMsg) -> InputModeRouting {
        if self.screen.editing().is_none() {
            return InputModeRouting::Fallthrough;
        }

        if matches!(msg, AppMsg::EscapePressed) {
            return InputModeRouting::Handled(self.handle_edit_msg(&AppMsg::CancelEdit));
        }

        if msg.is_navigation() || msg.is_filter() {
            return InputModeRouting::Handled(None);
        }

        InputModeRouting::Fallthrough
    }

    /// Routes messages while the search query is being typed.
    fn try_handle_in_search_mode(&mut self, msg: &AppMsg) -> InputModeRouting {
        if !self.search_active {
            return InputModeRouting::Fallthrough;
        }

        if matches!(msg, AppMsg::EscapePressed) {
            return InputModeRouting::Handled(self.handle_end_search());
        }

        InputModeRouting::Fallthrough
    }

    /// Routes messages based on the current input mode.
    ///
    /// Returns `InputModeRouting::Handled(cmd)` if the message was handled by
    /// mode-specific routing, or `InputModeRouting::Fallthrough` if the
    /// message should proceed to category-based dispatch.
    fn route_by_input_mode(&mut self, msg: &AppMsg) -> InputModeRouting {
        if let InputModeRouting::Handled(result) = self.try_handle_in_edit_mode(msg) {
            return InputModeRouting::Handled(result);
        }

        if let InputModeRouting::Handled(result) = self.try_handle_in_search_mode(msg) {
            return InputModeRouting::Handled(result);
        }

        // EscapePressed while browsing
        if matches!(msg, AppMsg::EscapePressed) {
            return InputModeRouting::Handled(self.handle_clear_filter());
        }

        InputModeRouting::Fallthrough
    }

    /// Dispatches messages based on their category.
    ///
    /// This method handles messages that were not intercepted by mode-specific
    /// routing, dispatching them to the appropriate category handler.
    fn dispatch_by_message_category(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_filter() {
            return self.handle_filter_msg(msg);
        }
        if msg.is_status() {
            return self.handle_status_msg(msg);
        }
        if msg.is_edit() {
            return self.handle_edit_msg(msg);
        }
        if msg.is_enrichment() {
            return self.handle_enrichment_msg(msg);
        }
        if matches!(msg, AppMsg::NotificationTick) {
            return self.handle_notification_tick();
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands. It first attempts
    /// mode-based routing, then falls back to category-based dispatch.
    #[doc(hidden)]
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if let InputModeRouting::Handled(result) = self.route_by_input_mode(msg) {
            return result;
        }
        self.dispatch_by_message_category(msg)
    }

    /// Dispatches navigation messages to their handlers.
    fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => self.handle_cursor_up(),
            AppMsg::CursorDown => self.handle_cursor_down(),
            AppMsg::PageUp => self.handle_page_up(),
            AppMsg::PageDown => self.handle_page_down(),
            AppMsg::Home => self.handle_home(),
            AppMsg::End => self.handle_end(),
            _ => {
                // Unreachable: caller filters to navigation messages.
                None
            }
        }
    }

    /// Dispatches filter and search messages to their handlers.
    fn handle_filter_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::SetFilter(filter) => self.handle_set_filter(*filter),
            AppMsg::ClearFilter => self.handle_clear_filter(),
            AppMsg::CycleFilter => self.handle_cycle_filter(),
            AppMsg::StartSearch => self.handle_start_search(),
            AppMsg::SearchInput(character) => self.handle_search_input(*character),
            AppMsg::SearchBackspace => self.handle_search_backspace(),
            AppMsg::EndSearch => self.handle_end_search(),
            _ => {
                // Unreachable: caller filters to filter messages.
                None
            }
        }
    }
}
