//! Filter and search message handlers for the review TUI.
//!
//! This module contains the handlers for filter-related messages, managing
//! the active status filter and search query and keeping the cursor within
//! the rows that remain visible.

use bubbletea_rs::Cmd;

use super::ReviewApp;
use crate::tui::state::StatusFilter;

impl ReviewApp {
    /// Handles a `SetFilter` message by applying the given filter.
    ///
    /// Filters the current variant does not offer are ignored.
    pub(super) fn handle_set_filter(&mut self, filter: StatusFilter) -> Option<Cmd> {
        if self.screen.set_filter(filter) {
            self.clamp_cursor();
        }
        None
    }

    /// Handles a `ClearFilter` message by resetting the filter to `All` and
    /// clearing the search query.
    pub(super) fn handle_clear_filter(&mut self) -> Option<Cmd> {
        self.screen.clear_filters();
        self.search_active = false;
        self.clamp_cursor();
        None
    }

    /// Advances the status filter through the variant's options, wrapping
    /// back to `All` after the last one.
    pub(super) fn handle_cycle_filter(&mut self) -> Option<Cmd> {
        self.screen.cycle_filter();
        self.clamp_cursor();
        None
    }

    /// Enters search entry mode.
    pub(super) const fn handle_start_search(&mut self) -> Option<Cmd> {
        self.search_active = true;
        None
    }

    /// Appends a typed character to the search query.
    pub(super) fn handle_search_input(&mut self, character: char) -> Option<Cmd> {
        self.screen.push_query_char(character);
        self.cursor.home();
        self.clamp_cursor();
        None
    }

    /// Removes the last character from the search query.
    pub(super) fn handle_search_backspace(&mut self) -> Option<Cmd> {
        self.screen.pop_query_char();
        self.clamp_cursor();
        None
    }

    /// Leaves search entry mode; the query stays applied.
    pub(super) const fn handle_end_search(&mut self) -> Option<Cmd> {
        self.search_active = false;
        None
    }
}
