//! Rendering logic for the review TUI application.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use super::ReviewApp;
use super::layout::window_start;
use crate::review::Record;
use crate::tui::components::{
    NotificationBarComponent, NotificationBarViewContext, RecordTableComponent,
    RecordTableViewContext,
};
use crate::tui::state::Section;

/// Shown in place of the main table when nothing matches.
const EMPTY_RESULT_MESSAGE: &str = "No applications found matching your criteria";

impl ReviewApp {
    const fn max_line_width(&self) -> usize {
        let width = self.width as usize;
        if width == 0 { 1 } else { width }
    }

    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        format!("Application Dashboard [{}]\n", self.screen.variant())
    }

    /// Renders the filter bar showing the active filter, the query, and the
    /// main table's row count.
    pub(super) fn render_filter_bar(&self) -> String {
        let filter = self.screen.filter();
        let label = filter.active_filter.label();
        let shown = self.screen.pending_for_display().len();
        let total = self.screen.records().len();

        let search = if self.search_active {
            format!("  Search: {}_", filter.query)
        } else if filter.query.is_empty() {
            String::new()
        } else {
            format!("  Search: {}", filter.query)
        };

        format!("Filter: {label}{search} ({shown}/{total})\n")
    }

    /// Renders every visible section, windowed to the body height so the
    /// selected row stays on screen.
    pub(super) fn render_sections(&self) -> String {
        let pending = self.screen.pending_for_display();
        let review = self.screen.review_group();
        let accepted = self.screen.accepted_group();
        let sections: [(Section, &[&Record], Option<&str>); 3] = [
            (
                Section::Applications,
                pending.as_slice(),
                Some(EMPTY_RESULT_MESSAGE),
            ),
            (Section::ForReview, review.as_slice(), None),
            (Section::Accepted, accepted.as_slice(), None),
        ];

        let mut lines: Vec<String> = Vec::new();
        let mut focus = None;
        let mut first_row = 0_usize;

        for (section, records, empty_message) in sections {
            let selected = self
                .cursor
                .position
                .checked_sub(first_row)
                .filter(|index| *index < records.len());
            first_row = first_row.saturating_add(records.len());

            let ctx = RecordTableViewContext {
                section,
                records,
                variant: self.screen.variant(),
                selected,
                editing: self.screen.editing(),
                empty_message,
                enriching: self.enrichment.in_progress(),
                max_width: self.max_line_width(),
            };
            let view = RecordTableComponent::view(&ctx);
            if view.is_empty() {
                continue;
            }

            if !lines.is_empty() {
                lines.push(String::new());
            }
            if let Some(line) = RecordTableComponent::selected_line(&ctx) {
                focus = Some(lines.len().saturating_add(line));
            }
            lines.extend(view.lines().map(ToOwned::to_owned));
        }

        let height = self.body_height();
        let start = window_start(lines.len(), focus, height);
        let mut output = String::new();
        for line in lines.iter().skip(start).take(height) {
            output.push_str(line);
            output.push('\n');
        }

        let drawn = lines.len().saturating_sub(start).min(height);
        output.push_str(&"\n".repeat(height.saturating_sub(drawn)));
        output
    }

    /// Renders the notification bar.
    pub(super) fn render_notification_bar(&self) -> String {
        let ctx = NotificationBarViewContext {
            notification: self.current_notification(),
            max_width: self.max_line_width(),
        };
        NotificationBarComponent::view(&ctx)
    }

    /// Renders the status bar with hints for the current input mode.
    pub(super) fn render_status_bar(&self) -> String {
        if self.screen.editing().is_some() {
            return "Editing: type to change  Tab:switch field  Enter:save  Esc:cancel\n"
                .to_owned();
        }

        if self.search_active {
            return "Search: type to filter  Backspace:delete  Enter/Esc:done\n".to_owned();
        }

        format!("{}\n", self.browse_status_hints())
    }

    fn browse_status_hints(&self) -> String {
        let mut hints = if self.width <= 80 {
            String::from("q:quit  ?:help  j/k:move  f:filter  /:search")
        } else {
            String::from("j/k:move  f:filter  /:search  Esc:clear  a/x/v:reclassify")
        };

        let variant = self.screen.variant();
        if variant.supports_editing() {
            hints.push_str("  e:edit");
        }
        if variant.has_accepted_section() {
            hints.push_str("  E:enrich");
        }
        if self.width > 80 {
            hints.push_str("  ?:help  q:quit");
        }
        hints
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let variant = self.screen.variant();
        let mut help_text = String::from(
            r"
=== Keyboard Shortcuts ===

Navigation:
  j, Down    Move cursor down
  k, Up      Move cursor up
  PgDn       Page down
  PgUp       Page up
  Home, g    Go to first row
  End, G     Go to last row

Filtering:
  f          Cycle status filter
  /          Search (Enter or Esc to finish)
  Esc        Clear filter and search

Selected row:
  a          Accept
",
        );
        help_text.push_str(&format!("  x          {}\n", variant.reject_label()));
        help_text.push_str("  v          Mark for review\n");

        if variant.supports_editing() {
            help_text.push_str(
                r"  e          Edit name and email

Editing:
  text keys  Type into the focused field
  Tab        Switch between name and email
  Enter      Save
  Esc        Cancel
",
            );
        }

        if variant.has_accepted_section() {
            help_text.push_str("\nAccepted contacts:\n  E          Enrich all\n");
        }

        help_text.push_str(
            r"
Other:
  ?          Toggle this help
  q          Quit

Press any key to close this help.
",
        );
        help_text
    }
}
