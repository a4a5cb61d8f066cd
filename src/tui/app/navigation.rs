//! Navigation handlers and cursor management.
//!
//! The cursor moves over the rows of every visible section as one list.
//! Each handler recomputes the row count, since reclassification and
//! filtering can change it between messages.

use bubbletea_rs::Cmd;

use super::ReviewApp;

impl ReviewApp {
    fn max_row_index(&self) -> usize {
        self.rows().len().saturating_sub(1)
    }

    /// Handles cursor up navigation.
    pub(super) const fn handle_cursor_up(&mut self) -> Option<Cmd> {
        self.cursor.up(1);
        None
    }

    /// Handles cursor down navigation.
    pub(super) fn handle_cursor_down(&mut self) -> Option<Cmd> {
        let max_index = self.max_row_index();
        self.cursor.down(1, max_index);
        None
    }

    /// Handles page up navigation.
    pub(super) const fn handle_page_up(&mut self) -> Option<Cmd> {
        let page_size = self.body_height();
        self.cursor.up(page_size);
        None
    }

    /// Handles page down navigation.
    pub(super) fn handle_page_down(&mut self) -> Option<Cmd> {
        let page_size = self.body_height();
        let max_index = self.max_row_index();
        self.cursor.down(page_size, max_index);
        None
    }

    /// Handles Home key navigation.
    pub(super) const fn handle_home(&mut self) -> Option<Cmd> {
        self.cursor.home();
        None
    }

    /// Handles End key navigation.
    pub(super) fn handle_end(&mut self) -> Option<Cmd> {
        let max_index = self.max_row_index();
        self.cursor.end(max_index);
        None
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use crate::review::default_records;
    use crate::tui::app::ReviewApp;
    use crate::tui::messages::AppMsg;

    #[fixture]
    fn app() -> ReviewApp {
        ReviewApp::new(default_records()).with_size(80, 10)
    }

    #[rstest]
    fn cursor_stops_at_both_ends(mut app: ReviewApp) {
        app.handle_message(&AppMsg::CursorUp);
        assert_eq!(app.cursor_position(), 0);

        for _ in 0..10 {
            app.handle_message(&AppMsg::CursorDown);
        }
        assert_eq!(app.cursor_position(), 5);
    }

    #[rstest]
    fn page_moves_by_body_height(mut app: ReviewApp) {
        app.handle_message(&AppMsg::PageDown);
        assert_eq!(app.cursor_position(), 5);

        app.handle_message(&AppMsg::PageUp);
        assert_eq!(app.cursor_position(), 0);
    }

    #[rstest]
    fn home_and_end_jump(mut app: ReviewApp) {
        app.handle_message(&AppMsg::End);
        assert_eq!(app.selected_record().map(|record| record.id), Some(6));

        app.handle_message(&AppMsg::Home);
        assert_eq!(app.selected_record().map(|record| record.id), Some(1));
    }

    #[test]
    fn navigation_on_empty_screen_stays_at_zero() {
        let mut app = ReviewApp::empty();

        app.handle_message(&AppMsg::CursorDown);
        app.handle_message(&AppMsg::End);

        assert_eq!(app.cursor_position(), 0);
        assert!(app.selected_row().is_none());
    }
}
