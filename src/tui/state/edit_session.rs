//! Inline edit session for a single record.
//!
//! An edit session holds scratch copies of one record's name and email.
//! Nothing is written to the record until the session is committed; a new
//! session simply replaces the old one.

use crate::review::{Record, RecordId};

/// Which scratch buffer receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    /// The display name buffer.
    #[default]
    Name,
    /// The contact address buffer.
    Email,
}

impl EditField {
    /// Returns the other field.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Name,
        }
    }
}

/// Editing cursor plus scratch buffers for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    record_id: RecordId,
    name: String,
    email: String,
    focus: EditField,
}

impl EditSession {
    /// Starts a session seeded from the record's current name and email.
    #[must_use]
    pub fn seeded_from(record: &Record) -> Self {
        Self {
            record_id: record.id,
            name: record.name.clone(),
            email: record.email.clone(),
            focus: EditField::Name,
        }
    }

    /// Identity of the record being edited.
    #[must_use]
    pub const fn record_id(&self) -> RecordId {
        self.record_id
    }

    /// Scratch name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Scratch email.
    #[must_use]
    pub const fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Field that currently receives input.
    #[must_use]
    pub const fn focus(&self) -> EditField {
        self.focus
    }

    /// Moves input focus to the other field.
    pub const fn toggle_focus(&mut self) {
        self.focus = self.focus.toggled();
    }

    /// Replaces both scratch buffers.
    pub fn set_buffers(&mut self, name: impl Into<String>, email: impl Into<String>) {
        self.name = name.into();
        self.email = email.into();
    }

    /// Appends a character to the focused buffer.
    pub fn push_char(&mut self, character: char) {
        self.focused_buffer_mut().push(character);
    }

    /// Removes the last character of the focused buffer, if any.
    pub fn backspace(&mut self) {
        let _ = self.focused_buffer_mut().pop();
    }

    /// Consumes the session, returning the scratch name and email.
    #[must_use]
    pub fn into_buffers(self) -> (String, String) {
        (self.name, self.email)
    }

    const fn focused_buffer_mut(&mut self) -> &mut String {
        match self.focus {
            EditField::Name => &mut self.name,
            EditField::Email => &mut self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> EditSession {
        EditSession::seeded_from(&Record::new(2, "Jane Smith", "jane@example.com"))
    }

    #[test]
    fn seeded_session_copies_name_and_email() {
        let session = session();

        assert_eq!(session.record_id(), 2);
        assert_eq!(session.name(), "Jane Smith");
        assert_eq!(session.email(), "jane@example.com");
        assert_eq!(session.focus(), EditField::Name);
    }

    #[test]
    fn typing_goes_to_focused_buffer() {
        let mut session = session();

        session.backspace();
        session.push_char('e');
        session.toggle_focus();
        session.push_char('!');

        assert_eq!(session.name(), "Jane Smite");
        assert_eq!(session.email(), "jane@example.com!");
    }

    #[test]
    fn backspace_on_empty_buffer_is_harmless() {
        let mut session = session();
        session.set_buffers("", "");

        session.backspace();

        assert_eq!(session.name(), "");
    }

    #[test]
    fn into_buffers_returns_scratch_values() {
        let mut session = session();
        session.set_buffers("Janet", "janet@x.com");

        assert_eq!(
            session.into_buffers(),
            ("Janet".to_owned(), "janet@x.com".to_owned())
        );
    }
}
