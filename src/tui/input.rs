//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. The mapping depends on the input mode:
//! while browsing, keys are commands; while searching or editing, most keys
//! are text.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;
use crate::review::TargetStatus;

/// Input mode used to select a key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Moving over rows and triggering actions.
    Browse,
    /// Typing into the search query.
    Search,
    /// Typing into an edit session's scratch buffers.
    Edit,
}

/// Maps a key event to an application message for the given input mode.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
/// Ctrl+C quits from every mode.
#[must_use]
pub fn map_key_to_message_with_context(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.key, KeyCode::Char('c')).then_some(AppMsg::Quit);
    }

    match context {
        InputContext::Browse => map_browse_key(key.key),
        InputContext::Search => map_search_key(key.key),
        InputContext::Edit => map_edit_key(key.key),
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_browse_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Char('f') => Some(AppMsg::CycleFilter),
        KeyCode::Char('/') => Some(AppMsg::StartSearch),
        KeyCode::Esc => Some(AppMsg::EscapePressed),
        KeyCode::Char('a') => Some(AppMsg::Reclassify(TargetStatus::Accepted)),
        KeyCode::Char('x') => Some(AppMsg::Reclassify(TargetStatus::Rejected)),
        KeyCode::Char('v') => Some(AppMsg::Reclassify(TargetStatus::Review)),
        KeyCode::Char('e') => Some(AppMsg::BeginEdit),
        KeyCode::Char('E') => Some(AppMsg::EnrichAll),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_search_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Enter => Some(AppMsg::EndSearch),
        KeyCode::Esc => Some(AppMsg::EscapePressed),
        KeyCode::Backspace => Some(AppMsg::SearchBackspace),
        KeyCode::Char(character) => Some(AppMsg::SearchInput(character)),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_edit_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Enter => Some(AppMsg::CommitEdit),
        KeyCode::Esc => Some(AppMsg::CancelEdit),
        KeyCode::Tab | KeyCode::BackTab => Some(AppMsg::EditToggleField),
        KeyCode::Backspace => Some(AppMsg::EditBackspace),
        KeyCode::Char(character) => Some(AppMsg::EditInput(character)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use bubbletea_rs::event::KeyMsg;
    use rstest::rstest;

    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[rstest]
    #[case(KeyCode::Char('a'), Some(AppMsg::Reclassify(TargetStatus::Accepted)))]
    #[case(KeyCode::Char('x'), Some(AppMsg::Reclassify(TargetStatus::Rejected)))]
    #[case(KeyCode::Char('v'), Some(AppMsg::Reclassify(TargetStatus::Review)))]
    #[case(KeyCode::Char('e'), Some(AppMsg::BeginEdit))]
    #[case(KeyCode::Char('E'), Some(AppMsg::EnrichAll))]
    #[case(KeyCode::Char('/'), Some(AppMsg::StartSearch))]
    #[case(KeyCode::Down, Some(AppMsg::CursorDown))]
    #[case(KeyCode::Char('z'), None)]
    fn browse_keys_map_to_commands(#[case] code: KeyCode, #[case] expected: Option<AppMsg>) {
        assert_eq!(
            map_key_to_message_with_context(&key(code), InputContext::Browse),
            expected
        );
    }

    #[rstest]
    #[case(KeyCode::Char('q'), Some(AppMsg::SearchInput('q')))]
    #[case(KeyCode::Backspace, Some(AppMsg::SearchBackspace))]
    #[case(KeyCode::Enter, Some(AppMsg::EndSearch))]
    #[case(KeyCode::Esc, Some(AppMsg::EscapePressed))]
    fn search_keys_edit_the_query(#[case] code: KeyCode, #[case] expected: Option<AppMsg>) {
        assert_eq!(
            map_key_to_message_with_context(&key(code), InputContext::Search),
            expected
        );
    }

    #[rstest]
    #[case(KeyCode::Char('a'), Some(AppMsg::EditInput('a')))]
    #[case(KeyCode::Tab, Some(AppMsg::EditToggleField))]
    #[case(KeyCode::Enter, Some(AppMsg::CommitEdit))]
    #[case(KeyCode::Esc, Some(AppMsg::CancelEdit))]
    fn edit_keys_type_into_buffers(#[case] code: KeyCode, #[case] expected: Option<AppMsg>) {
        assert_eq!(
            map_key_to_message_with_context(&key(code), InputContext::Edit),
            expected
        );
    }

    #[rstest]
    fn ctrl_c_quits_in_every_mode(
        #[values(InputContext::Browse, InputContext::Search, InputContext::Edit)]
        context: InputContext,
    ) {
        let ctrl_c = KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert_eq!(
            map_key_to_message_with_context(&ctrl_c, context),
            Some(AppMsg::Quit)
        );
    }
}
