//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, timer results, and
//! system events.

use crate::review::{RecordId, TargetStatus};

use super::state::{EnrichmentToken, StatusFilter};

/// Messages for the review screen TUI application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one row.
    CursorUp,
    /// Move cursor down one row.
    CursorDown,
    /// Move cursor up one page.
    PageUp,
    /// Move cursor down one page.
    PageDown,
    /// Move cursor to first row.
    Home,
    /// Move cursor to last row.
    End,

    // Filter and search
    /// Apply a status filter.
    SetFilter(StatusFilter),
    /// Reset the status filter and clear the search query.
    ClearFilter,
    /// Advance to the next status filter offered by the variant.
    CycleFilter,
    /// Enter search entry mode.
    StartSearch,
    /// Append a character to the search query.
    SearchInput(char),
    /// Remove the last character of the search query.
    SearchBackspace,
    /// Leave search entry mode, keeping the query.
    EndSearch,

    // Status changes
    /// Reclassify the record under the cursor.
    Reclassify(TargetStatus),
    /// Reclassify a record by identity.
    ReclassifyRecord {
        /// Record to reclassify.
        id: RecordId,
        /// Status to move it to.
        target: TargetStatus,
    },

    // Inline editing
    /// Begin editing the record under the cursor.
    BeginEdit,
    /// Begin editing a record by identity.
    BeginEditRecord(RecordId),
    /// Type a character into the focused scratch buffer.
    EditInput(char),
    /// Delete the last character of the focused scratch buffer.
    EditBackspace,
    /// Move focus between the name and email buffers.
    EditToggleField,
    /// Save the scratch buffers into the record.
    CommitEdit,
    /// Discard the scratch buffers.
    CancelEdit,

    // Enrichment
    /// Start the enrich-all placeholder.
    EnrichAll,
    /// The enrich-all delay for the given run has elapsed.
    EnrichmentComplete(EnrichmentToken),

    // Notifications
    /// Periodic tick that expires notifications.
    NotificationTick,

    // Application lifecycle
    /// Synthetic startup event emitted once after initialisation.
    Initialized,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Escape key; meaning depends on the input mode.
    EscapePressed,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for cursor movement messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::PageUp
                | Self::PageDown
                | Self::Home
                | Self::End
        )
    }

    /// Returns true for filter and search messages.
    #[must_use]
    pub const fn is_filter(&self) -> bool {
        matches!(
            self,
            Self::SetFilter(_)
                | Self::ClearFilter
                | Self::CycleFilter
                | Self::StartSearch
                | Self::SearchInput(_)
                | Self::SearchBackspace
                | Self::EndSearch
        )
    }

    /// Returns true for reclassify messages.
    #[must_use]
    pub const fn is_status(&self) -> bool {
        matches!(self, Self::Reclassify(_) | Self::ReclassifyRecord { .. })
    }

    /// Returns true for inline edit messages.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::BeginEdit
                | Self::BeginEditRecord(_)
                | Self::EditInput(_)
                | Self::EditBackspace
                | Self::EditToggleField
                | Self::CommitEdit
                | Self::CancelEdit
        )
    }

    /// Returns true for enrich-all messages.
    #[must_use]
    pub const fn is_enrichment(&self) -> bool {
        matches!(self, Self::EnrichAll | Self::EnrichmentComplete(_))
    }
}
