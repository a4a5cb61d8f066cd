//! The review screen's state and its operations.
//!
//! [`ReviewScreen`] owns the record collection, the filter and query, and
//! the optional edit session. Mutations replace the whole collection with
//! one derived from the old. The filtered set and the groups are computed
//! from the collection on every call and are never stored.

use super::{EditSession, FilterState, Notice, Row, ScreenVariant, Section, StatusFilter};
use crate::review::{Record, RecordId, Status, TargetStatus};

/// State of one review screen instance.
#[derive(Debug, Clone)]
pub struct ReviewScreen {
    records: Vec<Record>,
    filter: FilterState,
    editing: Option<EditSession>,
    variant: ScreenVariant,
}

impl ReviewScreen {
    /// Creates a screen over `records`, keeping their order.
    #[must_use]
    pub fn new(records: Vec<Record>, variant: ScreenVariant) -> Self {
        Self {
            records,
            filter: FilterState::new(),
            editing: None,
            variant,
        }
    }

    /// All records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Looks up a record by identity.
    #[must_use]
    pub fn record(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Active screen variant.
    #[must_use]
    pub const fn variant(&self) -> ScreenVariant {
        self.variant
    }

    /// Active filter and query.
    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Current edit session, if a record is being edited.
    #[must_use]
    pub const fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    /// Mutable access to the current edit session's scratch buffers.
    pub const fn editing_mut(&mut self) -> Option<&mut EditSession> {
        self.editing.as_mut()
    }

    // Filter and search

    /// Selects a status filter. Filters the variant does not offer are
    /// ignored; returns whether the filter was applied.
    pub fn set_filter(&mut self, filter: StatusFilter) -> bool {
        if !self.variant.filter_options().contains(&filter) {
            tracing::trace!("filter {filter:?} not offered by {} screen", self.variant);
            return false;
        }
        self.filter.active_filter = filter;
        true
    }

    /// Advances the status filter to the next option offered by the variant.
    pub fn cycle_filter(&mut self) {
        self.filter.active_filter = self
            .filter
            .active_filter
            .next_in(self.variant.filter_options());
    }

    /// Replaces the search query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    /// Appends a character to the search query.
    pub fn push_query_char(&mut self, character: char) {
        self.filter.query.push(character);
    }

    /// Removes the last character of the search query.
    pub fn pop_query_char(&mut self) {
        let _ = self.filter.query.pop();
    }

    /// Resets the filter to `All` and clears the query.
    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    // Operations

    /// Moves record `id` to `target`, leaving everything else untouched.
    ///
    /// Returns the status notification, or `None` when no record has that
    /// identity (in which case nothing changes). Re-applying the current
    /// status is allowed and still notifies.
    pub fn reclassify(&mut self, id: RecordId, target: TargetStatus) -> Option<Notice> {
        let name = self.record(id)?.name.clone();
        let status = Status::from(target);

        self.records = std::mem::take(&mut self.records)
            .into_iter()
            .map(|record| {
                if record.id == id {
                    Record { status, ..record }
                } else {
                    record
                }
            })
            .collect();

        tracing::debug!("record {id} reclassified as {status:?}");
        Some(self.status_notice(&name, target))
    }

    /// Starts editing record `id`, seeding scratch buffers from it.
    ///
    /// Any session for another record is discarded uncommitted. Returns
    /// false, leaving the current session alone, when `id` is unknown.
    pub fn begin_edit(&mut self, id: RecordId) -> bool {
        let Some(record) = self.record(id) else {
            tracing::trace!("begin_edit ignored: no record {id}");
            return false;
        };

        let session = EditSession::seeded_from(record);
        if let Some(previous) = self.editing.replace(session) {
            tracing::debug!("discarded uncommitted edit of record {}", previous.record_id());
        }
        true
    }

    /// Writes the scratch buffers into the edited record and ends the
    /// session.
    ///
    /// Returns the confirmation notice, or `None` when no session is open.
    /// Buffer contents are not validated.
    pub fn commit_edit(&mut self) -> Option<Notice> {
        let session = self.editing.take()?;
        let id = session.record_id();
        let (name, email) = session.into_buffers();

        self.records = std::mem::take(&mut self.records)
            .into_iter()
            .map(|record| {
                if record.id == id {
                    Record {
                        name: name.clone(),
                        email: email.clone(),
                        ..record
                    }
                } else {
                    record
                }
            })
            .collect();

        tracing::debug!("record {id} edit committed");
        Some(Notice::contact_updated())
    }

    /// Ends the edit session without touching the collection. Returns
    /// false if no session was open.
    pub fn cancel_edit(&mut self) -> bool {
        self.editing
            .take()
            .inspect(|session| tracing::debug!("edit of record {} cancelled", session.record_id()))
            .is_some()
    }

    // Derived views

    /// Records passing the status filter and the search query, in order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Record> {
        let include_message = self.variant.shows_contact_details();
        self.records
            .iter()
            .filter(|record| self.filter.matches(record, include_message))
            .collect()
    }

    /// Rows of the main table: the filtered set without review records and,
    /// outside the classic screen, without decided records.
    #[must_use]
    pub fn pending_for_display(&self) -> Vec<&Record> {
        let actionable_only = self.variant.main_table_is_actionable_only();
        self.filtered()
            .into_iter()
            .filter(|record| match record.status {
                Status::Review => false,
                Status::Accepted | Status::Rejected => !actionable_only,
                Status::Pending => true,
            })
            .collect()
    }

    /// Every record flagged for review, ignoring filter and query.
    #[must_use]
    pub fn review_group(&self) -> Vec<&Record> {
        self.with_status(Status::Review)
    }

    /// Every accepted record, ignoring filter and query. Empty unless the
    /// variant has an accepted section.
    #[must_use]
    pub fn accepted_group(&self) -> Vec<&Record> {
        if !self.variant.has_accepted_section() {
            return Vec::new();
        }
        self.with_status(Status::Accepted)
    }

    /// Selectable rows across all sections, in display order.
    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        let mut rows = section_rows(Section::Applications, &self.pending_for_display());
        rows.extend(section_rows(Section::ForReview, &self.review_group()));
        rows.extend(section_rows(Section::Accepted, &self.accepted_group()));
        rows
    }

    fn with_status(&self, status: Status) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|record| record.status == status)
            .collect()
    }

    fn status_notice(&self, name: &str, target: TargetStatus) -> Notice {
        let phrase = match target {
            TargetStatus::Accepted => "accepted",
            TargetStatus::Rejected => self.variant.rejected_phrase(),
            TargetStatus::Review => "marked for review",
        };
        Notice::new("Status Updated", format!("{name} has been {phrase}"))
    }
}

fn section_rows(section: Section, records: &[&Record]) -> Vec<Row> {
    records
        .iter()
        .map(|record| Row {
            section,
            record_id: record.id,
        })
        .collect()
}

#[cfg(test)]
#[path = "screen_tests.rs"]
mod tests;
