//! Status filter and search query for the review screen.
//!
//! The filter narrows the main table by status; the query narrows it by a
//! case-insensitive substring match on the searchable fields. Neither
//! affects the review or accepted sections.

use crate::review::{Record, Status};

/// Status filter offered by the selector.
///
/// Which options are available depends on the
/// [`ScreenVariant`](super::ScreenVariant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Show every status.
    #[default]
    All,
    /// Show only pending records.
    Pending,
    /// Show only accepted records.
    Accepted,
    /// Show only rejected records.
    Rejected,
}

impl StatusFilter {
    /// Returns a human-readable label for display in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Applications",
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }

    /// Returns true if a record with `status` passes this filter.
    #[must_use]
    pub const fn matches(self, status: Status) -> bool {
        match self {
            Self::All => true,
            Self::Pending => matches!(status, Status::Pending),
            Self::Accepted => matches!(status, Status::Accepted),
            Self::Rejected => matches!(status, Status::Rejected),
        }
    }

    /// Returns the option after this one in `options`, wrapping around.
    ///
    /// A filter that is not among `options` resets to the first option.
    #[must_use]
    pub fn next_in(self, options: &[Self]) -> Self {
        let first = options.first().copied().unwrap_or_default();
        options
            .iter()
            .position(|option| *option == self)
            .and_then(|index| options.get(index.saturating_add(1)))
            .copied()
            .unwrap_or(first)
    }
}

/// Active filter plus the free-text search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Currently selected status filter.
    pub active_filter: StatusFilter,
    /// Search text as typed by the operator.
    pub query: String,
}

impl FilterState {
    /// Creates a filter state showing everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `record` passes both the status filter and the query.
    ///
    /// `include_message` extends the query match to the applicant message.
    #[must_use]
    pub fn matches(&self, record: &Record, include_message: bool) -> bool {
        self.active_filter.matches(record.status)
            && record.contains_text(&self.query.to_lowercase(), include_message)
    }

    /// Returns true if neither a filter nor a query is active.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.active_filter == StatusFilter::All && self.query.is_empty()
    }

    /// Resets to `All` with an empty query.
    pub fn clear(&mut self) {
        self.active_filter = StatusFilter::All;
        self.query.clear();
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::review::Record;

    fn record(status: Status) -> Record {
        Record::new(1, "John Doe", "john@example.com")
            .with_message("Interested in joining the app")
            .with_status(status)
    }

    #[rstest]
    #[case(StatusFilter::All, Status::Review, true)]
    #[case(StatusFilter::Pending, Status::Pending, true)]
    #[case(StatusFilter::Pending, Status::Accepted, false)]
    #[case(StatusFilter::Accepted, Status::Accepted, true)]
    #[case(StatusFilter::Rejected, Status::Review, false)]
    fn status_filter_matches_status(
        #[case] filter: StatusFilter,
        #[case] status: Status,
        #[case] expected: bool,
    ) {
        assert_eq!(filter.matches(status), expected);
    }

    #[test]
    fn filter_state_requires_both_conditions() {
        let state = FilterState {
            active_filter: StatusFilter::Pending,
            query: "JOHN".to_owned(),
        };

        assert!(state.matches(&record(Status::Pending), false));
        assert!(!state.matches(&record(Status::Accepted), false));

        let miss = FilterState {
            query: "emma".to_owned(),
            ..state
        };
        assert!(!miss.matches(&record(Status::Pending), false));
    }

    #[test]
    fn query_searches_message_only_when_enabled() {
        let state = FilterState {
            active_filter: StatusFilter::All,
            query: "joining".to_owned(),
        };

        assert!(!state.matches(&record(Status::Pending), false));
        assert!(state.matches(&record(Status::Pending), true));
    }

    #[test]
    fn next_in_cycles_and_wraps() {
        let options = [StatusFilter::All, StatusFilter::Pending];

        assert_eq!(StatusFilter::All.next_in(&options), StatusFilter::Pending);
        assert_eq!(StatusFilter::Pending.next_in(&options), StatusFilter::All);
        assert_eq!(StatusFilter::Rejected.next_in(&options), StatusFilter::All);
    }

    #[test]
    fn clear_resets_filter_and_query() {
        let mut state = FilterState {
            active_filter: StatusFilter::Rejected,
            query: "dave".to_owned(),
        };
        assert!(!state.is_clear());

        state.clear();

        assert!(state.is_clear());
    }

    #[test]
    fn filter_label_is_human_readable() {
        assert_eq!(StatusFilter::All.label(), "All Applications");
        assert_eq!(StatusFilter::Pending.label(), "Pending");
    }
}
