//! Display sections, rows, and the actions each row offers.

use super::ScreenVariant;
use crate::review::{RecordId, Status, TargetStatus};

/// Section of the screen a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Main table: the filtered, still-actionable records.
    Applications,
    /// Records flagged for review, independent of filter and search.
    ForReview,
    /// Accepted contacts (enrichment variant), independent of filter and
    /// search.
    Accepted,
}

impl Section {
    /// Heading shown above the section's table.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Applications => "Applications",
            Self::ForReview => "Applications To Be Reviewed",
            Self::Accepted => "Accepted Contacts",
        }
    }
}

/// One selectable row: a record shown in a particular section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    /// Section containing the row.
    pub section: Section,
    /// Record displayed by the row.
    pub record_id: RecordId,
}

/// A per-row action control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Reclassify to accepted.
    Accept,
    /// Reclassify to rejected.
    Reject,
    /// Reclassify to review.
    Review,
    /// Begin inline editing.
    Edit,
}

impl RowAction {
    /// Key that triggers the action.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Accept => 'a',
            Self::Reject => 'x',
            Self::Review => 'v',
            Self::Edit => 'e',
        }
    }

    /// Button label for the action.
    #[must_use]
    pub const fn label(self, variant: ScreenVariant) -> &'static str {
        match self {
            Self::Accept => "Accept",
            Self::Reject => variant.reject_label(),
            Self::Review => "Review",
            Self::Edit => "Edit",
        }
    }

    /// Status targeted by a reclassify action; `None` for edit.
    #[must_use]
    pub const fn target(self) -> Option<TargetStatus> {
        match self {
            Self::Accept => Some(TargetStatus::Accepted),
            Self::Reject => Some(TargetStatus::Rejected),
            Self::Review => Some(TargetStatus::Review),
            Self::Edit => None,
        }
    }

    /// Action that reclassifies to `target`.
    #[must_use]
    pub const fn for_target(target: TargetStatus) -> Self {
        match target {
            TargetStatus::Accepted => Self::Accept,
            TargetStatus::Rejected => Self::Reject,
            TargetStatus::Review => Self::Review,
        }
    }
}

/// Actions offered for a record with `status` shown in `section`.
///
/// An action whose target equals the current status is hidden. Review rows
/// only offer accept and reject. Edit is offered outside the review section
/// when the variant supports it.
#[must_use]
pub fn available_actions(section: Section, status: Status, variant: ScreenVariant) -> Vec<RowAction> {
    let candidates: &[RowAction] = match section {
        Section::ForReview => &[RowAction::Accept, RowAction::Reject],
        Section::Applications | Section::Accepted => {
            &[RowAction::Accept, RowAction::Reject, RowAction::Review]
        }
    };

    let mut actions: Vec<RowAction> = candidates
        .iter()
        .copied()
        .filter(|action| {
            action
                .target()
                .is_some_and(|target| Status::from(target) != status)
        })
        .collect();

    if variant.supports_editing() && section != Section::ForReview {
        actions.push(RowAction::Edit);
    }
    actions
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Status::Pending, &[RowAction::Accept, RowAction::Reject, RowAction::Review])]
    #[case(Status::Accepted, &[RowAction::Reject, RowAction::Review])]
    #[case(Status::Rejected, &[RowAction::Accept, RowAction::Review])]
    fn main_rows_hide_current_status(#[case] status: Status, #[case] expected: &[RowAction]) {
        let actions = available_actions(Section::Applications, status, ScreenVariant::Classic);
        assert_eq!(actions, expected);
    }

    #[test]
    fn review_rows_offer_accept_and_reject_only() {
        let actions = available_actions(Section::ForReview, Status::Review, ScreenVariant::Enrichment);
        assert_eq!(actions, vec![RowAction::Accept, RowAction::Reject]);
    }

    #[test]
    fn enrichment_rows_offer_edit() {
        let actions =
            available_actions(Section::Accepted, Status::Accepted, ScreenVariant::Enrichment);
        assert_eq!(
            actions,
            vec![RowAction::Reject, RowAction::Review, RowAction::Edit]
        );
    }

    #[test]
    fn reject_label_follows_variant() {
        assert_eq!(RowAction::Reject.label(ScreenVariant::Classic), "Junk");
        assert_eq!(RowAction::Reject.label(ScreenVariant::Streamlined), "Reject");
    }

    #[test]
    fn for_target_inverts_target() {
        for action in [RowAction::Accept, RowAction::Reject, RowAction::Review] {
            let target = action.target().expect("reclassify action");
            assert_eq!(RowAction::for_target(target), action);
        }
    }
}
