//! Application records and their classification.

use serde::{Deserialize, Serialize};

/// Identity of a record. Unique within a collection and never reassigned.
pub type RecordId = u64;

/// Classification of an application.
///
/// Every record starts out `Pending`. Any status can move to any of the
/// three [`TargetStatus`] values; nothing moves back to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Awaiting a decision.
    #[default]
    Pending,
    /// Accepted into the programme.
    Accepted,
    /// Rejected (shown as "junk" in the classic screen).
    Rejected,
    /// Flagged for manual follow-up.
    Review,
}

impl Status {
    /// Returns the capitalised badge text shown in tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::Review => "Review",
        }
    }
}

/// A status that `reclassify` may move a record into.
///
/// `Pending` is deliberately absent: it is only ever an initial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetStatus {
    /// Move to [`Status::Accepted`].
    Accepted,
    /// Move to [`Status::Rejected`].
    Rejected,
    /// Move to [`Status::Review`].
    Review,
}

impl From<TargetStatus> for Status {
    fn from(target: TargetStatus) -> Self {
        match target {
            TargetStatus::Accepted => Self::Accepted,
            TargetStatus::Rejected => Self::Rejected,
            TargetStatus::Review => Self::Review,
        }
    }
}

/// One application under review.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    /// Unique identity.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Phone number (classic screen only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Free-text message left by the applicant (classic screen only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Current classification.
    #[serde(default)]
    pub status: Status,
}

impl Record {
    /// Creates a pending record with no phone or message.
    #[must_use]
    pub fn new(id: RecordId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Returns the record with the given phone number.
    #[must_use]
    pub fn with_phone(self, phone: impl Into<String>) -> Self {
        Self {
            phone: Some(phone.into()),
            ..self
        }
    }

    /// Returns the record with the given applicant message.
    #[must_use]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..self
        }
    }

    /// Returns the record with the given status.
    #[must_use]
    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Returns true if the lowercase `needle` occurs in the name or email,
    /// or in the message when `include_message` is set.
    ///
    /// The needle must already be lowercased; an empty needle matches every
    /// record.
    #[must_use]
    pub fn contains_text(&self, needle: &str, include_message: bool) -> bool {
        if needle.is_empty() {
            return true;
        }

        let in_field = |field: &str| field.to_lowercase().contains(needle);

        in_field(&self.name)
            || in_field(&self.email)
            || (include_message && self.message.as_deref().is_some_and(in_field))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn jane() -> Record {
        Record::new(2, "Jane Smith", "jane@example.com")
            .with_message("Please let me join your platform")
    }

    #[rstest]
    #[case::name("jane", false, true)]
    #[case::email("example.com", false, true)]
    #[case::message_ignored("platform", false, false)]
    #[case::message_included("platform", true, true)]
    #[case::miss("mike", true, false)]
    #[case::empty("", false, true)]
    fn contains_text_checks_permitted_fields(
        #[case] needle: &str,
        #[case] include_message: bool,
        #[case] expected: bool,
    ) {
        assert_eq!(jane().contains_text(needle, include_message), expected);
    }

    #[test]
    fn contains_text_lowercases_fields() {
        let record = Record::new(1, "JOHN DOE", "John@Example.com");
        assert!(record.contains_text("john doe", false));
        assert!(record.contains_text("john@example", false));
    }

    #[test]
    fn new_records_start_pending() {
        assert_eq!(jane().status, Status::Pending);
    }

    #[rstest]
    #[case(TargetStatus::Accepted, Status::Accepted)]
    #[case(TargetStatus::Rejected, Status::Rejected)]
    #[case(TargetStatus::Review, Status::Review)]
    fn target_status_maps_to_status(#[case] target: TargetStatus, #[case] expected: Status) {
        assert_eq!(Status::from(target), expected);
    }

    #[test]
    fn status_deserialises_from_lowercase() {
        let status: Status = serde_json::from_str("\"review\"").expect("valid status");
        assert_eq!(status, Status::Review);
        assert!(serde_json::from_str::<Status>("\"archived\"").is_err());
    }
}
