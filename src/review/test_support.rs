//! Record builders shared by unit and behavioural tests.

use super::{Record, RecordId, Status};

/// Builds a pending record named `Applicant <id>` with a matching address.
#[must_use]
pub fn applicant(id: RecordId) -> Record {
    Record::new(id, format!("Applicant {id}"), format!("applicant{id}@example.com"))
}

/// Builds `count` pending applicants with sequential ids starting from 1.
#[must_use]
pub fn pending_applicants(count: usize) -> Vec<Record> {
    (1..=count as RecordId).map(applicant).collect()
}

/// Builds an applicant already in the given status.
#[must_use]
pub fn applicant_with_status(id: RecordId, status: Status) -> Record {
    applicant(id).with_status(status)
}
