//! Seed data for the review screen.
//!
//! The screen starts from a fixed literal set of six pending applications.
//! Operators can point `seed_file` at a JSON array instead; the file is read
//! once at startup and never written back.

use std::collections::HashSet;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use super::{Record, RecordId};
use crate::error::TriageError;

/// Returns the built-in seed set: six pending applications.
#[must_use]
pub fn default_records() -> Vec<Record> {
    [
        (1, "John Doe", "john@example.com", "555-1234", "Interested in joining the app"),
        (2, "Jane Smith", "jane@example.com", "555-5678", "Please let me join your platform"),
        (3, "Mike Johnson", "mike@example.com", "555-9012", "Looking forward to testing the app"),
        (4, "Sarah Williams", "sarah@example.com", "555-3456", "Heard great things about your platform"),
        (5, "Dave Brown", "dave@example.com", "555-7890", "Hope to join your community soon"),
        (6, "Emma Davis", "emma@example.com", "555-2345", "Excited to contribute to your app"),
    ]
    .into_iter()
    .map(|(id, name, email, phone, message)| {
        Record::new(id, name, email)
            .with_phone(phone)
            .with_message(message)
    })
    .collect()
}

/// Verifies that no two records share an identity.
///
/// # Errors
///
/// Returns [`TriageError::DuplicateRecordId`] naming the first repeated id.
pub fn ensure_unique_ids(records: &[Record]) -> Result<(), TriageError> {
    let mut seen: HashSet<RecordId> = HashSet::with_capacity(records.len());
    match records.iter().find(|record| !seen.insert(record.id)) {
        Some(duplicate) => Err(TriageError::DuplicateRecordId { id: duplicate.id }),
        None => Ok(()),
    }
}

/// Parses a JSON array of records and validates the result.
///
/// # Errors
///
/// Returns [`TriageError::SeedParse`] for malformed JSON,
/// [`TriageError::EmptySeed`] for an empty array, or
/// [`TriageError::DuplicateRecordId`] when identities repeat.
pub fn parse_records(json: &str) -> Result<Vec<Record>, TriageError> {
    let records: Vec<Record> =
        serde_json::from_str(json).map_err(|error| TriageError::SeedParse {
            message: error.to_string(),
        })?;

    if records.is_empty() {
        return Err(TriageError::EmptySeed);
    }
    ensure_unique_ids(&records)?;
    Ok(records)
}

/// Reads and parses a JSON seed file.
///
/// # Errors
///
/// Returns [`TriageError::Io`] when the file cannot be read, or any error
/// from [`parse_records`].
pub fn load_records(path: &Utf8Path) -> Result<Vec<Record>, TriageError> {
    let file_name = path.file_name().ok_or_else(|| TriageError::Io {
        message: format!("seed path '{path}' has no file name"),
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| {
        TriageError::Io {
            message: format!("failed to open seed directory '{parent}': {error}"),
        }
    })?;
    let contents = dir
        .read_to_string(file_name)
        .map_err(|error| TriageError::Io {
            message: format!("failed to read seed file '{path}': {error}"),
        })?;

    tracing::debug!("loaded seed file '{path}' ({} bytes)", contents.len());
    parse_records(&contents)
}
