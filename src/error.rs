//! Error types surfaced while starting the review screen.
//!
//! Screen operations themselves never fail: lookups that miss are no-ops.
//! Everything in here happens before or around the TUI loop (configuration,
//! seed loading, logging setup, and the terminal program itself).

use thiserror::Error;

use crate::review::RecordId;

/// Errors raised while configuring, seeding, or running the review screen.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TriageError {
    /// Configuration could not be loaded or contained an invalid value.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The seed file was not valid JSON or did not match the record shape.
    #[error("seed file is malformed: {message}")]
    SeedParse {
        /// Parser message describing the malformed input.
        message: String,
    },

    /// Two seeded records share an identity.
    #[error("duplicate record id {id} in seed data")]
    DuplicateRecordId {
        /// The identity that appeared more than once.
        id: RecordId,
    },

    /// The seed file contained no records.
    #[error("seed data contains no records")]
    EmptySeed,

    /// The terminal program failed to start or exited abnormally.
    #[error("TUI error: {message}")]
    Tui {
        /// Error detail reported by the TUI runtime.
        message: String,
    },
}
