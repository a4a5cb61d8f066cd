//! Domain types for applications under review.
//!
//! A [`Record`] is one application (a contact-like entry) and its
//! classification [`Status`]. Records are seeded once at startup, either
//! from the built-in literal set or from a JSON seed file, and are never
//! created or deleted afterwards.

mod record;
mod seed;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use record::{Record, RecordId, Status, TargetStatus};
pub use seed::{default_records, ensure_unique_ids, load_records, parse_records};
