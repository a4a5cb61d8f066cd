//! Triage library crate providing a terminal review screen for incoming
//! applications.
//!
//! Applications arrive as pending [`Record`]s. The review screen lets an
//! operator filter and search them, reclassify each one as accepted,
//! rejected, or flagged for review, edit contact details inline, and
//! trigger a placeholder enrichment run over accepted contacts. All state
//! lives in memory for the lifetime of the process.

pub mod config;
pub mod error;
pub mod logging;
pub mod review;
pub mod tui;

pub use config::TriageConfig;
pub use error::TriageError;
pub use review::{Record, RecordId, Status, TargetStatus};
pub use tui::ReviewApp;
