//! CLI operation handlers.
//!
//! - [`review_tui`]: Interactive review screen

pub mod review_tui;
