//! Terminal User Interface for reviewing applications.
//!
//! This module provides an interactive TUI for filtering, searching, and
//! reclassifying applications using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::ReviewApp`], wrapping the
//!   [`state::ReviewScreen`] state machine
//! - **View**: Rendering logic in `app::rendering` and [`components`]
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Screen, filter, edit, and notification state
//! - [`components`]: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, we use a module-level storage pattern for initial data. Call
//! [`set_initial_records`] and [`set_screen_settings`] before starting the
//! program, and `ReviewApp::init()` will retrieve them.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
mod screen_settings;
pub mod state;
mod storage;

pub use app::ReviewApp;
pub(crate) use screen_settings::get_screen_settings;
pub use screen_settings::{DEFAULT_ENRICH_DELAY, ScreenSettings, set_screen_settings};
pub(crate) use storage::{get_initial_records, get_initial_terminal_size};
pub use storage::set_initial_records;
