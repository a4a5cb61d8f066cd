//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Variant, duration, and path resolution tests
//! - `loading`: Environment, CLI, and seed file loading tests

mod helpers;
