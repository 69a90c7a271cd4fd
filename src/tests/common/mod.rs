//! Common Test Utilities
//!
//! Shared portfolio fixtures and navigator helpers used across test modules.

pub mod fixtures;

pub use fixtures::*;
