//! Crate-level test suites.
//!
//! - `common`: portfolio fixtures shared by the suites
//! - `property`: proptest invariants of the pagination engine
//! - `unit`: rstest scenario tables for navigation and book layout
//! - `integration`: the HTTP client against a wiremock backend

mod common;
mod integration;
mod property;
mod unit;
