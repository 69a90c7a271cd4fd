//! Unit Tests
//!
//! Scenario tables (rstest) for the navigation state machine and the book
//! layout built on top of it.

mod book_scenarios;
