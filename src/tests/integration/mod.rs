//! Integration Tests
//!
//! The portfolio client against a wiremock backend.

mod api_client_tests;
