//! API integration tests
//!
//! Integration tests for all API endpoints

mod auth_test;
mod content_test;
