//! Test suite for the MDD backend
//!
//! This module organizes all tests

pub mod common;
pub mod property;
