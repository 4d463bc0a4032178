//! Backend test support utilities
//!
//! Shared helpers for the backend's unit and integration tests: unified
//! logging initialization and problem-details response assertions.

pub mod problem_details;
pub mod test_logging;
