//! Backend test support utilities
//!
//! Shared by the backend's unit tests and integration test binaries:
//! logging initialization, problem-details assertions and unique test data.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
