//! Backend test support utilities
//!
//! This crate provides utilities specifically for backend testing, including
//! unified logging initialization and unique test-data helpers.

pub mod logging;
pub mod unique_helpers;
