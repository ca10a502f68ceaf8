//! Shared bootstrap for the crate's own unit tests.
