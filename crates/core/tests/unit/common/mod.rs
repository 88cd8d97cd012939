//! Unit tests for the shared scheduling vocabulary.

/// Bank identifiers and decoded addresses.
pub mod addr;
