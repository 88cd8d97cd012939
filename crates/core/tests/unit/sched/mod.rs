//! Unit tests for the scheduling building blocks and both policies.




/// Drain-mode hysteresis as seen through a running scheduler.
pub mod drain;
