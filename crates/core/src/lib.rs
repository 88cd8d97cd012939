//! DRAM channel command scheduling library.
//!
//! This crate implements the per-cycle command scheduling policy of a DRAM
//! memory controller simulator. It provides:
//! 1. **Host interface:** The `MemorySystem` view of queues, bank state, and command ports,
//!    and the `LegalityOracle` timing checks.
//! 2. **Scheduling:** Write-drain hysteresis, row-hit-first selection with FCFS fallback,
//!    auto-precharge, and idle-row reaping.
//! 3. **Policies:** A baseline and an advanced `Scheduler`, built from a `SchedulerConfig`.
//! 4. **Statistics:** Per-run decision counters.
//!
//! The host owns the request queues, the bank state machine, timing, and the
//! cycle loop; a scheduler only decides which single command to issue.

/// Common types (addresses, commands, requests, bank state, errors).
pub mod common;
/// Scheduler configuration (policy, geometry, watermarks, idle timeout).
pub mod config;
/// Host simulator interface (memory system view and legality oracle).
pub mod host;
/// Scheduling policies and their building blocks.
pub mod sched;
/// Scheduler statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `SchedulerConfig::baseline()` or deserialize from JSON.
pub use crate::config::SchedulerConfig;
/// Host-side traits a simulator implements to drive a scheduler.
pub use crate::host::{LegalityOracle, MemorySystem};
/// Scheduler trait, per-cycle decision, and the config-driven factory.
pub use crate::sched::{Decision, Scheduler, build_scheduler};
