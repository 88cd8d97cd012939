//! Idle-row reaper.
//!
//! On a cycle where nothing else could issue, closes one row that has been
//! open without column activity for longer than the timeout and that no
//! queued request wants. Banks are scanned rank-major, bank-minor; the first
//! one that qualifies is precharged and the scan stops.

use tracing::trace;

use super::activity::ActivityTable;
use super::select::row_in_demand;
use crate::common::BankId;
use crate::host::MemorySystem;

/// Precharges rows left open past a timeout.
#[derive(Debug, Clone, Copy)]
pub struct IdleRowReaper {
    timeout: u64,
}

impl IdleRowReaper {
    /// Creates a reaper closing rows idle for more than `timeout` cycles.
    pub const fn new(timeout: u64) -> Self {
        Self { timeout }
    }

    /// Returns the idle timeout in cycles.
    pub const fn timeout(&self) -> u64 {
        self.timeout
    }

    /// Finds the first bank eligible for an idle precharge.
    ///
    /// A bank qualifies if it is active, has a recorded column activity more
    /// than `timeout` cycles ago, no queued request targets its open row, and
    /// the oracle allows a precharge.
    ///
    /// # Returns
    ///
    /// The bank and its open row, or `None`.
    pub fn find(
        &self,
        mem: &dyn MemorySystem,
        channel: usize,
        activity: &ActivityTable,
    ) -> Option<(BankId, u64)> {
        let now = mem.current_cycle();
        activity.iter().find_map(|(bank, last)| {
            let row = mem.bank_state(channel, bank).open_row()?;
            let idle = now.saturating_sub(last?);
            let eligible = idle > self.timeout
                && !row_in_demand(mem, channel, bank, row, None)
                && mem.oracle().is_precharge_allowed(channel, bank);
            eligible.then_some((bank, row))
        })
    }

    /// Issues at most one idle precharge on `channel`.
    ///
    /// # Returns
    ///
    /// The precharged bank and the row it closed, if any.
    pub fn reap(
        &self,
        mem: &mut dyn MemorySystem,
        channel: usize,
        activity: &ActivityTable,
    ) -> Option<(BankId, u64)> {
        let (bank, row) = self.find(mem, channel, activity)?;
        mem.issue_precharge(channel, bank);
        trace!(
            channel,
            bank = %bank,
            row,
            cycle = mem.current_cycle(),
            "idle row precharge"
        );
        Some((bank, row))
    }
}
