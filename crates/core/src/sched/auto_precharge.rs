//! Auto-precharge advisor.
//!
//! After a column command, the row it touched is closed straight away if no
//! other queued request on the channel still wants that row. The demand check
//! has to see the queues as they were when the request was selected, while
//! the legality check can only pass once the column command is on the bus,
//! so the advisor works in two steps around the issue call:
//! 1. [`AutoPrechargeAdvisor::observe`] before issuing, against the snapshot.
//! 2. [`AutoPrechargeAdvisor::apply`] after issuing, against the oracle.

use tracing::trace;

use super::select::row_in_demand;
use crate::common::{BankId, Direction, Request};
use crate::host::MemorySystem;

/// Auto-precharge decision for one column command about to issue.
#[derive(Debug, Clone, Copy)]
pub struct AutoPrechargeAdvisor {
    bank: BankId,
    row: u64,
    row_in_demand: bool,
}

impl AutoPrechargeAdvisor {
    /// Captures the row-demand state for the request at `index` of the
    /// `direction` queue, before it is issued.
    ///
    /// # Returns
    ///
    /// `None` if `req` is not a column command; only column commands can
    /// carry an auto-precharge.
    pub fn observe(
        mem: &dyn MemorySystem,
        channel: usize,
        direction: Direction,
        index: usize,
        req: &Request,
    ) -> Option<Self> {
        if !req.is_row_hit() {
            return None;
        }
        let bank = req.addr.bank_id();
        let row = req.addr.row;
        Some(Self {
            bank,
            row,
            row_in_demand: row_in_demand(mem, channel, bank, row, Some((direction, index))),
        })
    }

    /// Bank the column command targeted.
    pub const fn bank(&self) -> BankId {
        self.bank
    }

    /// Attaches an auto-precharge if the row is no longer wanted and the
    /// oracle allows it. Must be called after the column command was issued.
    ///
    /// # Returns
    ///
    /// True if an auto-precharge was issued.
    pub fn apply(self, mem: &mut dyn MemorySystem, channel: usize) -> bool {
        if self.row_in_demand || !mem.oracle().is_autoprecharge_allowed(channel, self.bank) {
            return false;
        }
        mem.issue_autoprecharge(channel, self.bank);
        trace!(
            channel,
            bank = %self.bank,
            row = self.row,
            cycle = mem.current_cycle(),
            "auto-precharge"
        );
        true
    }
}
