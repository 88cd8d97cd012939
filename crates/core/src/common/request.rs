//! Queue-resident memory requests.

use super::addr::{BankId, DramAddr};
use super::command::{CommandKind, Direction};

/// A pending memory request as seen by the scheduler.
///
/// Arrival order is the request's position in its queue; `arrival_cycle` is
/// carried for trace output only and never consulted for ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Request {
    /// Host-assigned identifier.
    pub id: u64,
    /// Decoded target address.
    pub addr: DramAddr,
    /// Read or write.
    pub direction: Direction,
    /// Next command the access sequence needs.
    pub next_command: CommandKind,
    /// Whether `next_command` is legal this cycle, as computed by the host.
    pub issuable: bool,
    /// Cycle at which the request entered its queue.
    pub arrival_cycle: u64,
}

impl Request {
    /// Returns true if the next command is a column access on the open row.
    #[inline(always)]
    pub const fn is_row_hit(&self) -> bool {
        self.next_command.is_column()
    }

    /// Returns true if this request targets `row` of `bank`.
    #[inline]
    pub fn targets_row(&self, bank: BankId, row: u64) -> bool {
        self.addr.targets_row(bank, row)
    }
}
