//! Row-hit scanner and FCFS fallback.
//!
//! Both policies pick their request here. The candidate queue is searched
//! twice in arrival order:
//! 1. **Row hits:** the first issuable request whose next command is a column access.
//! 2. **Fallback:** failing that, the first issuable request of any kind.
//!
//! The queue itself is never reordered.

use crate::common::{BankId, Direction, Request};
use crate::host::MemorySystem;

/// Outcome of a successful selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Position of the chosen request in its queue.
    pub index: usize,
    /// Whether the choice came from the row-hit pass.
    pub row_hit: bool,
}

/// Picks the request to serve from `queue`, oldest first.
///
/// # Arguments
///
/// * `queue` - Candidate queue in arrival order.
///
/// # Returns
///
/// The chosen position, or `None` if nothing in the queue is issuable.
pub fn select(queue: &[Request]) -> Option<Selection> {
    let hit = queue
        .iter()
        .position(|req| req.issuable && req.is_row_hit())
        .map(|index| Selection {
            index,
            row_hit: true,
        });

    hit.or_else(|| {
        queue
            .iter()
            .position(|req| req.issuable)
            .map(|index| Selection {
                index,
                row_hit: false,
            })
    })
}

/// Returns true if any queued request on `channel` targets `row` of `bank`.
///
/// Both queues are searched. `exclude` names one queue slot to skip, used to
/// ignore the request that was just served.
pub fn row_in_demand(
    mem: &dyn MemorySystem,
    channel: usize,
    bank: BankId,
    row: u64,
    exclude: Option<(Direction, usize)>,
) -> bool {
    Direction::ALL.into_iter().any(|dir| {
        mem.queue(channel, dir)
            .iter()
            .enumerate()
            .any(|(i, req)| exclude != Some((dir, i)) && req.targets_row(bank, row))
    })
}
