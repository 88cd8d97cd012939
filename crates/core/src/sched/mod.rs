//! DRAM command scheduling policies.
//!
//! This module contains the pluggable scheduler interface and its two
//! implementations. Per channel and per cycle a scheduler:
//! 1. **Drain mode:** Re-derives whether writes or reads are the candidate pool.
//! 2. **Selection:** Picks the oldest issuable row hit, else the oldest issuable request.
//! 3. **Issue:** Issues at most one primary command.
//! 4. **Row management (advanced):** Attaches auto-precharges and reaps idle rows.

/// Last column-activity timestamps.
pub mod activity;

/// Auto-precharge after the last pending column access to a row.
pub mod auto_precharge;

/// Advanced policy (auto-precharge and idle-row reaping).
pub mod advanced;

/// Baseline policy (row-hit first, then FCFS).
pub mod baseline;

/// Write-drain hysteresis.
pub mod drain;

/// Idle-row precharge.
pub mod idle_reaper;

/// Row-hit scanner and FCFS fallback.
pub mod select;

pub use self::activity::ActivityTable;
pub use self::advanced::AdvancedScheduler;
pub use self::auto_precharge::AutoPrechargeAdvisor;
pub use self::baseline::BaselineScheduler;
pub use self::drain::DrainModeTracker;
pub use self::idle_reaper::IdleRowReaper;
pub use self::select::{Selection, row_in_demand, select};

use std::fmt;

use tracing::{debug, trace};

use crate::common::{BankId, ConfigError, Direction, Request};
use crate::config::{Policy, SchedulerConfig};
use crate::host::MemorySystem;
use crate::stats::SchedulerStats;

/// What a scheduler did on one channel in one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// A queued request's next command was issued.
    Issued {
        /// Queue the request came from.
        direction: Direction,
        /// Position of the request in that queue at selection time.
        index: usize,
        /// The request as it was when selected.
        request: Request,
        /// Whether it was chosen by the row-hit pass.
        row_hit: bool,
        /// Whether an auto-precharge was attached to it.
        auto_precharge: bool,
    },
    /// No request was issuable; an idle open row was precharged instead.
    IdlePrecharge {
        /// Bank that was precharged.
        bank: BankId,
        /// Row that was closed.
        row: u64,
    },
    /// Nothing was issued.
    Idle,
}

impl Decision {
    /// Returns true if nothing was issued.
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Number of primary command slots used. An attached auto-precharge
    /// rides on its column command and is not counted.
    pub const fn primary_commands(&self) -> usize {
        match self {
            Self::Idle => 0,
            Self::Issued { .. } | Self::IdlePrecharge { .. } => 1,
        }
    }
}

/// A per-cycle DRAM command scheduling policy.
///
/// The host calls [`Scheduler::init`] once, [`Scheduler::schedule`] once per
/// channel per cycle, and [`Scheduler::report`] at the end of the run.
pub trait Scheduler: Send + fmt::Debug {
    /// Short policy name.
    fn name(&self) -> &'static str;

    /// Resets all per-channel bookkeeping and statistics.
    fn init(&mut self);

    /// Makes this cycle's decision for `channel` and issues it through `mem`.
    fn schedule(&mut self, channel: usize, mem: &mut dyn MemorySystem) -> Decision;

    /// Returns the drain flag computed for `channel` on its last cycle.
    fn is_draining(&self, channel: usize) -> bool;

    /// Returns the statistics gathered since the last `init`.
    fn stats(&self) -> &SchedulerStats;

    /// End-of-run statistics hook.
    fn report(&self) {
        self.stats().print(self.name());
    }
}

/// Builds the scheduler selected by `config`.
///
/// # Errors
///
/// Returns any error from [`SchedulerConfig::validate`].
pub fn build_scheduler(config: &SchedulerConfig) -> Result<Box<dyn Scheduler>, ConfigError> {
    config.validate()?;
    let watermarks = config.effective_watermarks();
    let sched: Box<dyn Scheduler> = match config.policy {
        Policy::Baseline => Box::new(BaselineScheduler::new(config.geometry, watermarks)),
        Policy::Advanced => Box::new(AdvancedScheduler::new(
            config.geometry,
            watermarks,
            config.row_idle_timeout,
        )),
    };
    Ok(sched)
}

/// Re-derives the drain flag for `channel` and returns the candidate queue.
fn update_drain(
    tracker: &mut DrainModeTracker,
    mem: &dyn MemorySystem,
    channel: usize,
    stats: &mut SchedulerStats,
) -> Direction {
    let was = tracker.is_draining();
    let read_len = mem.queue_len(channel, Direction::Read);
    let write_len = mem.queue_len(channel, Direction::Write);
    let now = tracker.update(read_len, write_len);

    if now {
        stats.drain_cycles += 1;
    }
    match (was, now) {
        (false, true) => {
            stats.drain_episodes += 1;
            debug!(channel, read_len, write_len, "write drain started");
        }
        (true, false) => debug!(channel, read_len, write_len, "write drain ended"),
        _ => {}
    }
    tracker.candidate()
}

/// Runs selection on the `direction` queue of `channel`.
fn pick(mem: &dyn MemorySystem, channel: usize, direction: Direction) -> Option<(Selection, Request)> {
    let queue = mem.queue(channel, direction);
    let sel = select(queue)?;
    Some((sel, queue[sel.index]))
}

/// Issues a selected request and accounts for it.
fn issue(
    mem: &mut dyn MemorySystem,
    channel: usize,
    direction: Direction,
    sel: Selection,
    req: &Request,
    stats: &mut SchedulerStats,
) {
    mem.issue_request_command(channel, direction, sel.index);

    if sel.row_hit {
        stats.row_hits_issued += 1;
    } else {
        stats.fallbacks_issued += 1;
    }
    match direction {
        Direction::Read => stats.reads_issued += 1,
        Direction::Write => stats.writes_issued += 1,
    }
    trace!(
        channel,
        %direction,
        command = %req.next_command,
        addr = %req.addr,
        id = req.id,
        row_hit = sel.row_hit,
        cycle = mem.current_cycle(),
        "issue"
    );
}
