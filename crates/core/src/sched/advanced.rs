//! Advanced scheduling policy.
//!
//! Shares the drain tracker and two-pass selection with the baseline policy
//! and adds row management:
//! 1. **Auto-precharge:** After a column command, close the row if nothing else queued wants it.
//! 2. **Idle-row reaping:** On a cycle with nothing issuable, precharge one row
//!    that has been open without column activity for longer than the timeout.

use tracing::info;

use super::{
    ActivityTable, AutoPrechargeAdvisor, Decision, DrainModeTracker, IdleRowReaper, Scheduler,
    issue, pick, update_drain,
};
use crate::config::{DramGeometry, Watermarks};
use crate::host::MemorySystem;
use crate::stats::SchedulerStats;

/// Bookkeeping owned by one channel.
#[derive(Debug, Clone)]
struct ChannelState {
    drain: DrainModeTracker,
    activity: ActivityTable,
}

/// Scheduler with auto-precharge and idle-row timeout.
#[derive(Debug, Clone)]
pub struct AdvancedScheduler {
    channels: Vec<ChannelState>,
    reaper: IdleRowReaper,
    stats: SchedulerStats,
}

impl AdvancedScheduler {
    /// Creates an advanced scheduler.
    ///
    /// # Arguments
    ///
    /// * `geometry` - Memory system shape; sizes the per-bank activity tables.
    /// * `watermarks` - Drain-mode thresholds.
    /// * `row_idle_timeout` - Cycles a row may stay open unused before it can be reaped.
    pub fn new(geometry: DramGeometry, watermarks: Watermarks, row_idle_timeout: u64) -> Self {
        let state = ChannelState {
            drain: DrainModeTracker::new(watermarks),
            activity: ActivityTable::new(geometry.ranks, geometry.banks),
        };
        Self {
            channels: vec![state; geometry.channels],
            reaper: IdleRowReaper::new(row_idle_timeout),
            stats: SchedulerStats::default(),
        }
    }

    /// Returns the column-activity table of `channel`.
    pub fn activity(&self, channel: usize) -> &ActivityTable {
        &self.channels[channel].activity
    }
}

impl Scheduler for AdvancedScheduler {
    fn name(&self) -> &'static str {
        "advanced"
    }

    fn init(&mut self) {
        for ch in &mut self.channels {
            ch.drain.reset();
            ch.activity.reset();
        }
        self.stats.reset();
        if let Some(ch) = self.channels.first() {
            let wm = ch.drain.watermarks();
            info!(
                policy = self.name(),
                channels = self.channels.len(),
                hi_wm = wm.high,
                lo_wm = wm.low,
                row_idle_timeout = self.reaper.timeout(),
                "scheduler initialised"
            );
        }
    }

    fn schedule(&mut self, channel: usize, mem: &mut dyn MemorySystem) -> Decision {
        self.stats.cycles_scheduled += 1;
        let state = &mut self.channels[channel];
        let direction = update_drain(&mut state.drain, mem, channel, &mut self.stats);

        let Some((sel, request)) = pick(mem, channel, direction) else {
            return match self.reaper.reap(mem, channel, &state.activity) {
                Some((bank, row)) => {
                    self.stats.idle_precharges += 1;
                    Decision::IdlePrecharge { bank, row }
                }
                None => {
                    self.stats.idle_cycles += 1;
                    Decision::Idle
                }
            };
        };

        let advisor = AutoPrechargeAdvisor::observe(mem, channel, direction, sel.index, &request);
        issue(mem, channel, direction, sel, &request, &mut self.stats);

        let mut auto_precharge = false;
        if let Some(adv) = advisor {
            state.activity.record(adv.bank(), mem.current_cycle());
            auto_precharge = adv.apply(mem, channel);
        }
        if auto_precharge {
            self.stats.auto_precharges += 1;
        }

        Decision::Issued {
            direction,
            index: sel.index,
            request,
            row_hit: sel.row_hit,
            auto_precharge,
        }
    }

    fn is_draining(&self, channel: usize) -> bool {
        self.channels[channel].drain.is_draining()
    }

    fn stats(&self) -> &SchedulerStats {
        &self.stats
    }
}
