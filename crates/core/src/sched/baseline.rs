//! Baseline scheduling policy.
//!
//! Row-hit first, then FCFS, out of whichever queue drain mode selects. The
//! policy never issues precharge, refresh, or power commands of its own.

use tracing::info;

use super::{Decision, DrainModeTracker, Scheduler, issue, pick, update_drain};
use crate::config::{DramGeometry, Watermarks};
use crate::host::MemorySystem;
use crate::stats::SchedulerStats;

/// Row-hit-first, FCFS-fallback scheduler.
#[derive(Debug, Clone)]
pub struct BaselineScheduler {
    drain: Vec<DrainModeTracker>,
    stats: SchedulerStats,
}

impl BaselineScheduler {
    /// Creates a baseline scheduler for `geometry.channels` channels.
    ///
    /// # Arguments
    ///
    /// * `geometry` - Memory system shape; only the channel count is used.
    /// * `watermarks` - Drain-mode thresholds.
    pub fn new(geometry: DramGeometry, watermarks: Watermarks) -> Self {
        Self {
            drain: vec![DrainModeTracker::new(watermarks); geometry.channels],
            stats: SchedulerStats::default(),
        }
    }
}

impl Scheduler for BaselineScheduler {
    fn name(&self) -> &'static str {
        "baseline"
    }

    fn init(&mut self) {
        self.drain.iter_mut().for_each(DrainModeTracker::reset);
        self.stats.reset();
        if let Some(t) = self.drain.first() {
            let wm = t.watermarks();
            info!(
                policy = self.name(),
                channels = self.drain.len(),
                hi_wm = wm.high,
                lo_wm = wm.low,
                "scheduler initialised"
            );
        }
    }

    fn schedule(&mut self, channel: usize, mem: &mut dyn MemorySystem) -> Decision {
        self.stats.cycles_scheduled += 1;
        let direction = update_drain(&mut self.drain[channel], mem, channel, &mut self.stats);

        let Some((sel, request)) = pick(mem, channel, direction) else {
            self.stats.idle_cycles += 1;
            return Decision::Idle;
        };
        issue(mem, channel, direction, sel, &request, &mut self.stats);

        Decision::Issued {
            direction,
            index: sel.index,
            request,
            row_hit: sel.row_hit,
            auto_precharge: false,
        }
    }

    fn is_draining(&self, channel: usize) -> bool {
        self.drain[channel].is_draining()
    }

    fn stats(&self) -> &SchedulerStats {
        &self.stats
    }
}
