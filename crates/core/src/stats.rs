//! Scheduler statistics collection and reporting.
//!
//! This module tracks what a scheduling policy did over a run. It provides:
//! 1. **Issue mix:** Commands issued from the row-hit pass versus the FCFS fallback, by direction.
//! 2. **Row management:** Auto-precharges attached and idle rows reaped.
//! 3. **Drain mode:** Drain episodes started and cycles spent draining.
//! 4. **Idle cycles:** Cycles on which the channel issued nothing.
//!
//! Counters are aggregated over every channel a scheduler drives. They are
//! reporting only; no decision reads them.

/// Counters describing a scheduler's decisions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchedulerStats {
    /// Channel-cycles on which `schedule` ran.
    pub cycles_scheduled: u64,

    /// Requests issued from the row-hit pass.
    pub row_hits_issued: u64,
    /// Requests issued from the oldest-issuable fallback pass.
    pub fallbacks_issued: u64,
    /// Requests issued from the read queue.
    pub reads_issued: u64,
    /// Requests issued from the write queue.
    pub writes_issued: u64,

    /// Auto-precharges attached to column commands.
    pub auto_precharges: u64,
    /// Standalone precharges issued by the idle-row reaper.
    pub idle_precharges: u64,
    /// Channel-cycles with no command issued at all.
    pub idle_cycles: u64,

    /// Number of times drain mode switched on.
    pub drain_episodes: u64,
    /// Channel-cycles spent in drain mode.
    pub drain_cycles: u64,
}

impl SchedulerStats {
    /// Requests issued from either queue.
    pub const fn requests_issued(&self) -> u64 {
        self.reads_issued + self.writes_issued
    }

    /// Fraction of issued requests that came from the row-hit pass.
    ///
    /// Returns `0.0` when nothing was issued.
    pub fn row_hit_rate(&self) -> f64 {
        let total = self.requests_issued();
        if total == 0 {
            0.0
        } else {
            self.row_hits_issued as f64 / total as f64
        }
    }

    /// Clears every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Prints the statistics to stdout under the heading `policy`.
    pub fn print(&self, policy: &str) {
        let cyc = self.cycles_scheduled.max(1) as f64;
        let pct = |n: u64| (n as f64 / cyc) * 100.0;

        println!("\n==========================================================");
        println!("DRAM SCHEDULER STATISTICS ({policy})");
        println!("==========================================================");
        println!("sched_cycles             {}", self.cycles_scheduled);
        println!("sched_issued             {}", self.requests_issued());
        println!("sched_row_hit_rate       {:.2}%", self.row_hit_rate() * 100.0);
        println!("----------------------------------------------------------");
        println!("ISSUE MIX");
        println!("  issue.row_hit          {}", self.row_hits_issued);
        println!("  issue.fallback         {}", self.fallbacks_issued);
        println!("  issue.read             {}", self.reads_issued);
        println!("  issue.write            {}", self.writes_issued);
        println!("----------------------------------------------------------");
        println!("ROW MANAGEMENT");
        println!("  pre.auto               {}", self.auto_precharges);
        println!("  pre.idle_reap          {}", self.idle_precharges);
        println!(
            "  cycles.idle            {} ({:.2}%)",
            self.idle_cycles,
            pct(self.idle_cycles)
        );
        println!("----------------------------------------------------------");
        println!("WRITE DRAIN");
        println!("  drain.episodes         {}", self.drain_episodes);
        println!(
            "  drain.cycles           {} ({:.2}%)",
            self.drain_cycles,
            pct(self.drain_cycles)
        );
        println!("==========================================================");
    }
}
