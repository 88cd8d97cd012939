//! Scheduler Statistics Tests.
//!
//! Verifies derived rates, reset, and that the counters track decisions
//! made by a real scheduler run.

use dramsched_core::stats::SchedulerStats;

use crate::common::builder::request::{read_hit, read_miss};
use crate::common::harness::TestContext;
use crate::common::mocks::host::FakeHost;

#[test]
fn row_hit_rate_zero_when_nothing_issued() {
    let stats = SchedulerStats::default();
    assert_eq!(stats.requests_issued(), 0);
    assert!(stats.row_hit_rate().abs() < f64::EPSILON);
}

#[test]
fn row_hit_rate_fraction() {
    let stats = SchedulerStats {
        row_hits_issued: 3,
        fallbacks_issued: 1,
        reads_issued: 2,
        writes_issued: 2,
        ..SchedulerStats::default()
    };
    assert_eq!(stats.requests_issued(), 4);
    assert!((stats.row_hit_rate() - 0.75).abs() < 1e-9);
}

#[test]
fn reset_clears_all_counters() {
    let mut stats = SchedulerStats {
        cycles_scheduled: 10,
        drain_episodes: 2,
        idle_precharges: 1,
        ..SchedulerStats::default()
    };
    stats.reset();
    assert_eq!(stats, SchedulerStats::default());
}

#[test]
fn print_does_not_panic_on_empty_stats() {
    SchedulerStats::default().print("baseline");
}

#[test]
fn counters_follow_decisions() {
    let host = FakeHost::new(1).with_reads(0, vec![read_miss(1, 0, 0, 5), read_hit(2, 0, 1, 9)]);
    let mut ctx = TestContext::baseline(host);

    // Cycle 0: hit (id 2). Cycle 1: fallback activate (id 1).
    // Cycle 2: id 1 is now a hit. Cycle 3: queue empty, drain forced, idle.
    let _ = ctx.run(4);

    let stats = ctx.sched.stats();
    assert_eq!(stats.cycles_scheduled, 4);
    assert_eq!(stats.row_hits_issued, 2);
    assert_eq!(stats.fallbacks_issued, 1);
    assert_eq!(stats.reads_issued, 3);
    assert_eq!(stats.writes_issued, 0);
    assert_eq!(stats.idle_cycles, 1);
    assert_eq!(stats.drain_episodes, 1);
    assert_eq!(stats.drain_cycles, 1);
    ctx.sched.report();
}

#[test]
fn init_resets_counters() {
    let host = FakeHost::new(1).with_reads(0, vec![read_hit(1, 0, 0, 1)]);
    let mut ctx = TestContext::baseline(host);
    let _ = ctx.run(2);
    assert!(ctx.sched.stats().cycles_scheduled > 0);

    ctx.sched.init();
    assert_eq!(*ctx.sched.stats(), SchedulerStats::default());
}
