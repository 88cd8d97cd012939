//! Drain-Mode Tests.
//!
//! Exercises write-drain hysteresis through running schedulers: entry above
//! the high water mark, persistence down to the low water mark, the
//! empty-read-queue override, and per-channel independence.

use dramsched_core::common::Direction;
use dramsched_core::config::{DramGeometry, SchedulerConfig};
use dramsched_core::sched::Decision;
use rstest::rstest;

use crate::common::builder::request::{RequestBuilder, blocked_writes, read_hit, write_hit};
use crate::common::harness::TestContext;
use crate::common::mocks::host::FakeHost;

fn blocked_reads(n: usize) -> Vec<dramsched_core::common::Request> {
    (0..n as u64)
        .map(|i| RequestBuilder::new(500 + i).read().at(0, 3, i).miss().blocked().build())
        .collect()
}

fn set_write_len(ctx: &mut TestContext, len: usize) {
    ctx.host.write[0] = blocked_writes(1000, len);
}

/// Baseline: wq=41, rq=5, not draining → draining, write queue is the pool.
#[test]
fn baseline_enters_drain_above_high_mark() {
    let mut writes = blocked_writes(100, 40);
    writes.push(write_hit(200, 0, 1, 0x10));
    let reads = (0..5).map(|i| read_hit(i, 0, 0, 0x20)).collect();
    let host = FakeHost::new(1).with_reads(0, reads).with_writes(0, writes);
    let mut ctx = TestContext::baseline(host);
    assert!(!ctx.sched.is_draining(0));

    let decision = ctx.step(0);
    assert!(ctx.sched.is_draining(0));
    match decision {
        Decision::Issued {
            direction, request, ..
        } => {
            assert_eq!(direction, Direction::Write);
            assert_eq!(request.id, 200);
        }
        other => panic!("expected a write to issue, got {other:?}"),
    }
}

#[test]
fn baseline_at_high_mark_does_not_drain() {
    let host = FakeHost::new(1)
        .with_reads(0, vec![read_hit(0, 0, 0, 1)])
        .with_writes(0, blocked_writes(100, 40));
    let mut ctx = TestContext::baseline(host);
    let decision = ctx.step(0);
    assert!(!ctx.sched.is_draining(0));
    assert!(matches!(
        decision,
        Decision::Issued {
            direction: Direction::Read,
            ..
        }
    ));
}

#[rstest]
#[case::baseline(false, 40, 20)]
#[case::advanced(true, 64, 36)]
fn hysteresis_holds_between_marks(#[case] advanced: bool, #[case] high: usize, #[case] low: usize) {
    let host = FakeHost::new(1).with_reads(0, blocked_reads(3));
    let mut ctx = if advanced {
        TestContext::advanced(host)
    } else {
        TestContext::baseline(host)
    };

    set_write_len(&mut ctx, high + 1);
    let _ = ctx.step(0);
    assert!(ctx.sched.is_draining(0), "above high mark");

    // Oscillate inside the band: stays draining.
    for len in [high, low + 1, high - 1, low + 5, low + 1] {
        set_write_len(&mut ctx, len);
        let _ = ctx.step(0);
        assert!(ctx.sched.is_draining(0), "len {len} inside band");
    }

    set_write_len(&mut ctx, low);
    let _ = ctx.step(0);
    assert!(!ctx.sched.is_draining(0), "at low mark");

    // Re-entering the band from below does not restart draining.
    for len in [low + 1, high] {
        set_write_len(&mut ctx, len);
        let _ = ctx.step(0);
        assert!(!ctx.sched.is_draining(0), "len {len} from below");
    }
}

#[test]
fn empty_read_queue_forces_drain() {
    let host = FakeHost::new(1).with_writes(0, vec![write_hit(0, 0, 0, 1)]);
    let mut ctx = TestContext::baseline(host);
    let decision = ctx.step(0);
    assert!(ctx.sched.is_draining(0));
    assert!(matches!(
        decision,
        Decision::Issued {
            direction: Direction::Write,
            ..
        }
    ));
}

#[test]
fn drain_ends_when_reads_return_and_writes_are_low() {
    let host = FakeHost::new(1).with_writes(0, blocked_writes(0, 3));
    let mut ctx = TestContext::baseline(host);
    let _ = ctx.step(0);
    assert!(ctx.sched.is_draining(0));

    ctx.host.push(read_hit(99, 0, 0, 1));
    let decision = ctx.step(0);
    assert!(!ctx.sched.is_draining(0));
    assert!(matches!(decision, Decision::Issued { request, .. } if request.id == 99));
}

#[test]
fn channels_drain_independently() {
    let host = FakeHost::new(2)
        .with_reads(0, blocked_reads(2))
        .with_reads(1, vec![RequestBuilder::new(7).channel(1).hit().build()])
        .with_writes(0, blocked_writes(0, 41));
    let config = SchedulerConfig::baseline().with_geometry(DramGeometry::new(2, 2, 8));
    let mut ctx = TestContext::new(&config, host);
    let _ = ctx.cycle();
    assert!(ctx.sched.is_draining(0));
    assert!(!ctx.sched.is_draining(1));
}

#[test]
fn init_clears_drain_flags() {
    let host = FakeHost::new(2)
        .with_writes(0, blocked_writes(0, 50))
        .with_writes(1, blocked_writes(100, 50));
    let config = SchedulerConfig::advanced().with_geometry(DramGeometry::new(2, 2, 8));
    let mut ctx = TestContext::new(&config, host);
    let _ = ctx.cycle();
    assert!(ctx.sched.is_draining(0));
    assert!(ctx.sched.is_draining(1));

    ctx.sched.init();
    assert!(!ctx.sched.is_draining(0));
    assert!(!ctx.sched.is_draining(1));
}

#[test]
fn drain_episodes_counted_once_per_entry() {
    let host = FakeHost::new(1).with_reads(0, blocked_reads(1));
    let mut ctx = TestContext::baseline(host);
    for len in [41, 30, 25, 20, 45, 10] {
        set_write_len(&mut ctx, len);
        let _ = ctx.step(0);
    }
    assert_eq!(ctx.sched.stats().drain_episodes, 2);
    assert_eq!(ctx.sched.stats().drain_cycles, 4);
}
