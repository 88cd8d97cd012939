use dramsched_core::config::SchedulerConfig;
use dramsched_core::sched::{Decision, Scheduler, build_scheduler};
use tracing_subscriber::EnvFilter;

use crate::common::mocks::host::FakeHost;

/// Installs a test log subscriber once; set `RUST_LOG=dramsched_core=trace`
/// to see scheduling decisions.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A scheduler and the fake host it drives.
pub struct TestContext {
    pub sched: Box<dyn Scheduler>,
    pub host: FakeHost,
}

impl TestContext {
    pub fn new(config: &SchedulerConfig, host: FakeHost) -> Self {
        init_tracing();
        assert_eq!(
            host.read.len(),
            config.geometry.channels,
            "fake host and scheduler config disagree on channel count"
        );
        let mut sched = match build_scheduler(config) {
            Ok(sched) => sched,
            Err(e) => panic!("test config rejected: {e}"),
        };
        sched.init();
        Self { sched, host }
    }

    pub fn baseline(host: FakeHost) -> Self {
        Self::new(&SchedulerConfig::baseline(), host)
    }

    pub fn advanced(host: FakeHost) -> Self {
        Self::new(&SchedulerConfig::advanced(), host)
    }

    /// Schedules `channel` on the current cycle without advancing time.
    pub fn step(&mut self, channel: usize) -> Decision {
        self.sched.schedule(channel, &mut self.host)
    }

    /// Schedules every channel, then advances the cycle counter.
    pub fn cycle(&mut self) -> Vec<Decision> {
        let channels = self.host.read.len();
        let decisions = (0..channels)
            .map(|ch| self.sched.schedule(ch, &mut self.host))
            .collect();
        self.host.tick();
        decisions
    }

    /// Runs `n` full cycles and returns every decision made.
    pub fn run(&mut self, n: usize) -> Vec<Decision> {
        (0..n).flat_map(|_| self.cycle()).collect()
    }
}
