//! Write-drain mode tracker.
//!
//! Decides, once per channel per cycle, whether the write queue or the read
//! queue is the candidate pool. Draining starts when the write queue grows
//! past the high water mark (or there are no reads to serve) and continues
//! until the write queue falls to the low water mark.

use crate::common::Direction;
use crate::config::Watermarks;

/// Per-channel drain-mode hysteresis flag.
#[derive(Debug, Clone)]
pub struct DrainModeTracker {
    watermarks: Watermarks,
    draining: bool,
}

impl DrainModeTracker {
    /// Creates a tracker that starts out not draining.
    pub const fn new(watermarks: Watermarks) -> Self {
        Self {
            watermarks,
            draining: false,
        }
    }

    /// Re-derives the drain flag from the current queue lengths.
    ///
    /// # Arguments
    ///
    /// * `read_len` - Read queue length on this channel.
    /// * `write_len` - Write queue length on this channel.
    ///
    /// # Returns
    ///
    /// The new drain flag.
    pub const fn update(&mut self, read_len: usize, write_len: usize) -> bool {
        self.draining = (self.draining && write_len > self.watermarks.low)
            || write_len > self.watermarks.high
            || read_len == 0;
        self.draining
    }

    /// Returns the current drain flag.
    #[inline(always)]
    pub const fn is_draining(&self) -> bool {
        self.draining
    }

    /// Returns the queue to schedule from under the current flag.
    #[inline(always)]
    pub const fn candidate(&self) -> Direction {
        if self.draining {
            Direction::Write
        } else {
            Direction::Read
        }
    }

    /// Returns the thresholds in use.
    pub const fn watermarks(&self) -> Watermarks {
        self.watermarks
    }

    /// Clears the drain flag.
    pub const fn reset(&mut self) {
        self.draining = false;
    }
}
