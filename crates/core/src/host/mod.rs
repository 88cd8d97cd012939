//! Host simulator interface.
//!
//! The scheduler is a policy plugged into a larger memory controller model.
//! This module defines what it needs from that model:
//! 1. **State:** Ordered read/write queues, bank states, and the cycle counter.
//! 2. **Legality:** A `LegalityOracle` answering timing questions.
//! 3. **Actions:** Side-effecting issue calls for queue commands and precharges.
//!
//! One `MemorySystem` is passed into every scheduling call. A call must see a
//! consistent snapshot: the host may not mutate queues or bank state while a
//! decision is in progress, other than through the issue actions below.

/// Timing legality checks.
pub mod oracle;

pub use oracle::LegalityOracle;

use crate::common::{BankId, BankState, Direction, Request};

/// View of, and command port into, the host's memory controller.
pub trait MemorySystem {
    /// Returns the global simulation cycle.
    fn current_cycle(&self) -> u64;

    /// Returns the queue of `direction` on `channel`, oldest first.
    fn queue(&self, channel: usize, direction: Direction) -> &[Request];

    /// Returns the length counter of the queue of `direction` on `channel`.
    ///
    /// Defaults to the length of [`MemorySystem::queue`]; hosts that keep a
    /// separate counter may override it.
    fn queue_len(&self, channel: usize, direction: Direction) -> usize {
        self.queue(channel, direction).len()
    }

    /// Returns the state of `bank` on `channel`.
    fn bank_state(&self, channel: usize, bank: BankId) -> BankState;

    /// Returns the timing legality oracle.
    fn oracle(&self) -> &dyn LegalityOracle;

    /// Issues the next command of the request at `index` in the queue of
    /// `direction`. The host applies the resulting bank and queue updates.
    fn issue_request_command(&mut self, channel: usize, direction: Direction, index: usize);

    /// Issues a standalone precharge to `bank`.
    fn issue_precharge(&mut self, channel: usize, bank: BankId);

    /// Attaches an auto-precharge to the column command just issued to `bank`.
    fn issue_autoprecharge(&mut self, channel: usize, bank: BankId);
}
