//! DRAM timing legality oracle.
//!
//! The host owns every timing parameter and the per-bank command history.
//! The scheduler never reasons about timing itself; it asks the oracle
//! whether a command would be legal on the current cycle.

use crate::common::BankId;

/// Capability set answering "may this command issue now?".
///
/// Bank-scoped checks take a `BankId`; rank-scoped checks take the rank
/// index. All checks are evaluated against the host's current cycle.
pub trait LegalityOracle {
    /// Returns true if a precharge to `bank` is legal this cycle.
    fn is_precharge_allowed(&self, channel: usize, bank: BankId) -> bool;

    /// Returns true if a precharge-all to `rank` is legal this cycle.
    fn is_all_bank_precharge_allowed(&self, channel: usize, rank: usize) -> bool;

    /// Returns true if an auto-precharge may be attached to the column
    /// command issued to `bank` this cycle.
    ///
    /// Hosts only approve this after a column command to the same bank has
    /// been issued on the current cycle.
    fn is_autoprecharge_allowed(&self, channel: usize, bank: BankId) -> bool;

    /// Returns true if `rank` may enter fast-exit power-down.
    fn is_powerdown_fast_allowed(&self, channel: usize, rank: usize) -> bool;

    /// Returns true if `rank` may enter slow-exit power-down.
    fn is_powerdown_slow_allowed(&self, channel: usize, rank: usize) -> bool;

    /// Returns true if `rank` may leave power-down.
    fn is_powerup_allowed(&self, channel: usize, rank: usize) -> bool;

    /// Returns true if `rank` may be refreshed.
    fn is_refresh_allowed(&self, channel: usize, rank: usize) -> bool;

    /// Returns true if a row may be activated in `bank`.
    fn is_activate_allowed(&self, channel: usize, bank: BankId) -> bool;
}
