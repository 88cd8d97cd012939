//! DRAM address coordinates.
//!
//! This module defines strong types for locating a request inside the DRAM
//! hierarchy. It provides the following:
//! 1. **Bank Identity:** `BankId` names one bank of a channel as `(rank, bank)`.
//! 2. **Decoded Addresses:** `DramAddr` carries the full channel/rank/bank/row/column tuple.
//! 3. **Row Matching:** Helpers for asking whether a request lands on a given open row.

use std::fmt;

/// One bank within a channel, addressed as `(rank, bank)`.
///
/// Ordering is rank-major, bank-minor; this is the order in which banks are
/// scanned when looking for idle rows to close.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BankId {
    /// Rank index within the channel.
    pub rank: usize,
    /// Bank index within the rank.
    pub bank: usize,
}

impl BankId {
    /// Creates a bank identifier.
    ///
    /// # Arguments
    ///
    /// * `rank` - Rank index within the channel.
    /// * `bank` - Bank index within the rank.
    #[inline(always)]
    pub const fn new(rank: usize, bank: usize) -> Self {
        Self { rank, bank }
    }
}

impl fmt::Display for BankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}b{}", self.rank, self.bank)
    }
}

/// A fully decoded DRAM address.
///
/// The host's address mapper produces these; the scheduler only compares
/// them, it never decodes physical addresses itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct DramAddr {
    /// Channel index.
    pub channel: usize,
    /// Rank index within the channel.
    pub rank: usize,
    /// Bank index within the rank.
    pub bank: usize,
    /// Row index within the bank.
    pub row: u64,
    /// Column index within the row.
    pub column: u64,
}

impl DramAddr {
    /// Creates a decoded address from its coordinates.
    #[inline(always)]
    pub const fn new(channel: usize, rank: usize, bank: usize, row: u64, column: u64) -> Self {
        Self {
            channel,
            rank,
            bank,
            row,
            column,
        }
    }

    /// Returns the `(rank, bank)` pair this address maps to.
    #[inline(always)]
    pub const fn bank_id(&self) -> BankId {
        BankId::new(self.rank, self.bank)
    }

    /// Returns true if this address falls on `row` of `bank`.
    ///
    /// The channel is not compared; callers only ever look inside a single
    /// channel's queues.
    #[inline]
    pub fn targets_row(&self, bank: BankId, row: u64) -> bool {
        self.bank_id() == bank && self.row == row
    }
}

impl fmt::Display for DramAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ch{}:r{}b{}:row{:#x}:col{:#x}",
            self.channel, self.rank, self.bank, self.row, self.column
        )
    }
}
