//! Last column-activity timestamps per bank.

use crate::common::BankId;

/// Cycle of the most recent column command to each bank of one channel.
///
/// `None` means no column command has been seen since the last reset.
#[derive(Debug, Clone)]
pub struct ActivityTable {
    banks_per_rank: usize,
    last: Vec<Option<u64>>,
}

impl ActivityTable {
    /// Creates a table for `ranks * banks_per_rank` banks, all marked never-used.
    pub fn new(ranks: usize, banks_per_rank: usize) -> Self {
        Self {
            banks_per_rank,
            last: vec![None; ranks * banks_per_rank],
        }
    }

    #[inline(always)]
    const fn slot(&self, bank: BankId) -> usize {
        bank.rank * self.banks_per_rank + bank.bank
    }

    /// Records a column command to `bank` at `cycle`.
    pub fn record(&mut self, bank: BankId, cycle: u64) {
        let slot = self.slot(bank);
        self.last[slot] = Some(cycle);
    }

    /// Returns the last column-activity cycle of `bank`.
    pub fn last(&self, bank: BankId) -> Option<u64> {
        self.last[self.slot(bank)]
    }

    /// Marks every bank as never-used.
    pub fn reset(&mut self) {
        self.last.fill(None);
    }

    /// Iterates banks in rank-major, bank-minor order with their timestamps.
    pub fn iter(&self) -> impl Iterator<Item = (BankId, Option<u64>)> + '_ {
        let per_rank = self.banks_per_rank;
        self.last
            .iter()
            .enumerate()
            .map(move |(i, &t)| (BankId::new(i / per_rank, i % per_rank), t))
    }
}
