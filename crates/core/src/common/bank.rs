//! Per-bank state as reported by the host's bank state machine.

/// State of one DRAM bank.
///
/// Only `Active` carries an open row. The transient states are reported by
/// some hosts; the scheduler treats them the same as `Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BankState {
    /// Precharged; no row is open.
    #[default]
    Idle,
    /// A row is latched in the row buffer.
    Active {
        /// Index of the open row.
        row: u64,
    },
    /// Precharge in flight.
    Precharging,
    /// Refresh in flight.
    Refreshing,
    /// Rank is powered down.
    PowerDown,
}

impl BankState {
    /// Returns the open row, if the bank is active.
    #[inline(always)]
    pub const fn open_row(self) -> Option<u64> {
        match self {
            Self::Active { row } => Some(row),
            _ => None,
        }
    }

    /// Returns true if a row is open.
    #[inline(always)]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active { .. })
    }
}
