//! DRAM command and request direction types.
//!
//! These types classify what a pending request needs next and which queue it
//! lives in. They are used for the following:
//! 1. **Row-Hit Detection:** A request whose next command is a column access targets an open row.
//! 2. **Queue Selection:** Drain mode picks between the read and write queues by `Direction`.
//! 3. **Statistics Tracking:** Issued commands are counted by direction and kind.

use std::fmt;

/// Direction of a memory request; also names the queue it waits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Read request, held in the read queue.
    Read,
    /// Write request, held in the write queue.
    Write,
}

impl Direction {
    /// Both directions, reads first.
    pub const ALL: [Self; 2] = [Self::Read, Self::Write];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}

/// Kind of DRAM command.
///
/// For queue-resident requests this is the *next* command the access
/// sequence needs; the host advances it as the sequence progresses
/// (activate, then column read or write).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Open a row into the bank's row buffer.
    Activate,
    /// Column read from the open row.
    ColRead,
    /// Column write into the open row.
    ColWrite,
    /// Close the open row of one bank.
    Precharge,
    /// Close the open rows of every bank in a rank.
    PrechargeAll,
    /// Refresh a rank.
    Refresh,
    /// Enter power-down with fast exit.
    PowerDownFast,
    /// Enter power-down with slow exit.
    PowerDownSlow,
    /// Leave power-down.
    PowerUp,
    /// No operation.
    Nop,
}

impl CommandKind {
    /// Returns true for column commands, i.e. accesses that hit the open row.
    #[inline(always)]
    pub const fn is_column(self) -> bool {
        matches!(self, Self::ColRead | Self::ColWrite)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Activate => "ACT",
            Self::ColRead => "COL_RD",
            Self::ColWrite => "COL_WR",
            Self::Precharge => "PRE",
            Self::PrechargeAll => "PRE_ALL",
            Self::Refresh => "REF",
            Self::PowerDownFast => "PDN_F",
            Self::PowerDownSlow => "PDN_S",
            Self::PowerUp => "PUP",
            Self::Nop => "NOP",
        };
        f.write_str(name)
    }
}
