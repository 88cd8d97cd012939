//! Common types shared by the scheduling policies and the host interface.
//!
//! This module provides the vocabulary every other module speaks. It includes:
//! 1. **Address Types:** Decoded DRAM coordinates and bank identifiers.
//! 2. **Commands:** DRAM command kinds and request directions.
//! 3. **Requests:** The queue-resident request view exposed by the host.
//! 4. **Bank State:** Idle/active state with the open row.
//! 5. **Error Handling:** Configuration errors.

/// DRAM address and bank identifier types.
pub mod addr;

/// Per-bank state reported by the host.
pub mod bank;

/// Command kinds and request directions.
pub mod command;

/// Construction-time error types.
pub mod error;

/// Queue-resident request view.
pub mod request;

pub use addr::{BankId, DramAddr};
pub use bank::BankState;
pub use command::{CommandKind, Direction};
pub use error::ConfigError;
pub use request::Request;
