//! Construction-time error types.
//!
//! Scheduling itself never fails: "nothing issuable" is a normal outcome and
//! index or queue consistency is the host's contract. Errors therefore only
//! arise while parsing and validating a `SchedulerConfig`.

use thiserror::Error;

/// Errors raised while loading or validating a scheduler configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The drain-mode watermarks do not form a hysteresis band.
    #[error("write drain low water mark ({low}) must be below the high water mark ({high})")]
    Watermarks {
        /// Configured high water mark.
        high: usize,
        /// Configured low water mark.
        low: usize,
    },

    /// A geometry dimension is zero.
    #[error("DRAM geometry field `{field}` must be non-zero")]
    EmptyGeometry {
        /// Name of the offending field.
        field: &'static str,
    },

    /// The advanced policy was configured with a zero row-idle timeout.
    #[error("row idle timeout must be at least one cycle for the advanced policy")]
    ZeroIdleTimeout,

    /// The JSON document could not be deserialized.
    #[error("invalid scheduler config: {0}")]
    Parse(#[from] serde_json::Error),
}
