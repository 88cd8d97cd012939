//! Configuration system for the DRAM command scheduler.
//!
//! This module defines the configuration structures used to parameterize a
//! scheduling policy. It provides:
//! 1. **Defaults:** Baseline watermarks, idle-row timeout, and DRAM geometry.
//! 2. **Structures:** `SchedulerConfig`, `DramGeometry`, and `Watermarks`.
//! 3. **Enums:** The scheduling `Policy` variant.
//! 4. **Validation:** Construction-time checks returning `ConfigError`.
//!
//! Configuration is supplied as JSON by the host simulator, or built with
//! `SchedulerConfig::baseline()` / `SchedulerConfig::advanced()`.

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the scheduler.
mod defaults {
    /// Baseline policy: begin draining writes above this many queued writes.
    pub const BASELINE_HI_WM: usize = 40;

    /// Baseline policy: stop draining once the write queue is at or below this.
    pub const BASELINE_LO_WM: usize = 20;

    /// Advanced policy high water mark.
    ///
    /// Higher than the baseline so writes accumulate longer and drains are
    /// fewer but longer; auto-precharge keeps the extra write traffic from
    /// holding rows open.
    pub const ADVANCED_HI_WM: usize = 64;

    /// Advanced policy low water mark.
    pub const ADVANCED_LO_WM: usize = 36;

    /// Cycles an open row may sit without column activity before the idle
    /// reaper may precharge it.
    pub const ROW_IDLE_TIMEOUT: u64 = 72;

    /// Channels per memory system.
    pub const CHANNELS: usize = 1;

    /// Ranks per channel.
    pub const RANKS: usize = 2;

    /// Banks per rank.
    pub const BANKS: usize = 8;
}

/// Scheduling policy variants.
///
/// Both variants share the drain-mode tracker and the row-hit-first,
/// oldest-issuable-fallback selection core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Policy {
    /// Row-hit first, then FCFS. Never issues precharges on its own.
    #[default]
    #[serde(alias = "baseline", alias = "BASELINE")]
    Baseline,
    /// Baseline selection plus auto-precharge after the last pending column
    /// access to a row and idle-row reaping on otherwise empty cycles.
    #[serde(alias = "advanced", alias = "ADVANCED")]
    Advanced,
}

impl Policy {
    /// Returns the drain-mode watermarks this policy uses unless overridden.
    pub const fn default_watermarks(self) -> Watermarks {
        match self {
            Self::Baseline => Watermarks {
                high: defaults::BASELINE_HI_WM,
                low: defaults::BASELINE_LO_WM,
            },
            Self::Advanced => Watermarks {
                high: defaults::ADVANCED_HI_WM,
                low: defaults::ADVANCED_LO_WM,
            },
        }
    }
}

/// Write-queue thresholds controlling drain-mode hysteresis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Watermarks {
    /// Start draining when the write queue holds more than this many entries.
    pub high: usize,
    /// Keep draining while the write queue holds more than this many entries.
    pub low: usize,
}

impl Watermarks {
    /// Creates a watermark pair.
    pub const fn new(high: usize, low: usize) -> Self {
        Self { high, low }
    }
}

/// Shape of the memory system the scheduler is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DramGeometry {
    /// Number of independent channels.
    #[serde(default = "DramGeometry::default_channels")]
    pub channels: usize,

    /// Ranks per channel.
    #[serde(default = "DramGeometry::default_ranks")]
    pub ranks: usize,

    /// Banks per rank.
    #[serde(default = "DramGeometry::default_banks")]
    pub banks: usize,
}

impl DramGeometry {
    /// Creates a geometry description.
    pub const fn new(channels: usize, ranks: usize, banks: usize) -> Self {
        Self {
            channels,
            ranks,
            banks,
        }
    }

    /// Banks per channel (`ranks * banks`).
    pub const fn banks_per_channel(&self) -> usize {
        self.ranks * self.banks
    }

    const fn default_channels() -> usize {
        defaults::CHANNELS
    }

    const fn default_ranks() -> usize {
        defaults::RANKS
    }

    const fn default_banks() -> usize {
        defaults::BANKS
    }
}

impl Default for DramGeometry {
    fn default() -> Self {
        Self::new(defaults::CHANNELS, defaults::RANKS, defaults::BANKS)
    }
}

/// Root scheduler configuration.
///
/// # Examples
///
/// ```
/// use dramsched_core::config::{Policy, SchedulerConfig};
///
/// let json = r#"{
///     "policy": "Advanced",
///     "geometry": { "channels": 2, "ranks": 1, "banks": 8 },
///     "row_idle_timeout": 100
/// }"#;
///
/// let config = SchedulerConfig::from_json(json).unwrap();
/// assert_eq!(config.policy, Policy::Advanced);
/// assert_eq!(config.geometry.channels, 2);
/// assert_eq!(config.effective_watermarks().high, 64);
/// assert_eq!(config.row_idle_timeout, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SchedulerConfig {
    /// Policy variant.
    #[serde(default)]
    pub policy: Policy,

    /// Memory system shape.
    #[serde(default)]
    pub geometry: DramGeometry,

    /// Drain-mode thresholds; `None` selects the policy's defaults.
    #[serde(default)]
    pub watermarks: Option<Watermarks>,

    /// Idle-row timeout in cycles (advanced policy only).
    #[serde(default = "SchedulerConfig::default_row_idle_timeout")]
    pub row_idle_timeout: u64,
}

impl SchedulerConfig {
    /// Returns the default idle-row timeout in cycles.
    const fn default_row_idle_timeout() -> u64 {
        defaults::ROW_IDLE_TIMEOUT
    }

    /// Baseline policy with default geometry and thresholds.
    pub fn baseline() -> Self {
        Self {
            policy: Policy::Baseline,
            ..Self::default()
        }
    }

    /// Advanced policy with default geometry and thresholds.
    pub fn advanced() -> Self {
        Self {
            policy: Policy::Advanced,
            ..Self::default()
        }
    }

    /// Replaces the geometry.
    #[must_use]
    pub const fn with_geometry(mut self, geometry: DramGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Overrides the policy's default watermarks.
    #[must_use]
    pub const fn with_watermarks(mut self, watermarks: Watermarks) -> Self {
        self.watermarks = Some(watermarks);
        self
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON, or any validation
    /// error from [`SchedulerConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Watermarks in effect: the override if present, else the policy default.
    pub fn effective_watermarks(&self) -> Watermarks {
        self.watermarks
            .unwrap_or_else(|| self.policy.default_watermarks())
    }

    /// Checks the configuration for values no scheduler can run with.
    ///
    /// # Errors
    ///
    /// * `EmptyGeometry` if any geometry dimension is zero.
    /// * `Watermarks` if the low water mark is not below the high one.
    /// * `ZeroIdleTimeout` if the advanced policy has a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = [
            ("channels", self.geometry.channels),
            ("ranks", self.geometry.ranks),
            ("banks", self.geometry.banks),
        ];
        if let Some((field, _)) = dims.into_iter().find(|&(_, n)| n == 0) {
            return Err(ConfigError::EmptyGeometry { field });
        }

        let wm = self.effective_watermarks();
        if wm.low >= wm.high {
            return Err(ConfigError::Watermarks {
                high: wm.high,
                low: wm.low,
            });
        }

        if self.policy == Policy::Advanced && self.row_idle_timeout == 0 {
            return Err(ConfigError::ZeroIdleTimeout);
        }
        Ok(())
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            policy: Policy::default(),
            geometry: DramGeometry::default(),
            watermarks: None,
            row_idle_timeout: defaults::ROW_IDLE_TIMEOUT,
        }
    }
}
