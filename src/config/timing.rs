//! Move timing configuration.

use serde::Deserialize;

/// Durations used when building commands and waiting for servos to settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TimingConfig {
    /// Duration sent with each command unless a move overrides it.
    #[serde(default = "default_duration_ms")]
    pub default_duration_ms: u32,

    /// Duration of each step of the cold-start sequence.
    #[serde(default = "default_init_duration_ms")]
    pub init_duration_ms: u32,

    /// Extra wait after the longest command of a batch.
    #[serde(default = "default_settle_margin_ms")]
    pub settle_margin_ms: u32,
}

fn default_duration_ms() -> u32 {
    1500
}

fn default_init_duration_ms() -> u32 {
    100
}

fn default_settle_margin_ms() -> u32 {
    500
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: default_duration_ms(),
            init_duration_ms: default_init_duration_ms(),
            settle_margin_ms: default_settle_margin_ms(),
        }
    }
}

impl TimingConfig {
    /// Total time to block after sending a batch whose longest command lasts
    /// `settle_ms`.
    #[inline]
    pub fn wait_ms(&self, settle_ms: u32) -> u32 {
        settle_ms.saturating_add(self.settle_margin_ms)
    }
}
