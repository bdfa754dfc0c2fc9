//! Serial port settings.

use heapless::String;
use serde::Deserialize;

/// Where and how fast to talk to the servo controller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PortConfig {
    /// Device path (max 64 chars).
    #[serde(default = "default_path")]
    pub path: String<64>,

    /// Fixed line speed.
    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,

    /// Write timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u32,
}

fn default_path() -> String<64> {
    String::try_from("/dev/ttyACM0").unwrap_or_default()
}

fn default_baud_rate() -> u32 {
    9600
}

fn default_timeout_ms() -> u32 {
    1000
}

impl Default for PortConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            baud_rate: default_baud_rate(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl PortConfig {
    /// Port settings for a device path, with default speed and timeout.
    pub fn new(path: &str) -> Self {
        Self {
            path: String::try_from(path).unwrap_or_default(),
            ..Self::default()
        }
    }
}
