//! Serial port transport (std only).

use std::io::Write;
use std::time::Duration;

use crate::config::PortConfig;
use crate::error::{bounded, TransportError};

use super::Transport;

/// Opens the serial device for each frame and closes it afterwards.
#[derive(Debug, Clone)]
pub struct SerialTransport {
    path: String,
    baud_rate: u32,
    timeout: Duration,
}

impl SerialTransport {
    /// Create a transport for a device path and line speed.
    pub fn new(path: &str, baud_rate: u32) -> Self {
        Self {
            path: path.to_owned(),
            baud_rate,
            timeout: Duration::from_millis(1000),
        }
    }

    /// Create a transport from port settings.
    pub fn from_config(config: &PortConfig) -> Self {
        Self::new(config.path.as_str(), config.baud_rate)
            .with_timeout(Duration::from_millis(config.timeout_ms as u64))
    }

    /// Set the write timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Device path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Line speed.
    pub fn baud_rate(&self) -> u32 {
        self.baud_rate
    }
}

impl Transport for SerialTransport {
    fn send(&mut self, frame: &[u8]) -> Result<(), TransportError> {
        let mut port = serialport::new(&self.path, self.baud_rate)
            .timeout(self.timeout)
            .open()
            .map_err(|e| {
                log::error!("failed to open {}: {}", self.path, e);
                TransportError::Open(bounded(&format!("{}: {}", self.path, e)))
            })?;

        log::trace!("opened {} at {} baud", self.path, self.baud_rate);

        port.write_all(frame)
            .and_then(|_| port.flush())
            .map_err(|e| {
                log::error!("failed to write to {}: {}", self.path, e);
                TransportError::Write(bounded(&e.to_string()))
            })
        // Port closes on drop.
    }
}
