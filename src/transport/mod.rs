//! Byte transport to the servo controller.
//!
//! The controller has no acknowledgement or handshake, so a transport only
//! reports whether the frame could be handed to the device.

#[cfg(feature = "std")]
mod delay;
#[cfg(feature = "std")]
mod memory;
#[cfg(feature = "std")]
mod serial;

#[cfg(feature = "std")]
pub use delay::StdDelay;
#[cfg(feature = "std")]
pub use memory::MemoryTransport;
#[cfg(feature = "std")]
pub use serial::SerialTransport;

use crate::error::TransportError;

/// Sends one complete frame to the controller.
///
/// Implementations must not retry; a failure is reported once and the caller
/// decides what to do.
pub trait Transport {
    /// Send a frame, already terminated with CR LF.
    ///
    /// # Errors
    ///
    /// Returns an error if the device cannot be opened or written.
    fn send(&mut self, frame: &[u8]) -> Result<(), TransportError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send(&mut self, frame: &[u8]) -> Result<(), TransportError> {
        (**self).send(frame)
    }
}
