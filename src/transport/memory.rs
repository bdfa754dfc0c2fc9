//! In-memory transport (std only).

use crate::error::TransportError;

use super::Transport;

/// Records every frame instead of sending it.
///
/// Useful for dry runs and for inspecting exactly what would reach the wire.
#[derive(Debug, Clone, Default)]
pub struct MemoryTransport {
    frames: Vec<Vec<u8>>,
}

impl MemoryTransport {
    /// Create an empty transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames sent so far, oldest first.
    pub fn frames(&self) -> &[Vec<u8>] {
        &self.frames
    }

    /// Most recent frame.
    pub fn last_frame(&self) -> Option<&[u8]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// Frames as text, lossily decoded.
    pub fn frames_as_text(&self) -> Vec<String> {
        self.frames
            .iter()
            .map(|f| String::from_utf8_lossy(f).into_owned())
            .collect()
    }

    /// Forget recorded frames.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl Transport for MemoryTransport {
    fn send(&mut self, frame: &[u8]) -> Result<(), TransportError> {
        self.frames.push(frame.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_frames() {
        let mut transport = MemoryTransport::new();
        transport.send(b"#3P1250T100\r\n").unwrap();
        transport.send(b"#2P1326T100\r\n").unwrap();

        assert_eq!(transport.frames().len(), 2);
        assert_eq!(transport.last_frame(), Some(&b"#2P1326T100\r\n"[..]));
        assert_eq!(transport.frames_as_text()[0], "#3P1250T100\r\n");

        transport.clear();
        assert!(transport.frames().is_empty());
    }

    #[test]
    fn test_forwarding_through_mut_ref() {
        let mut transport = MemoryTransport::new();
        {
            let mut by_ref = &mut transport;
            Transport::send(&mut by_ref, b"\r\n").unwrap();
        }
        assert_eq!(transport.frames().len(), 1);
    }
}
