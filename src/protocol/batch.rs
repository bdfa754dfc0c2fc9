//! Commands sent together in one transmission.

use core::fmt::{self, Write};

use heapless::Vec;

use crate::config::JOINT_COUNT;
use crate::error::ContractViolation;

use super::command::{Command, MAX_COMMAND_LEN};

/// Frame terminator.
pub const LINE_END: &[u8; 2] = b"\r\n";

/// Capacity of an encoded frame: six commands plus CR LF.
pub const MAX_FRAME_LEN: usize = 128;

const _: () = assert!(MAX_COMMAND_LEN * JOINT_COUNT + LINE_END.len() <= MAX_FRAME_LEN);

/// Up to one command per joint, sent as a single frame.
///
/// Commands are concatenated without separators; the frame ends with CR LF.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandBatch {
    commands: Vec<Command, JOINT_COUNT>,
}

impl CommandBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command.
    ///
    /// # Errors
    ///
    /// Returns `ContractViolation::BatchFull` past six commands.
    pub fn push(&mut self, command: Command) -> Result<(), ContractViolation> {
        self.commands
            .push(command)
            .map_err(|_| ContractViolation::BatchFull)
    }

    /// Commands in transmission order.
    #[inline]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Number of commands.
    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the batch has no commands.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Time the slowest servo needs to finish, in milliseconds.
    ///
    /// Zero for an empty batch.
    pub fn settle_time_ms(&self) -> u32 {
        self.commands
            .iter()
            .map(Command::duration_ms)
            .max()
            .unwrap_or(0)
    }

    /// Concatenated command text, without the terminator.
    pub fn encode(&self) -> heapless::String<MAX_FRAME_LEN> {
        let mut out = heapless::String::new();
        // MAX_FRAME_LEN covers six maximal commands.
        let _ = write!(out, "{}", self);
        out
    }

    /// Bytes to put on the wire, including CR LF.
    pub fn to_frame(&self) -> Vec<u8, MAX_FRAME_LEN> {
        let mut frame = Vec::new();
        let _ = frame.extend_from_slice(self.encode().as_bytes());
        let _ = frame.extend_from_slice(LINE_END);
        frame
    }
}

impl fmt::Display for CommandBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.commands {
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concatenation_and_terminator() {
        let mut batch = CommandBatch::new();
        batch.push(Command::new(2, 813, 1500).unwrap()).unwrap();
        batch.push(Command::new(3, 1694, 1500).unwrap()).unwrap();

        assert_eq!(batch.encode().as_str(), "#2P813T1500#3P1694T1500");
        assert_eq!(batch.to_frame().as_slice(), b"#2P813T1500#3P1694T1500\r\n");
    }

    #[test]
    fn test_settle_time_is_max() {
        let mut batch = CommandBatch::new();
        assert_eq!(batch.settle_time_ms(), 0);

        batch.push(Command::new(3, 1250, 100).unwrap()).unwrap();
        batch.push(Command::new(4, 1261, 1500).unwrap()).unwrap();
        batch.push(Command::new(5, 1824, 700).unwrap()).unwrap();
        assert_eq!(batch.settle_time_ms(), 1500);
    }

    #[test]
    fn test_empty_frame() {
        assert_eq!(CommandBatch::new().to_frame().as_slice(), b"\r\n");
    }

    #[test]
    fn test_batch_full() {
        let mut batch = CommandBatch::new();
        for id in 1..=6 {
            batch.push(Command::new(id, 2500, u32::MAX).unwrap()).unwrap();
        }
        assert_eq!(
            batch.push(Command::new(1, 1500, 1).unwrap()),
            Err(ContractViolation::BatchFull)
        );
        assert_eq!(batch.to_frame().len(), 6 * MAX_COMMAND_LEN + 2);
    }
}
