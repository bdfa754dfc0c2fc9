//! Single-joint wire command.

use core::fmt::{self, Write};

use crate::config::{JointId, PulseWidth};
use crate::error::ContractViolation;

/// Longest encoded command: `#6P2500T4294967295`.
pub const MAX_COMMAND_LEN: usize = 18;

/// One joint's instruction: move to `pulse` over `duration_ms`.
///
/// Encodes as `#<joint>P<pulse>T<duration_ms>`, e.g. `#2P1326T1500`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command {
    joint: JointId,
    pulse: PulseWidth,
    duration_ms: u32,
}

impl Command {
    /// Build a command from raw values.
    ///
    /// # Errors
    ///
    /// Refuses joint ids outside 1-6, pulses outside 500-2500 and zero
    /// durations. Any of these means a defect upstream of the encoder.
    pub fn new(joint: u8, pulse: i32, duration_ms: u32) -> Result<Self, ContractViolation> {
        let joint = JointId::new(joint).map_err(|_| ContractViolation::InvalidJoint(joint))?;

        let pulse = PulseWidth::try_from(pulse).map_err(|_| ContractViolation::PulseOutOfRange {
            joint: joint.get(),
            pulse,
        })?;

        if duration_ms == 0 {
            return Err(ContractViolation::ZeroDuration { joint: joint.get() });
        }

        Ok(Self {
            joint,
            pulse,
            duration_ms,
        })
    }

    /// Target joint.
    #[inline]
    pub fn joint(&self) -> JointId {
        self.joint
    }

    /// Target pulse.
    #[inline]
    pub fn pulse(&self) -> PulseWidth {
        self.pulse
    }

    /// Move duration in milliseconds.
    #[inline]
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Encode to wire text.
    pub fn encode(&self) -> heapless::String<MAX_COMMAND_LEN> {
        let mut out = heapless::String::new();
        // MAX_COMMAND_LEN covers the widest possible command.
        let _ = write!(out, "{}", self);
        out
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}P{}T{}", self.joint, self.pulse, self.duration_ms)
    }
}

/// Encode one command straight from raw values.
///
/// # Errors
///
/// See [`Command::new`].
pub fn encode(
    joint: u8,
    pulse: i32,
    duration_ms: u32,
) -> Result<heapless::String<MAX_COMMAND_LEN>, ContractViolation> {
    Command::new(joint, pulse, duration_ms).map(|c| c.encode())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_format() {
        assert_eq!(encode(2, 1326, 1500).unwrap().as_str(), "#2P1326T1500");
        assert_eq!(encode(3, 500, 100).unwrap().as_str(), "#3P500T100");
        assert_eq!(encode(6, 2500, u32::MAX).unwrap().as_str(), "#6P2500T4294967295");
    }

    #[test]
    fn test_contract_violations() {
        assert_eq!(encode(0, 1500, 100), Err(ContractViolation::InvalidJoint(0)));
        assert_eq!(encode(7, 1500, 100), Err(ContractViolation::InvalidJoint(7)));
        assert_eq!(
            encode(2, 499, 100),
            Err(ContractViolation::PulseOutOfRange { joint: 2, pulse: 499 })
        );
        assert_eq!(
            encode(2, 2501, 100),
            Err(ContractViolation::PulseOutOfRange { joint: 2, pulse: 2501 })
        );
        assert_eq!(encode(2, 1500, 0), Err(ContractViolation::ZeroDuration { joint: 2 }));
    }

    #[test]
    fn test_pulse_bounds_accepted() {
        assert!(Command::new(1, 500, 1).is_ok());
        assert!(Command::new(1, 2500, 1).is_ok());
    }
}
