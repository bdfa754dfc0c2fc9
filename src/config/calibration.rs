//! Pulse calibration landmarks.

use serde::Deserialize;

use super::joint::Landmark;
use super::units::PulseWidth;

/// Pulse values measured at a joint's physical reference angles.
///
/// `front` is the pulse at 0°; `left` and `right` are the pulses at -90° and
/// +90°. Either side may be missing when the joint was never calibrated
/// there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Calibration {
    /// Pulse at -90°.
    #[serde(default, rename = "left_pulse")]
    pub left: Option<PulseWidth>,

    /// Pulse at 0°.
    #[serde(rename = "front_pulse")]
    pub front: PulseWidth,

    /// Pulse at +90°.
    #[serde(default, rename = "right_pulse")]
    pub right: Option<PulseWidth>,
}

impl Calibration {
    /// Get a landmark's pulse, if defined.
    pub fn landmark(&self, landmark: Landmark) -> Option<PulseWidth> {
        match landmark {
            Landmark::Left => self.left,
            Landmark::Front => Some(self.front),
            Landmark::Right => self.right,
        }
    }

    /// Check if both side landmarks are defined.
    pub fn is_complete(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }
}
