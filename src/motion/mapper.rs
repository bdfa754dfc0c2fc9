//! Joint angle to servo pulse conversion.
//!
//! Piecewise linear interpolation anchored at the front landmark (0°). Positive
//! angles move toward the right landmark over 90°, negative angles toward the
//! left landmark over 90°.

use crate::config::{Calibration, Degrees, JointId, JointTable, Landmark};
use crate::error::MappingError;

/// Angular span between the front landmark and either side landmark.
pub const LANDMARK_SPAN_DEGREES: f64 = 90.0;

/// Converts joint angles to controller pulse values.
///
/// Range checks are the validator's job; the mapper neither re-checks nor
/// clamps, so an out-of-range angle yields an out-of-range pulse which the
/// encoder then refuses.
#[derive(Debug, Clone, Copy)]
pub struct GeometryMapper<'a> {
    joints: &'a JointTable,
}

impl<'a> GeometryMapper<'a> {
    /// Create a mapper over a joint table.
    pub fn new(joints: &'a JointTable) -> Self {
        Self { joints }
    }

    /// Map an angle to a raw pulse value for a joint.
    ///
    /// # Errors
    ///
    /// Returns an error if the joint has no calibration, or lacks the landmark
    /// for the side the angle falls on.
    pub fn map(&self, joint: JointId, angle: Degrees) -> Result<i32, MappingError> {
        let calibration = self
            .joints
            .calibration(joint)
            .ok_or(MappingError::MissingCalibration(joint))?;

        map_with(calibration, angle)
            .map_err(|landmark| MappingError::MissingLandmark { joint, landmark })
    }
}

/// Interpolate a pulse from a calibration, truncating toward zero.
///
/// Fails with the missing side landmark when the angle needs it.
pub fn map_with(calibration: &Calibration, angle: Degrees) -> Result<i32, Landmark> {
    let front = calibration.front.value() as f64;

    let pulse = if angle.0 >= 0.0 {
        let right = calibration.right.ok_or(Landmark::Right)?.value() as f64;
        front - (angle.0 / LANDMARK_SPAN_DEGREES) * libm::fabs(front - right)
    } else {
        let left = calibration.left.ok_or(Landmark::Left)?.value() as f64;
        front + (angle.abs().0 / LANDMARK_SPAN_DEGREES) * libm::fabs(front - left)
    };

    Ok(libm::trunc(pulse) as i32)
}
