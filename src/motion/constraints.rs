//! Pose validation against joint limits and cross-joint rules.

use crate::config::{JointId, JointTable};
use crate::error::ValidationError;

use super::pose::Pose;

/// Joint 2 angle at which the elbow and wrist rules flip direction.
pub const SHOULDER_PIVOT_DEGREES: f64 = 45.0;

/// How far joint 4 may lead joint 2 while the shoulder is below the pivot.
pub const WRIST_LEAD_DEGREES: f64 = 10.0;

/// Checks poses before any command is built.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintValidator<'a> {
    joints: &'a JointTable,
}

impl<'a> ConstraintValidator<'a> {
    /// Create a validator over a joint table.
    pub fn new(joints: &'a JointTable) -> Self {
        Self { joints }
    }

    /// Validate a pose.
    ///
    /// Rules run in this order and the first failure is returned:
    /// 1. Each present joint's angle within its inclusive limits, joints 1..6
    /// 2. Joints 2 and 3 (when both present)
    /// 3. Joints 2 and 4 (when both present)
    ///
    /// # Errors
    ///
    /// Returns the first rule the pose violates.
    pub fn validate(&self, pose: &Pose) -> Result<(), ValidationError> {
        for (joint, angle) in pose.iter() {
            let limits = self.joints.limits(joint);
            if !limits.contains(angle) {
                return Err(ValidationError::OutOfRange {
                    joint,
                    angle: angle.0,
                    min: limits.min.0,
                    max: limits.max.0,
                });
            }
        }

        if let (Some(j2), Some(j3)) = (pose.get(JointId::S2), pose.get(JointId::S3)) {
            check_shoulder_elbow(j2.0, j3.0)?;
        }

        if let (Some(j2), Some(j4)) = (pose.get(JointId::S2), pose.get(JointId::S4)) {
            check_shoulder_wrist(j2.0, j4.0)?;
        }

        Ok(())
    }
}

fn check_shoulder_elbow(joint2: f64, joint3: f64) -> Result<(), ValidationError> {
    let below = joint2 < SHOULDER_PIVOT_DEGREES && joint3 < 0.0;
    let above = joint2 > SHOULDER_PIVOT_DEGREES && joint3 > 0.0;

    if below || above {
        return Err(ValidationError::ShoulderElbowConflict { joint2, joint3 });
    }
    Ok(())
}

fn check_shoulder_wrist(joint2: f64, joint4: f64) -> Result<(), ValidationError> {
    let below = joint2 < SHOULDER_PIVOT_DEGREES && joint4 > joint2 + WRIST_LEAD_DEGREES;
    let above = joint2 > SHOULDER_PIVOT_DEGREES && joint4 < SHOULDER_PIVOT_DEGREES;

    if below || above {
        return Err(ValidationError::ShoulderWristConflict { joint2, joint4 });
    }
    Ok(())
}
