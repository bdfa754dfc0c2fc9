//! Last commanded joint angles.

use crate::config::{Degrees, JointId, JOINT_COUNT};
use crate::motion::Pose;

/// Current angle of every joint, as last commanded.
///
/// There is no feedback from the servos; this records what was sent, not
/// what was measured.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArmState {
    angles: [Degrees; JOINT_COUNT],
}

impl ArmState {
    /// All joints at 0°.
    pub const fn new() -> Self {
        Self {
            angles: [Degrees(0.0); JOINT_COUNT],
        }
    }

    /// Get a joint's angle.
    #[inline]
    pub fn angle(&self, joint: JointId) -> Degrees {
        self.angles[joint.index()]
    }

    /// Set a joint's angle.
    #[inline]
    pub fn set(&mut self, joint: JointId, angle: Degrees) {
        self.angles[joint.index()] = angle;
    }

    /// Record every joint present in a pose.
    pub fn apply(&mut self, pose: &Pose) {
        for (joint, angle) in pose.iter() {
            self.set(joint, angle);
        }
    }

    /// Iterate angles in joint order.
    pub fn iter(&self) -> impl Iterator<Item = (JointId, Degrees)> + '_ {
        JointId::ALL.into_iter().zip(self.angles.iter().copied())
    }

    /// Full pose holding every joint's angle.
    pub fn to_pose(&self) -> Pose {
        self.iter().collect()
    }
}
