//! Requested joint angles for one move.

use core::fmt;

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use crate::config::{Degrees, JointId, JOINT_COUNT};
use crate::error::ConfigError;

/// A subset of joint target angles.
///
/// Joints not present in the pose are left where they are. Iteration always
/// follows joint declaration order (1..6), independent of insertion order.
///
/// Deserializes from a table of joint names to angles, e.g.
/// `{ s2 = 10.0, s3 = 0.0 }`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(try_from = "FnvIndexMap<String<8>, Degrees, 8>")]
pub struct Pose {
    angles: [Option<Degrees>; JOINT_COUNT],
}

impl Pose {
    /// Create an empty pose.
    pub const fn new() -> Self {
        Self {
            angles: [None; JOINT_COUNT],
        }
    }

    /// Build a pose from `(name, angle)` pairs such as `("s2", 10.0)`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownJointName` for names other than `s1`..`s6`.
    pub fn from_named<I, S>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut pose = Self::new();
        for (name, angle) in pairs {
            pose.set(JointId::from_name(name.as_ref())?, Degrees(angle));
        }
        Ok(pose)
    }

    /// Add a joint target, consuming and returning the pose.
    pub fn with(mut self, joint: JointId, angle: f64) -> Self {
        self.set(joint, Degrees(angle));
        self
    }

    /// Set a joint target, replacing any previous one.
    #[inline]
    pub fn set(&mut self, joint: JointId, angle: Degrees) {
        self.angles[joint.index()] = Some(angle);
    }

    /// Remove a joint target.
    #[inline]
    pub fn remove(&mut self, joint: JointId) -> Option<Degrees> {
        self.angles[joint.index()].take()
    }

    /// Get a joint target.
    #[inline]
    pub fn get(&self, joint: JointId) -> Option<Degrees> {
        self.angles[joint.index()]
    }

    /// Check if a joint is part of the pose.
    #[inline]
    pub fn contains(&self, joint: JointId) -> bool {
        self.angles[joint.index()].is_some()
    }

    /// Number of joints in the pose.
    pub fn len(&self) -> usize {
        self.angles.iter().filter(|a| a.is_some()).count()
    }

    /// Check if the pose has no joints.
    pub fn is_empty(&self) -> bool {
        self.angles.iter().all(Option::is_none)
    }

    /// Iterate joint targets in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (JointId, Degrees)> + '_ {
        JointId::ALL
            .into_iter()
            .zip(self.angles.iter())
            .filter_map(|(joint, angle)| angle.map(|a| (joint, a)))
    }
}

impl FromIterator<(JointId, Degrees)> for Pose {
    fn from_iter<T: IntoIterator<Item = (JointId, Degrees)>>(iter: T) -> Self {
        let mut pose = Self::new();
        for (joint, angle) in iter {
            pose.set(joint, angle);
        }
        pose
    }
}

impl TryFrom<FnvIndexMap<String<8>, Degrees, 8>> for Pose {
    type Error = ConfigError;

    fn try_from(table: FnvIndexMap<String<8>, Degrees, 8>) -> Result<Self, Self::Error> {
        let mut pose = Self::new();
        for (name, angle) in table.iter() {
            pose.set(JointId::from_name(name.as_str())?, *angle);
        }
        Ok(pose)
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (joint, angle)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", joint.name(), angle.0)?;
        }
        write!(f, "}}")
    }
}
