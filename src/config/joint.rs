//! Joint identity and per-joint configuration.

use core::fmt;

use heapless::String;
use serde::Deserialize;

use super::calibration::Calibration;
use super::limits::AngleLimits;
use crate::error::ConfigError;

/// Number of servo joints on the arm.
pub const JOINT_COUNT: usize = 6;

/// Identity of one servo joint (1-6).
///
/// Validated at construction, so every `JointId` in circulation addresses a
/// real channel on the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JointId(u8);

impl JointId {
    /// Base rotation.
    pub const S1: Self = Self(1);
    /// Shoulder.
    pub const S2: Self = Self(2);
    /// Elbow.
    pub const S3: Self = Self(3);
    /// Wrist.
    pub const S4: Self = Self(4);
    /// Wrist rotation.
    pub const S5: Self = Self(5);
    /// Gripper.
    pub const S6: Self = Self(6);

    /// All joints in declaration order.
    pub const ALL: [Self; JOINT_COUNT] =
        [Self::S1, Self::S2, Self::S3, Self::S4, Self::S5, Self::S6];

    const NAMES: [&'static str; JOINT_COUNT] = ["s1", "s2", "s3", "s4", "s5", "s6"];

    /// Create a new JointId with validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidJointId` if the id is not 1-6.
    pub fn new(id: u8) -> Result<Self, ConfigError> {
        if (1..=JOINT_COUNT as u8).contains(&id) {
            Ok(Self(id))
        } else {
            Err(ConfigError::InvalidJointId(id))
        }
    }

    /// Look up a joint by its fixed name (`s1`..`s6`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownJointName` for any other name.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        Self::NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| ConfigError::UnknownJointName(crate::error::bounded(name)))
    }

    /// Get the raw id.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based index into per-joint tables.
    #[inline]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Fixed name of this joint.
    #[inline]
    pub fn name(self) -> &'static str {
        Self::NAMES[self.index()]
    }
}

impl TryFrom<u8> for JointId {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for JointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for JointId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::fmt::Write;
        let value = u8::deserialize(deserializer)?;
        JointId::new(value).map_err(|e| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}

/// Calibration reference point of a joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Landmark {
    /// Pulse at -90°.
    Left,
    /// Pulse at 0°.
    Front,
    /// Pulse at +90°.
    Right,
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Landmark::Left => write!(f, "left"),
            Landmark::Front => write!(f, "front"),
            Landmark::Right => write!(f, "right"),
        }
    }
}

/// Complete joint configuration from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JointConfig {
    /// Optional human-readable label (max 32 chars).
    #[serde(default)]
    pub label: Option<String<32>>,

    /// Allowed angle range.
    pub limits: AngleLimits,

    /// Pulse landmarks; absent for joints that are never mapped.
    #[serde(default)]
    pub calibration: Option<Calibration>,
}

impl JointConfig {
    /// Create a joint configuration.
    pub fn new(limits: AngleLimits, calibration: Option<Calibration>) -> Self {
        Self {
            label: None,
            limits,
            calibration,
        }
    }

    /// Attach a label.
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = String::try_from(label).ok();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joint_id_bounds() {
        assert!(JointId::new(0).is_err());
        assert!(JointId::new(7).is_err());
        for id in 1..=6 {
            assert_eq!(JointId::new(id).unwrap().get(), id);
        }
    }

    #[test]
    fn test_joint_names() {
        assert_eq!(JointId::from_name("s4").unwrap(), JointId::S4);
        assert_eq!(JointId::S6.name(), "s6");
        assert!(matches!(
            JointId::from_name("s7"),
            Err(ConfigError::UnknownJointName(_))
        ));
    }

    #[test]
    fn test_index_matches_order() {
        for (i, joint) in JointId::ALL.iter().enumerate() {
            assert_eq!(joint.index(), i);
        }
    }
}
