//! Immutable joint table derived from a validated configuration.

use super::calibration::Calibration;
use super::joint::{JointConfig, JointId, JOINT_COUNT};
use super::limits::AngleLimits;
use super::system::ArmConfig;
use crate::error::{ConfigError, Error, Result};

/// Per-joint limits and calibration, indexed by [`JointId`].
///
/// Built once from an [`ArmConfig`] that passed validation and shared by
/// reference with the mapper and the validator.
#[derive(Debug, Clone, PartialEq)]
pub struct JointTable {
    joints: [JointConfig; JOINT_COUNT],
}

impl JointTable {
    /// Validate a configuration and build the table from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn from_config(config: &ArmConfig) -> Result<Self> {
        super::validation::validate_config(config)?;

        let lookup = |joint: JointId| {
            config
                .joint(joint)
                .cloned()
                .ok_or(Error::Config(ConfigError::MissingJoint(joint)))
        };

        Ok(Self {
            joints: [
                lookup(JointId::S1)?,
                lookup(JointId::S2)?,
                lookup(JointId::S3)?,
                lookup(JointId::S4)?,
                lookup(JointId::S5)?,
                lookup(JointId::S6)?,
            ],
        })
    }

    /// Get a joint's configuration.
    #[inline]
    pub fn joint(&self, joint: JointId) -> &JointConfig {
        &self.joints[joint.index()]
    }

    /// Get a joint's angle limits.
    #[inline]
    pub fn limits(&self, joint: JointId) -> AngleLimits {
        self.joints[joint.index()].limits
    }

    /// Get a joint's calibration, if any.
    #[inline]
    pub fn calibration(&self, joint: JointId) -> Option<&Calibration> {
        self.joints[joint.index()].calibration.as_ref()
    }

    /// Iterate joints in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (JointId, &JointConfig)> {
        JointId::ALL.into_iter().zip(self.joints.iter())
    }
}

impl Default for JointTable {
    fn default() -> Self {
        let config = ArmConfig::default();
        let joint = |id: JointId| config.joint(id).cloned().unwrap_or_else(|| {
            JointConfig::new(AngleLimits::new(0.0, 0.0), None)
        });
        Self {
            joints: JointId::ALL.map(joint),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_from_default_config() {
        let table = JointTable::from_config(&ArmConfig::default()).unwrap();

        assert_eq!(table.limits(JointId::S2), AngleLimits::new(0.0, 90.0));
        assert_eq!(table.calibration(JointId::S3).unwrap().front.value(), 1250);
        assert!(table.calibration(JointId::S1).is_none());
        assert_eq!(table, JointTable::default());
    }

    #[test]
    fn test_table_iterates_in_order() {
        let table = JointTable::default();
        let ids: heapless::Vec<u8, 6> = table.iter().map(|(id, _)| id.get()).collect();
        assert_eq!(ids.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_missing_joint_rejected() {
        let mut config = ArmConfig::default();
        config.remove_joint(JointId::S5);

        assert!(matches!(
            JointTable::from_config(&config),
            Err(Error::Config(ConfigError::MissingJoint(JointId::S5)))
        ));
    }
}
