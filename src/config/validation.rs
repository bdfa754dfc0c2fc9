//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::joint::JointId;
use super::ArmConfig;

/// Validate an arm configuration.
///
/// Checks:
/// - Every joint key is one of `s1`..`s6`
/// - All six joints are configured
/// - Angle limits are finite with min <= max
/// - Default and init durations are positive
/// - Baud rate is positive
///
/// Calibration pulses are range-checked when they are deserialized.
/// Joints without calibration are accepted; moving them fails at mapping time.
pub fn validate_config(config: &ArmConfig) -> Result<()> {
    for name in config.joint_names() {
        JointId::from_name(name)?;
    }

    for joint in JointId::ALL {
        let joint_config = config
            .joint(joint)
            .ok_or(Error::Config(ConfigError::MissingJoint(joint)))?;

        let limits = &joint_config.limits;
        if !limits.is_valid() {
            return Err(Error::Config(ConfigError::InvalidLimits {
                joint,
                min: limits.min.0,
                max: limits.max.0,
            }));
        }

        if joint_config.calibration.is_none() {
            log::warn!("joint {} has no calibration, moves to it will be rejected", joint);
        }
    }

    validate_timing(config)?;

    if config.port.baud_rate == 0 {
        return Err(Error::Config(ConfigError::InvalidBaudRate(0)));
    }

    Ok(())
}

fn validate_timing(config: &ArmConfig) -> Result<()> {
    let timing = &config.timing;

    if timing.default_duration_ms == 0 {
        return Err(Error::Config(ConfigError::InvalidDuration(
            timing.default_duration_ms,
        )));
    }

    if timing.init_duration_ms == 0 {
        return Err(Error::Config(ConfigError::InvalidDuration(
            timing.init_duration_ms,
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AngleLimits, JointConfig};

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ArmConfig::default()).is_ok());
    }

    #[test]
    fn test_inverted_limits() {
        let mut config = ArmConfig::default();
        config.set_joint(
            JointId::S3,
            JointConfig::new(AngleLimits::new(50.0, -50.0), None),
        );

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidLimits { joint: JointId::S3, .. }))
        ));
    }

    #[test]
    fn test_zero_default_duration() {
        let mut config = ArmConfig::default();
        config.timing.default_duration_ms = 0;

        assert_eq!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidDuration(0)))
        );
    }

    #[test]
    fn test_zero_baud_rate() {
        let mut config = ArmConfig::default();
        config.port.baud_rate = 0;

        assert!(validate_config(&config).is_err());
    }
}
