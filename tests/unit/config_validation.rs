//! Unit tests for configuration validation.

use servo_arm::config::{
    validate_config, AngleLimits, ArmConfig, Calibration, JointConfig, JointId, JointTable,
    PulseWidth,
};
use servo_arm::error::{ConfigError, Error};

fn pulse(value: u16) -> PulseWidth {
    PulseWidth::new(value).unwrap()
}

/// Test that the built-in configuration is valid.
#[test]
fn test_default_config_valid() {
    let config = ArmConfig::default();
    assert!(validate_config(&config).is_ok());
}

/// Test the built-in limits and landmarks.
#[test]
fn test_default_table() {
    let table = JointTable::default();

    let expected = [
        (JointId::S1, -50.0, 50.0),
        (JointId::S2, 0.0, 90.0),
        (JointId::S3, -50.0, 50.0),
        (JointId::S4, 0.0, 90.0),
        (JointId::S5, -50.0, -50.0),
        (JointId::S6, 45.0, 45.0),
    ];
    for (joint, min, max) in expected {
        let limits = table.limits(joint);
        assert_eq!((limits.min.0, limits.max.0), (min, max), "joint {}", joint);
    }

    assert!(table.calibration(JointId::S1).is_none());
    assert_eq!(
        table.calibration(JointId::S6),
        Some(&Calibration {
            left: Some(pulse(2200)),
            front: pulse(1650),
            right: Some(pulse(850)),
        })
    );

    let s4 = table.calibration(JointId::S4).unwrap();
    assert!(s4.left.is_none());
    assert_eq!(s4.front.value(), 1350);
}

/// Test that inverted limits are rejected.
#[test]
fn test_inverted_limits_rejected() {
    let mut config = ArmConfig::default();
    config.set_joint(
        JointId::S3,
        JointConfig::new(AngleLimits::new(50.0, -50.0), None),
    );

    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidLimits {
            joint: JointId::S3,
            ..
        }))
    ));
}

/// Test that non-finite limits are rejected.
#[test]
fn test_nan_limits_rejected() {
    let mut config = ArmConfig::default();
    config.set_joint(
        JointId::S2,
        JointConfig::new(AngleLimits::new(f64::NAN, 90.0), None),
    );

    assert!(validate_config(&config).is_err());
}

/// Test that fixed joints (min == max) are accepted.
#[test]
fn test_fixed_joint_accepted() {
    let mut config = ArmConfig::default();
    config.set_joint(
        JointId::S1,
        JointConfig::new(AngleLimits::new(0.0, 0.0), None),
    );

    assert!(validate_config(&config).is_ok());
}

/// Test that a missing joint is reported.
#[test]
fn test_missing_joint_rejected() {
    let mut config = ArmConfig::default();
    config.remove_joint(JointId::S5);

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::MissingJoint(JointId::S5)))
    ));
}

/// Test that unknown joint names are reported.
#[test]
fn test_unknown_joint_rejected() {
    let toml_str = r#"
[joints.elbow.limits]
min_degrees = -50.0
max_degrees = 50.0
"#;

    let config: ArmConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::UnknownJointName(_)))
    ));
}

/// Test that zero durations are rejected.
#[test]
fn test_zero_durations_rejected() {
    let mut config = ArmConfig::default();
    config.timing.default_duration_ms = 0;
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidDuration(0)))
    ));

    let mut config = ArmConfig::default();
    config.timing.init_duration_ms = 0;
    assert!(validate_config(&config).is_err());
}

/// Test that a zero settle margin is allowed.
#[test]
fn test_zero_settle_margin_allowed() {
    let mut config = ArmConfig::default();
    config.timing.settle_margin_ms = 0;
    assert!(validate_config(&config).is_ok());
}

/// Test that a zero baud rate is rejected.
#[test]
fn test_zero_baud_rate_rejected() {
    let mut config = ArmConfig::default();
    config.port.baud_rate = 0;
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidBaudRate(0)))
    ));
}

/// Test that the joint table refuses an invalid configuration.
#[test]
fn test_table_requires_valid_config() {
    let mut config = ArmConfig::default();
    config.remove_joint(JointId::S1);

    assert!(JointTable::from_config(&config).is_err());
}

/// Test pulse width construction bounds.
#[test]
fn test_pulse_width_bounds() {
    assert!(PulseWidth::new(499).is_err());
    assert!(PulseWidth::new(500).is_ok());
    assert!(PulseWidth::new(2500).is_ok());
    assert!(matches!(
        PulseWidth::new(2501),
        Err(ConfigError::InvalidPulse(2501))
    ));
}
