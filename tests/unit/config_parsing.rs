//! Unit tests for TOML configuration parsing.

use servo_arm::config::{ArmConfig, JointId, Landmark, PulseWidth};

const MINIMAL_JOINTS: &str = r#"
[joints.s1.limits]
min_degrees = -50.0
max_degrees = 50.0

[joints.s2.limits]
min_degrees = 0.0
max_degrees = 90.0

[joints.s3.limits]
min_degrees = -50.0
max_degrees = 50.0

[joints.s4.limits]
min_degrees = 0.0
max_degrees = 90.0

[joints.s5.limits]
min_degrees = -50.0
max_degrees = -50.0

[joints.s6.limits]
min_degrees = 45.0
max_degrees = 45.0
"#;

/// Test parsing a single joint with label, limits and calibration.
#[test]
fn test_parse_joint_config() {
    let toml_str = r#"
[joints.s2]
label = "shoulder"

[joints.s2.limits]
min_degrees = 0.0
max_degrees = 90.0

[joints.s2.calibration]
left_pulse = 2050
front_pulse = 1400
right_pulse = 740
"#;

    let config: ArmConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let joint = config.joint(JointId::S2).expect("Joint not found");

    assert_eq!(joint.label.as_deref(), Some("shoulder"));
    assert_eq!(joint.limits.min.0, 0.0);
    assert_eq!(joint.limits.max.0, 90.0);

    let cal = joint.calibration.expect("Calibration not found");
    assert_eq!(cal.landmark(Landmark::Left).map(PulseWidth::value), Some(2050));
    assert_eq!(cal.front.value(), 1400);
    assert_eq!(cal.landmark(Landmark::Right).map(PulseWidth::value), Some(740));
    assert!(cal.is_complete());
}

/// Test that a one-sided calibration parses with the other side absent.
#[test]
fn test_parse_partial_calibration() {
    let toml_str = r#"
[joints.s4.limits]
min_degrees = 0.0
max_degrees = 90.0

[joints.s4.calibration]
front_pulse = 1350
right_pulse = 550
"#;

    let config: ArmConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let cal = config.joint(JointId::S4).unwrap().calibration.unwrap();

    assert!(cal.left.is_none());
    assert_eq!(cal.right.map(PulseWidth::value), Some(550));
    assert!(!cal.is_complete());
}

/// Test that joints without a calibration table parse.
#[test]
fn test_parse_uncalibrated_joints() {
    let config: ArmConfig = toml::from_str(MINIMAL_JOINTS).expect("Failed to parse TOML");

    assert_eq!(config.joints.len(), 6);
    for joint in JointId::ALL {
        assert!(config.joint(joint).unwrap().calibration.is_none());
    }
}

/// Test port and timing defaults when their tables are omitted.
#[test]
fn test_section_defaults() {
    let config: ArmConfig = toml::from_str(MINIMAL_JOINTS).expect("Failed to parse TOML");

    assert_eq!(config.port.path.as_str(), "/dev/ttyACM0");
    assert_eq!(config.port.baud_rate, 9600);
    assert_eq!(config.port.timeout_ms, 1000);
    assert_eq!(config.timing.default_duration_ms, 1500);
    assert_eq!(config.timing.init_duration_ms, 100);
    assert_eq!(config.timing.settle_margin_ms, 500);
}

/// Test that individual timing fields fall back to defaults.
#[test]
fn test_partial_timing() {
    let toml_str = format!("[timing]\nsettle_margin_ms = 250\n{}", MINIMAL_JOINTS);

    let config: ArmConfig = toml::from_str(&toml_str).expect("Failed to parse TOML");

    assert_eq!(config.timing.settle_margin_ms, 250);
    assert_eq!(config.timing.default_duration_ms, 1500);
    assert_eq!(config.timing.wait_ms(1500), 1750);
}

/// Test that out-of-range calibration pulses fail deserialization.
#[test]
fn test_pulse_out_of_range() {
    for pulse in [0, 499, 2501, 9000] {
        let toml_str = format!(
            "[joints.s2.limits]\nmin_degrees = 0.0\nmax_degrees = 90.0\n\n[joints.s2.calibration]\nfront_pulse = {}\n",
            pulse
        );
        let result: Result<ArmConfig, _> = toml::from_str(&toml_str);
        assert!(result.is_err(), "pulse {} should be rejected", pulse);
    }
}

/// Test that the pulse range bounds themselves are accepted.
#[test]
fn test_pulse_bounds_accepted() {
    let toml_str = r#"
[joints.s3.limits]
min_degrees = -50.0
max_degrees = 50.0

[joints.s3.calibration]
left_pulse = 2500
front_pulse = 1500
right_pulse = 500
"#;

    let config: ArmConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let cal = config.joint(JointId::S3).unwrap().calibration.unwrap();

    assert_eq!(cal.left.map(PulseWidth::value), Some(PulseWidth::MAX.value()));
    assert_eq!(cal.right.map(PulseWidth::value), Some(PulseWidth::MIN.value()));
}

/// Test that a calibration table without a front pulse is rejected.
#[test]
fn test_front_pulse_required() {
    let toml_str = r#"
[joints.s2.limits]
min_degrees = 0.0
max_degrees = 90.0

[joints.s2.calibration]
left_pulse = 2050
right_pulse = 740
"#;

    let result: Result<ArmConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err());
}

/// Test loading the shipped demo configuration file.
#[test]
fn test_load_demo_config() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/arm.toml");
    let config = servo_arm::load_config(path).expect("Failed to load demos/arm.toml");

    let builtin = ArmConfig::default();

    assert_eq!(config.port, builtin.port);
    assert_eq!(config.timing, builtin.timing);
    for joint in JointId::ALL {
        assert_eq!(config.joint(joint), builtin.joint(joint), "joint {}", joint);
    }
}
