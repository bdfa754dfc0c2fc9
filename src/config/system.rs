//! Arm configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::calibration::Calibration;
use super::joint::{JointConfig, JointId};
use super::limits::AngleLimits;
use super::port::PortConfig;
use super::timing::TimingConfig;
use super::units::PulseWidth;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct ArmConfig {
    /// Serial port settings.
    #[serde(default)]
    pub port: PortConfig,

    /// Command durations and settle margin.
    #[serde(default)]
    pub timing: TimingConfig,

    /// Joint configurations keyed by fixed joint name (`s1`..`s6`).
    pub joints: FnvIndexMap<String<8>, JointConfig, 8>,
}

impl ArmConfig {
    /// Get a joint configuration by id.
    pub fn joint(&self, joint: JointId) -> Option<&JointConfig> {
        self.joints
            .iter()
            .find(|(k, _)| k.as_str() == joint.name())
            .map(|(_, v)| v)
    }

    /// List all configured joint names.
    pub fn joint_names(&self) -> impl Iterator<Item = &str> {
        self.joints.keys().map(|s| s.as_str())
    }

    /// Replace or add a joint configuration.
    pub fn set_joint(&mut self, joint: JointId, config: JointConfig) {
        let name: String<8> = String::try_from(joint.name()).unwrap_or_default();
        // At most six distinct keys can be produced, the map holds eight.
        let _ = self.joints.insert(name, config);
    }

    /// Remove a joint configuration.
    pub fn remove_joint(&mut self, joint: JointId) -> Option<JointConfig> {
        let name: String<8> = String::try_from(joint.name()).ok()?;
        self.joints.remove(&name)
    }
}

fn calibration(left: Option<u16>, front: u16, right: Option<u16>) -> Option<Calibration> {
    Some(Calibration {
        left: left.and_then(|p| PulseWidth::new(p).ok()),
        front: PulseWidth::new(front).ok()?,
        right: right.and_then(|p| PulseWidth::new(p).ok()),
    })
}

impl Default for ArmConfig {
    /// The calibration of the reference arm.
    fn default() -> Self {
        let mut config = Self {
            port: PortConfig::default(),
            timing: TimingConfig::default(),
            joints: FnvIndexMap::new(),
        };

        config.set_joint(
            JointId::S1,
            JointConfig::new(AngleLimits::new(-50.0, 50.0), None).with_label("base"),
        );
        config.set_joint(
            JointId::S2,
            JointConfig::new(
                AngleLimits::new(0.0, 90.0),
                calibration(Some(2050), 1400, Some(740)),
            )
            .with_label("shoulder"),
        );
        config.set_joint(
            JointId::S3,
            JointConfig::new(
                AngleLimits::new(-50.0, 50.0),
                calibration(Some(2050), 1250, Some(500)),
            )
            .with_label("elbow"),
        );
        config.set_joint(
            JointId::S4,
            JointConfig::new(AngleLimits::new(0.0, 90.0), calibration(None, 1350, Some(550)))
                .with_label("wrist"),
        );
        config.set_joint(
            JointId::S5,
            JointConfig::new(
                AngleLimits::new(-50.0, -50.0),
                calibration(Some(2100), 1480, Some(740)),
            )
            .with_label("wrist rotation"),
        );
        config.set_joint(
            JointId::S6,
            JointConfig::new(
                AngleLimits::new(45.0, 45.0),
                calibration(Some(2200), 1650, Some(850)),
            )
            .with_label("gripper"),
        );

        config
    }
}
