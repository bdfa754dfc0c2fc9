//! Builder pattern for RobotArm.

use embedded_hal::delay::DelayNs;

use crate::config::{ArmConfig, JointTable, TimingConfig};
use crate::error::{ConfigError, Error, Result};
use crate::transport::Transport;

use super::controller::RobotArm;

/// Builder for creating RobotArm instances.
pub struct RobotArmBuilder<T, D>
where
    T: Transport,
    D: DelayNs,
{
    transport: Option<T>,
    delay: Option<D>,
    config: Option<ArmConfig>,
    timing: Option<TimingConfig>,
    initialize: bool,
}

impl<T, D> Default for RobotArmBuilder<T, D>
where
    T: Transport,
    D: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, D> RobotArmBuilder<T, D>
where
    T: Transport,
    D: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            transport: None,
            delay: None,
            config: None,
            timing: None,
            initialize: true,
        }
    }

    /// Set the transport.
    pub fn transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: D) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Use a configuration instead of the built-in one.
    pub fn config(mut self, config: ArmConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the configuration's timing.
    pub fn timing(mut self, timing: TimingConfig) -> Self {
        self.timing = Some(timing);
        self
    }

    /// Skip the cold-start sequence.
    ///
    /// Only for arms whose joints are already known to be in their start
    /// positions, e.g. when reconnecting to a powered controller.
    pub fn skip_initialization(mut self) -> Self {
        self.initialize = false;
        self
    }

    /// Build the RobotArm, running the initialization sequence unless skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport or delay is missing, the
    /// configuration is invalid, or an init move fails.
    pub fn build(self) -> Result<RobotArm<T, D>> {
        let transport = self
            .transport
            .ok_or(Error::Config(ConfigError::Incomplete("transport is required")))?;

        let delay = self
            .delay
            .ok_or(Error::Config(ConfigError::Incomplete("delay is required")))?;

        let mut config = self.config.unwrap_or_default();
        if let Some(timing) = self.timing {
            config.timing = timing;
        }

        let joints = JointTable::from_config(&config)?;
        let mut arm = RobotArm::from_parts(joints, config.timing, transport, delay);

        if self.initialize {
            arm.initialize()?;
        } else {
            log::info!("skipping arm initialization");
        }

        Ok(arm)
    }
}
