//! Arm controller: validates, maps, encodes and sends moves.

use embedded_hal::delay::DelayNs;

use crate::config::{ArmConfig, JointId, JointTable, TimingConfig};
use crate::error::{Error, Result};
use crate::motion::{ConstraintValidator, GeometryMapper, Pose};
use crate::protocol::{Command, CommandBatch};
use crate::transport::Transport;

use super::builder::RobotArmBuilder;
use super::state::ArmState;

/// Cold-start sequence: each joint moved on its own, in this order.
///
/// The first movement of a servo disturbs the ones already positioned; moving
/// them one at a time with the short init duration keeps that disturbance
/// small.
pub const INIT_SEQUENCE: [(JointId, f64); 3] =
    [(JointId::S3, 0.0), (JointId::S2, 10.0), (JointId::S4, 10.0)];

/// A 6-servo arm driven over a fire-and-forget transport.
///
/// Generic over:
/// - `T`: frame transport (usually [`SerialTransport`](crate::transport::SerialTransport))
/// - `D`: delay provider used for the settle wait
///
/// All moves borrow the arm mutably, so one arm can never have two moves in
/// flight.
pub struct RobotArm<T, D>
where
    T: Transport,
    D: DelayNs,
{
    /// Limits and calibration.
    joints: JointTable,

    /// Durations and settle margin.
    timing: TimingConfig,

    /// Last commanded angles.
    state: ArmState,

    /// Link to the controller.
    transport: T,

    /// Settle wait provider.
    delay: D,
}

impl<T, D> RobotArm<T, D>
where
    T: Transport,
    D: DelayNs,
{
    /// Create an arm and run the initialization sequence.
    ///
    /// Blocks for the whole sequence (three short moves plus settle margins).
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or any init move fails.
    pub fn new(config: &ArmConfig, transport: T, delay: D) -> Result<Self> {
        let joints = JointTable::from_config(config)?;
        let mut arm = Self::from_parts(joints, config.timing, transport, delay);
        arm.initialize()?;
        Ok(arm)
    }

    /// Start building an arm.
    pub fn builder() -> RobotArmBuilder<T, D> {
        RobotArmBuilder::new()
    }

    pub(crate) fn from_parts(joints: JointTable, timing: TimingConfig, transport: T, delay: D) -> Self {
        Self {
            joints,
            timing,
            state: ArmState::new(),
            transport,
            delay,
        }
    }

    pub(crate) fn initialize(&mut self) -> Result<()> {
        log::info!("initializing arm");
        let duration_ms = self.timing.init_duration_ms;

        for (joint, angle) in INIT_SEQUENCE {
            self.move_to_with_duration(&Pose::new().with(joint, angle), duration_ms)?;
        }

        log::info!("arm initialized");
        Ok(())
    }

    /// Move to a pose with the default duration, blocking until it settles.
    ///
    /// See [`move_to_with_duration`](Self::move_to_with_duration).
    pub fn move_to(&mut self, pose: &Pose) -> Result<()> {
        let duration_ms = self.timing.default_duration_ms;
        self.move_to_with_duration(pose, duration_ms)
    }

    /// Move to a pose, blocking the calling thread until the servos settle.
    ///
    /// The pose is validated and every joint mapped and encoded before
    /// anything is sent; any failure there leaves the arm untouched. The batch
    /// is then sent once, the pose recorded as the arm's state, and the
    /// caller blocked for the longest command duration plus the settle
    /// margin. The state is recorded and the wait happens even if the
    /// transport fails, since the frame may have partly reached the
    /// controller.
    ///
    /// An empty pose sends nothing and returns immediately. No bare CR LF
    /// frame is written and no settle margin is waited out.
    ///
    /// # Errors
    ///
    /// - `Error::Validation` if the pose breaks a limit or cross-joint rule
    /// - `Error::Mapping` if a joint lacks the calibration it needs
    /// - `Error::Contract` if a mapped value cannot be encoded
    /// - `Error::Transport` if sending failed (after the wait)
    pub fn move_to_with_duration(&mut self, pose: &Pose, duration_ms: u32) -> Result<()> {
        if pose.is_empty() {
            log::debug!("empty pose, nothing to send");
            return Ok(());
        }

        let batch = self.plan(pose, duration_ms)?;

        log::debug!("sending {}", batch);
        let sent = self.transport.send(&batch.to_frame());

        self.state.apply(pose);

        let wait_ms = self.timing.wait_ms(batch.settle_time_ms());
        log::debug!("waiting {} ms for servos to settle", wait_ms);
        self.delay.delay_ms(wait_ms);

        sent.map_err(|e| {
            log::error!("failed to send {}: {}", batch, e);
            Error::Transport(e)
        })
    }

    /// Validate, map and encode a pose without sending it.
    ///
    /// # Errors
    ///
    /// Same as [`move_to_with_duration`](Self::move_to_with_duration), minus
    /// transport failures.
    pub fn plan(&self, pose: &Pose, duration_ms: u32) -> Result<CommandBatch> {
        ConstraintValidator::new(&self.joints)
            .validate(pose)
            .map_err(|e| {
                log::warn!("rejected pose {}: {}", pose, e);
                Error::Validation(e)
            })?;

        let mapper = GeometryMapper::new(&self.joints);
        let mut batch = CommandBatch::new();

        for (joint, angle) in pose.iter() {
            let pulse = mapper.map(joint, angle).map_err(|e| {
                log::warn!("cannot map joint {}: {}", joint, e);
                Error::Mapping(e)
            })?;

            let command = Command::new(joint.get(), pulse, duration_ms).map_err(|e| {
                log::error!("refusing to encode joint {} at {}: {}", joint, angle, e);
                Error::Contract(e)
            })?;

            batch.push(command)?;
        }

        Ok(batch)
    }

    /// Last commanded angles.
    #[inline]
    pub fn state(&self) -> &ArmState {
        &self.state
    }

    /// Joint limits and calibration.
    #[inline]
    pub fn joints(&self) -> &JointTable {
        &self.joints
    }

    /// Timing settings.
    #[inline]
    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// Get the transport.
    #[inline]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Get the transport mutably.
    #[inline]
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Take the arm apart, returning the transport and delay provider.
    pub fn release(self) -> (T, D) {
        (self.transport, self.delay)
    }
}

#[cfg(feature = "std")]
impl RobotArm<crate::transport::SerialTransport, crate::transport::StdDelay> {
    /// Connect to the serial port named in the configuration and initialize.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the port cannot be
    /// written during initialization.
    pub fn connect(config: &ArmConfig) -> Result<Self> {
        log::info!(
            "using {} at {} baud",
            config.port.path,
            config.port.baud_rate
        );
        Self::new(
            config,
            crate::transport::SerialTransport::from_config(&config.port),
            crate::transport::StdDelay::new(),
        )
    }
}
