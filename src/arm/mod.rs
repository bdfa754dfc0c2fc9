//! Arm module for servo-arm.
//!
//! Provides the arm controller that turns poses into transmitted batches,
//! together with its builder and the record of last commanded angles.

mod builder;
mod controller;
mod state;

pub use builder::RobotArmBuilder;
pub use controller::{RobotArm, INIT_SEQUENCE};
pub use state::ArmState;
