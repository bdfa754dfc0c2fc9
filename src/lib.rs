//! # servo-arm
//!
//! Pulse-width serial control for 6-servo robotic arms.
//!
//! ## Features
//!
//! - **Calibrated mapping**: Joint angles converted to controller pulses from
//!   per-joint front/left/right landmarks
//! - **Pose validation**: Per-joint limits and cross-joint collision rules
//!   checked before anything is sent
//! - **Batched commands**: One frame per move, `#<joint>P<pulse>T<ms>` per joint
//! - **Blocking moves**: Each move waits for the slowest servo plus a margin
//! - **Configuration-driven**: Built-in calibration or TOML files
//! - **no_std core**: Mapping, validation, encoding and sequencing work without
//!   the standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use servo_arm::{ArmConfig, JointId, Pose, RobotArm};
//!
//! // Opens /dev/ttyACM0 at 9600 baud per move and runs the init sequence
//! let mut arm = RobotArm::connect(&ArmConfig::default())?;
//!
//! // Blocks for 1.5 s + 0.5 s
//! arm.move_to(&Pose::new().with(JointId::S2, 80.0).with(JointId::S3, -50.0))?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables TOML loading, the serial transport and `StdDelay`
//! - `defmt`: Enables defmt formatting of value types for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Core modules
pub mod arm;
pub mod config;
pub mod error;
pub mod motion;
pub mod protocol;
pub mod transport;

// Re-exports for ergonomic API
pub use arm::{ArmState, RobotArm, RobotArmBuilder, INIT_SEQUENCE};
pub use config::{validate_config, ArmConfig, JointId, JointTable, TimingConfig};
pub use error::{Error, Result};
pub use motion::{ConstraintValidator, GeometryMapper, Pose};
pub use protocol::{Command, CommandBatch};
pub use transport::Transport;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

#[cfg(feature = "std")]
pub use transport::{MemoryTransport, SerialTransport, StdDelay};

// Unit types
pub use config::units::{Degrees, PulseWidth};
