//! Configuration module for servo-arm.
//!
//! Provides types for loading and validating joint limits, calibration
//! landmarks, timing and port settings from TOML files (with `std` feature)
//! or built-in defaults.

mod calibration;
mod joint;
mod limits;
mod port;
mod system;
mod table;
mod timing;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use calibration::Calibration;
pub use joint::{JointConfig, JointId, Landmark, JOINT_COUNT};
pub use limits::AngleLimits;
pub use port::PortConfig;
pub use system::ArmConfig;
pub use table::JointTable;
pub use timing::TimingConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Degrees, PulseWidth};
