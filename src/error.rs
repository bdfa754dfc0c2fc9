//! Error types for servo-arm library.
//!
//! Provides unified error handling across configuration, pose validation,
//! pulse mapping, command encoding and transport.

use core::fmt;

use crate::config::{JointId, Landmark};

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all servo-arm operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Requested pose rejected before any command was built
    Validation(ValidationError),
    /// Joint cannot be mapped to a pulse value
    Mapping(MappingError),
    /// Malformed command reached the encoder (internal defect)
    Contract(ContractViolation),
    /// Writing to the controller failed
    Transport(TransportError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Joint id outside 1-6
    InvalidJointId(u8),
    /// Joint name is not one of s1..s6
    UnknownJointName(heapless::String<16>),
    /// A joint is missing from the configuration
    MissingJoint(JointId),
    /// Invalid angle limits (must be finite, min <= max)
    InvalidLimits {
        /// Joint the limits belong to
        joint: JointId,
        /// Minimum limit value
        min: f64,
        /// Maximum limit value
        max: f64,
    },
    /// Pulse value outside 500-2500
    InvalidPulse(u16),
    /// Duration must be > 0
    InvalidDuration(u32),
    /// Baud rate must be > 0
    InvalidBaudRate(u32),
    /// Required builder input was not provided
    Incomplete(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Pose validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Angle outside the joint's configured range
    OutOfRange {
        /// Offending joint
        joint: JointId,
        /// Requested angle in degrees
        angle: f64,
        /// Joint's min limit
        min: f64,
        /// Joint's max limit
        max: f64,
    },
    /// Joints 2 and 3 would collide or overextend
    ShoulderElbowConflict {
        /// Requested joint 2 angle
        joint2: f64,
        /// Requested joint 3 angle
        joint3: f64,
    },
    /// Joints 2 and 4 would collide or overextend
    ShoulderWristConflict {
        /// Requested joint 2 angle
        joint2: f64,
        /// Requested joint 4 angle
        joint4: f64,
    },
}

/// Angle to pulse mapping errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MappingError {
    /// Joint has no calibration landmarks at all
    MissingCalibration(JointId),
    /// Joint lacks the landmark needed for the requested side
    MissingLandmark {
        /// Joint being mapped
        joint: JointId,
        /// Landmark that is not defined
        landmark: Landmark,
    },
}

/// Malformed command values that must never reach the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum ContractViolation {
    /// Joint id outside 1-6
    InvalidJoint(u8),
    /// Pulse value outside 500-2500
    PulseOutOfRange {
        /// Joint the command targets
        joint: u8,
        /// Offending pulse value
        pulse: i32,
    },
    /// Duration of zero milliseconds
    ZeroDuration {
        /// Joint the command targets
        joint: u8,
    },
    /// More commands than joints in one batch
    BatchFull,
}

/// Transport errors.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportError {
    /// Device could not be opened
    Open(heapless::String<128>),
    /// Frame could not be written or flushed
    Write(heapless::String<128>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Validation(e) => write!(f, "Validation error: {}", e),
            Error::Mapping(e) => write!(f, "Mapping error: {}", e),
            Error::Contract(e) => write!(f, "Contract violation: {}", e),
            Error::Transport(e) => write!(f, "Transport error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidJointId(id) => {
                write!(f, "Invalid joint id: {}. Valid ids: 1-6", id)
            }
            ConfigError::UnknownJointName(name) => {
                write!(f, "Unknown joint '{}'. Valid names: s1-s6", name)
            }
            ConfigError::MissingJoint(joint) => write!(f, "Joint {} is not configured", joint),
            ConfigError::InvalidLimits { joint, min, max } => {
                write!(f, "Invalid limits for joint {}: min ({}) must be <= max ({})", joint, min, max)
            }
            ConfigError::InvalidPulse(v) => write!(f, "Invalid pulse: {}. Must be 500-2500", v),
            ConfigError::InvalidDuration(v) => write!(f, "Invalid duration: {} ms. Must be > 0", v),
            ConfigError::InvalidBaudRate(v) => write!(f, "Invalid baud rate: {}. Must be > 0", v),
            ConfigError::Incomplete(what) => write!(f, "Incomplete arm setup: {}", what),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::OutOfRange { joint, angle, .. } => {
                write!(f, "servo no. {}'s position is out of range: {}", joint, angle)
            }
            ValidationError::ShoulderElbowConflict { joint2, joint3 } => {
                write!(f, "servo no. 2 and 3's positions are out of range: {}, {}", joint2, joint3)
            }
            ValidationError::ShoulderWristConflict { joint2, joint4 } => {
                write!(f, "servo no. 2 and 4's positions are out of range: {}, {}", joint2, joint4)
            }
        }
    }
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingError::MissingCalibration(joint) => {
                write!(f, "Joint {} has no calibration", joint)
            }
            MappingError::MissingLandmark { joint, landmark } => {
                write!(f, "Joint {} has no {} landmark", joint, landmark)
            }
        }
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractViolation::InvalidJoint(id) => write!(f, "joint id {} outside 1-6", id),
            ContractViolation::PulseOutOfRange { joint, pulse } => {
                write!(f, "pulse {} for joint {} outside 500-2500", pulse, joint)
            }
            ContractViolation::ZeroDuration { joint } => {
                write!(f, "zero duration for joint {}", joint)
            }
            ContractViolation::BatchFull => write!(f, "more than 6 commands in one batch"),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Open(msg) => write!(f, "failed to open device: {}", msg),
            TransportError::Write(msg) => write!(f, "failed to write frame: {}", msg),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::Validation(e)
    }
}

impl From<MappingError> for Error {
    fn from(e: MappingError) -> Self {
        Error::Mapping(e)
    }
}

impl From<ContractViolation> for Error {
    fn from(e: ContractViolation) -> Self {
        Error::Contract(e)
    }
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Error::Transport(e)
    }
}

/// Copy a message into a bounded string, truncating on overflow.
pub(crate) fn bounded<const N: usize>(msg: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in msg.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}

#[cfg(feature = "std")]
impl std::error::Error for MappingError {}

#[cfg(feature = "std")]
impl std::error::Error for ContractViolation {}

#[cfg(feature = "std")]
impl std::error::Error for TransportError {}
