//! Motion module for servo-arm.
//!
//! Provides poses, pose validation and angle to pulse mapping.

mod constraints;
mod mapper;
mod pose;

pub use constraints::{ConstraintValidator, SHOULDER_PIVOT_DEGREES, WRIST_LEAD_DEGREES};
pub use mapper::{map_with, GeometryMapper, LANDMARK_SPAN_DEGREES};
pub use pose::Pose;
