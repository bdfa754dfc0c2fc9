//! Joint angle limits.

use serde::Deserialize;

use super::units::Degrees;

/// Allowed angle range of a joint, inclusive on both ends.
///
/// `min == max` is legal and describes a joint held at a single angle.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AngleLimits {
    /// Minimum allowed position in degrees.
    #[serde(rename = "min_degrees")]
    pub min: Degrees,

    /// Maximum allowed position in degrees.
    #[serde(rename = "max_degrees")]
    pub max: Degrees,
}

impl AngleLimits {
    /// Create new limits.
    pub const fn new(min: f64, max: f64) -> Self {
        Self {
            min: Degrees(min),
            max: Degrees(max),
        }
    }

    /// Check if limits are valid (finite, min <= max).
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min.0 <= self.max.0
    }

    /// Check if a position is within limits.
    ///
    /// NaN is never contained.
    pub fn contains(&self, position: Degrees) -> bool {
        position.0 >= self.min.0 && position.0 <= self.max.0
    }
}
