//! Unit types for physical quantities.
//!
//! Provides type-safe representations of joint angles and servo pulse widths
//! to prevent unit confusion at compile time.

use core::fmt;

use serde::Deserialize;

use crate::error::ConfigError;

/// Angular position in degrees.
///
/// Signed; 0° is the joint's front landmark, positive angles turn toward the
/// right landmark and negative angles toward the left one.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    /// Create a new Degrees value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Magnitude of the angle.
    #[inline]
    pub fn abs(self) -> Self {
        Self(libm::fabs(self.0))
    }

    /// Check that the value is neither NaN nor infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl From<f64> for Degrees {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Servo pulse width in controller units (500-2500).
///
/// Validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseWidth(u16);

impl PulseWidth {
    /// Lowest pulse value the controller accepts.
    pub const MIN: Self = Self(500);
    /// Highest pulse value the controller accepts.
    pub const MAX: Self = Self(2500);

    /// Create a new PulseWidth with validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPulse` if the value is outside 500-2500.
    pub fn new(value: u16) -> Result<Self, ConfigError> {
        if Self::is_valid(value as i32) {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidPulse(value))
        }
    }

    /// Get the raw pulse value.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Check if a value is valid.
    #[inline]
    pub fn is_valid(value: i32) -> bool {
        (Self::MIN.0 as i32..=Self::MAX.0 as i32).contains(&value)
    }
}

impl TryFrom<u16> for PulseWidth {
    type Error = ConfigError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i32> for PulseWidth {
    type Error = ConfigError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if Self::is_valid(value) {
            Ok(Self(value as u16))
        } else {
            Err(ConfigError::InvalidPulse(value.clamp(0, u16::MAX as i32) as u16))
        }
    }
}

impl fmt::Display for PulseWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for PulseWidth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::fmt::Write;
        let value = u16::deserialize(deserializer)?;
        PulseWidth::new(value).map_err(|e| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}
