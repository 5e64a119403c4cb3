//! Sensor readings
//!
//! A reading is captured once per sample cycle and never mutated afterwards.
//! Validity is carried by the variant rather than by NaN bit patterns.

use crate::traits::sensor::{usable, SensorError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One temperature/humidity capture
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Reading {
    /// Both channels produced numbers
    Valid {
        /// Degrees Celsius
        temperature_c: f32,
        /// Relative humidity, percent
        humidity_pct: f32,
    },
    /// At least one channel failed (sensor not connected)
    Invalid,
}

impl Default for Reading {
    /// Zero reading used before the first sample
    fn default() -> Self {
        Reading::Valid {
            temperature_c: 0.0,
            humidity_pct: 0.0,
        }
    }
}

impl Reading {
    /// Build a reading from two raw channel results
    ///
    /// The capture is invalid if either channel errored or returned NaN.
    pub fn capture(
        temperature: Result<f32, SensorError>,
        humidity: Result<f32, SensorError>,
    ) -> Self {
        match (usable(temperature), usable(humidity)) {
            (Some(temperature_c), Some(humidity_pct)) => Reading::Valid {
                temperature_c,
                humidity_pct,
            },
            _ => Reading::Invalid,
        }
    }

    /// Check if this reading carries numbers
    pub fn is_valid(&self) -> bool {
        matches!(self, Reading::Valid { .. })
    }

    /// Temperature in degrees Celsius, if valid
    pub fn temperature_c(&self) -> Option<f32> {
        match self {
            Reading::Valid { temperature_c, .. } => Some(*temperature_c),
            Reading::Invalid => None,
        }
    }

    /// Relative humidity in percent, if valid
    pub fn humidity_pct(&self) -> Option<f32> {
        match self {
            Reading::Valid { humidity_pct, .. } => Some(*humidity_pct),
            Reading::Invalid => None,
        }
    }

    /// Check whether the display must change to show `self` instead of `other`
    ///
    /// Exact value comparison, no tolerance: any change in temperature,
    /// humidity or validity counts. Two invalid readings are equal.
    pub fn differs_from(&self, other: &Reading) -> bool {
        self != other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_valid() {
        let reading = Reading::capture(Ok(23.1), Ok(40.0));
        assert!(reading.is_valid());
        assert_eq!(reading.temperature_c(), Some(23.1));
        assert_eq!(reading.humidity_pct(), Some(40.0));
    }

    #[test]
    fn test_capture_nan_temperature_is_invalid() {
        let reading = Reading::capture(Ok(f32::NAN), Ok(22.0));
        assert_eq!(reading, Reading::Invalid);
        assert_eq!(reading.temperature_c(), None);
    }

    #[test]
    fn test_capture_error_is_invalid() {
        let reading = Reading::capture(Ok(21.0), Err(SensorError::Timeout));
        assert!(!reading.is_valid());
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(
            Reading::default(),
            Reading::Valid {
                temperature_c: 0.0,
                humidity_pct: 0.0
            }
        );
    }

    #[test]
    fn test_differs_from() {
        let a = Reading::capture(Ok(23.1), Ok(40.0));
        let b = Reading::capture(Ok(23.1), Ok(40.0));
        let c = Reading::capture(Ok(23.6), Ok(40.0));
        let d = Reading::capture(Ok(23.1), Ok(41.0));

        assert!(!a.differs_from(&b));
        assert!(a.differs_from(&c));
        assert!(a.differs_from(&d));
        assert!(a.differs_from(&Reading::Invalid));
        assert!(!Reading::Invalid.differs_from(&Reading::Invalid));
    }

    #[test]
    fn test_tiny_float_change_counts() {
        let a = Reading::capture(Ok(23.1), Ok(40.0));
        let b = Reading::capture(Ok(f32::from_bits(23.1f32.to_bits() + 1)), Ok(40.0));
        assert!(a.differs_from(&b));
    }
}
