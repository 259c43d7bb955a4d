//! Observer longitude on Earth.
//!
//! Longitude is the only geographic coordinate sidereal time depends on:
//! latitude and height shift the horizon, not the meridian. The value is
//! stored in degrees with East positive, the convention used by the
//! time-of-day conversion (15 degrees of longitude per hour).
//!
//! [`GeographicLongitude::from_degrees`] is deliberately unchecked: values
//! outside [-180, 180] act as an extended-range hour offset and non-finite
//! values propagate through the computation. Callers that want rejection use
//! [`GeographicLongitude::validated`] instead.

use crate::constants::DEGREES_PER_HOUR;
use crate::errors::{SiderealError, SiderealResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A terrestrial longitude in degrees, East positive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeographicLongitude {
    degrees: f64,
}

impl GeographicLongitude {
    /// Creates a longitude from degrees without validation.
    ///
    /// Accepts any `f64`, including values far outside [-180, 180] and
    /// non-finite values; both propagate mathematically downstream.
    pub fn from_degrees(degrees: f64) -> Self {
        Self { degrees }
    }

    /// Creates a longitude from degrees, rejecting non-finite values and
    /// values outside [-180, 180].
    ///
    /// # Errors
    ///
    /// Returns [`SiderealError::NotFinite`] for NaN or infinity, and
    /// [`SiderealError::OutOfRange`] for finite values outside the
    /// conventional range.
    pub fn validated(degrees: f64) -> SiderealResult<Self> {
        if !degrees.is_finite() {
            return Err(SiderealError::not_finite("longitude", degrees));
        }
        if !(-180.0..=180.0).contains(&degrees) {
            return Err(SiderealError::out_of_range(
                "longitude",
                degrees,
                -180.0,
                180.0,
            ));
        }
        Ok(Self { degrees })
    }

    /// The Greenwich meridian, longitude zero.
    pub fn greenwich() -> Self {
        Self { degrees: 0.0 }
    }

    /// Longitude in degrees, East positive.
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Longitude expressed as an hour offset from Greenwich
    /// (degrees / 15, East positive).
    pub fn hours(&self) -> f64 {
        self.degrees / DEGREES_PER_HOUR
    }
}

impl fmt::Display for GeographicLongitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}°", self.degrees)
    }
}

impl From<f64> for GeographicLongitude {
    fn from(degrees: f64) -> Self {
        Self::from_degrees(degrees)
    }
}
