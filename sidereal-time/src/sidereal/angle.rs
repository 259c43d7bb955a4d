use sidereal_core::angle::wrap_0_24h;
use sidereal_core::constants::DEGREES_PER_HOUR;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A time-angle held in hours, normalized to [0, 24) on construction.
///
/// This is the common representation behind [`GST`](super::GST) and
/// [`LST`](super::LST). NaN inputs stay NaN; everything else lands in
/// range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SiderealAngle {
    angle_hours: f64,
}

impl SiderealAngle {
    pub fn from_hours(hours: f64) -> Self {
        Self {
            angle_hours: wrap_0_24h(hours),
        }
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_hours(degrees / DEGREES_PER_HOUR)
    }

    pub fn hours(&self) -> f64 {
        self.angle_hours
    }

    pub fn degrees(&self) -> f64 {
        self.angle_hours * DEGREES_PER_HOUR
    }

    /// Hours the meridian must still rotate to reach a target right
    /// ascension; negative when the target has already crossed.
    pub fn hour_angle_to_target(&self, target_ra_hours: f64) -> f64 {
        self.hours() - target_ra_hours
    }
}

impl fmt::Display for SiderealAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}h", self.angle_hours)
    }
}
