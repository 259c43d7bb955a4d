//! The Julian Date value type.
//!
//! A Julian Date is a continuous real count of days since the Julian epoch,
//! used as a uniform timekeeping scale in astronomy. The day boundary falls
//! at noon UT, so civil midnight sits at a half-integer Julian Date; the
//! sidereal pipeline leans on that convention to recover the preceding 0h
//! UT boundary with a shifted floor.
//!
//! Values here are taken to be UT. Calendar conversion, time zones and the
//! UT1/UTC offset are the responsibility of whatever produced the value.

use sidereal_core::constants::{
    DAYS_PER_JULIAN_CENTURY, HOURS_PER_DAY, J2000_JD, SECONDS_PER_DAY_F64,
};
use sidereal_core::errors::{SiderealError, SiderealResult};
use std::fmt;

/// A Julian Date in UT, stored as a single continuous day count.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    days: f64,
}

impl JulianDate {
    /// Creates a Julian Date from a day count without validation.
    ///
    /// Non-finite values are accepted and propagate as NaN through the
    /// sidereal computation.
    pub fn new(days: f64) -> Self {
        Self { days }
    }

    /// Creates a Julian Date, rejecting NaN and infinity.
    ///
    /// # Errors
    ///
    /// Returns [`SiderealError::NotFinite`] for non-finite day counts.
    pub fn validated(days: f64) -> SiderealResult<Self> {
        if !days.is_finite() {
            return Err(SiderealError::not_finite("julian date", days));
        }
        Ok(Self { days })
    }

    /// The J2000.0 epoch, 2000 January 1 at 12:00 UT.
    pub fn j2000() -> Self {
        Self { days: J2000_JD }
    }

    /// The raw day count.
    pub fn value(&self) -> f64 {
        self.days
    }

    /// Returns this instant shifted by `days`. Negative values subtract.
    pub fn add_days(&self, days: f64) -> Self {
        Self {
            days: self.days + days,
        }
    }

    /// Returns this instant shifted by `seconds`. Negative values subtract.
    pub fn add_seconds(&self, seconds: f64) -> Self {
        self.add_days(seconds / SECONDS_PER_DAY_F64)
    }

    /// The most recent preceding (or coincident) 0h UT boundary.
    ///
    /// Julian Dates change at noon UT, so subtracting half a day moves the
    /// flooring boundary to civil midnight; re-adding the half day lands on
    /// the 0h instant itself.
    pub fn at_previous_midnight(&self) -> Self {
        Self {
            days: (self.days - 0.5).floor() + 0.5,
        }
    }

    /// Elapsed civil hours since the preceding 0h UT boundary, in [0, 24)
    /// for finite values.
    pub fn hours_since_midnight(&self) -> f64 {
        (self.days - self.at_previous_midnight().days) * HOURS_PER_DAY
    }

    /// Julian centuries elapsed since the J2000.0 epoch.
    pub fn centuries_since_j2000(&self) -> f64 {
        (self.days - J2000_JD) / DAYS_PER_JULIAN_CENTURY
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.days)
    }
}

impl From<f64> for JulianDate {
    fn from(days: f64) -> Self {
        Self::new(days)
    }
}
