use super::angle::SiderealAngle;
use crate::julian::JulianDate;
use sidereal_core::angle::wrap_0_24h;
use sidereal_core::constants::SOLAR_TO_SIDEREAL;
use sidereal_core::GeographicLongitude;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Mean sidereal time at Greenwich at 0h UT, as a polynomial in Julian
// centuries since J2000.0 (hours). The coefficients encode the mean
// sidereal-to-solar drift rate and its secular change; they are fixed
// astronomical constants.
const GST_0H_BASE_HOURS: f64 = 6.697374558;
const GST_0H_RATE_HOURS_PER_CENTURY: f64 = 2400.051336;
const GST_0H_ACCEL_HOURS_PER_CENTURY2: f64 = 0.000025862;

/// Greenwich Sidereal Time: the local sidereal time at the zero meridian.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GST(SiderealAngle);

impl GST {
    /// Computes the Greenwich Sidereal Time for a Julian Date in UT.
    ///
    /// The sidereal time at the preceding 0h UT boundary comes from the
    /// polynomial above; the hours elapsed since that boundary are then
    /// converted from solar to sidereal rate and added. Both the 0h value
    /// and the sum are wrapped into [0, 24).
    pub fn from_julian_date(jd: &JulianDate) -> Self {
        let midnight = jd.at_previous_midnight();
        let elapsed_hours = jd.hours_since_midnight();

        let t = midnight.centuries_since_j2000();
        // Horner form of the 0h UT polynomial
        let gst_0h = GST_0H_BASE_HOURS
            + t * (GST_0H_RATE_HOURS_PER_CENTURY + t * GST_0H_ACCEL_HOURS_PER_CENTURY2);

        let gst = wrap_0_24h(gst_0h) + elapsed_hours * SOLAR_TO_SIDEREAL;
        Self(SiderealAngle::from_hours(gst))
    }

    pub fn from_hours(hours: f64) -> Self {
        Self(SiderealAngle::from_hours(hours))
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self(SiderealAngle::from_degrees(degrees))
    }

    /// Greenwich Sidereal Time at the J2000.0 epoch.
    pub fn j2000() -> Self {
        Self::from_julian_date(&JulianDate::j2000())
    }

    pub fn angle(&self) -> SiderealAngle {
        self.0
    }

    pub fn hours(&self) -> f64 {
        self.0.hours()
    }

    pub fn degrees(&self) -> f64 {
        self.0.degrees()
    }

    pub fn hour_angle_to_target(&self, target_ra_hours: f64) -> f64 {
        self.0.hour_angle_to_target(target_ra_hours)
    }

    /// Shifts this Greenwich time to an observer's meridian.
    pub fn to_lst(&self, longitude: GeographicLongitude) -> super::LST {
        super::LST::from_hours(self.hours() + longitude.hours(), longitude)
    }
}

impl std::fmt::Display for GST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GST {}", self.0)
    }
}
