use super::angle::SiderealAngle;
use super::gst::GST;
use crate::julian::JulianDate;
use sidereal_core::GeographicLongitude;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Local Sidereal Time: Greenwich Sidereal Time shifted to an observer's
/// meridian. Carries the longitude it was computed for.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LST {
    angle: SiderealAngle,
    longitude: GeographicLongitude,
}

impl LST {
    /// Computes the Local Sidereal Time for a Julian Date in UT and an
    /// observer longitude.
    pub fn from_julian_date(jd: &JulianDate, longitude: GeographicLongitude) -> Self {
        GST::from_julian_date(jd).to_lst(longitude)
    }

    pub fn from_hours(hours: f64, longitude: GeographicLongitude) -> Self {
        Self {
            angle: SiderealAngle::from_hours(hours),
            longitude,
        }
    }

    pub fn from_degrees(degrees: f64, longitude: GeographicLongitude) -> Self {
        Self {
            angle: SiderealAngle::from_degrees(degrees),
            longitude,
        }
    }

    pub fn angle(&self) -> SiderealAngle {
        self.angle
    }

    pub fn longitude(&self) -> GeographicLongitude {
        self.longitude
    }

    pub fn hours(&self) -> f64 {
        self.angle.hours()
    }

    pub fn degrees(&self) -> f64 {
        self.angle.degrees()
    }

    pub fn hour_angle_to_target(&self, target_ra_hours: f64) -> f64 {
        self.angle.hour_angle_to_target(target_ra_hours)
    }

    /// Shifts back to the Greenwich meridian by undoing the longitude
    /// offset.
    pub fn to_gst(&self) -> GST {
        GST::from_hours(self.hours() - self.longitude.hours())
    }
}

impl std::fmt::Display for LST {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LST {} at {}", self.angle, self.longitude)
    }
}

/// Local Sidereal Time in hours, in [0, 24), for a Julian Date in UT and a
/// longitude in degrees (East positive).
///
/// This is the plain-scalar entry point; [`LST::from_julian_date`] is the
/// typed equivalent. Non-finite inputs propagate as NaN.
pub fn local_sidereal_time(jd: f64, longitude_degrees: f64) -> f64 {
    LST::from_julian_date(
        &JulianDate::new(jd),
        GeographicLongitude::from_degrees(longitude_degrees),
    )
    .hours()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenario_greenwich() {
        // J2000.0 epoch at the Greenwich meridian: ~18h41m50s
        let lst = local_sidereal_time(2451545.0, 0.0);
        assert!(
            (lst - 18.6974).abs() < 1e-3,
            "LST at J2000.0, longitude 0 should be ~18.6974: {}",
            lst
        );
    }

    #[test]
    fn test_reference_scenario_eastern_meridian() {
        // 75°W is five hours behind Greenwich
        let lst = local_sidereal_time(2451545.0, -75.0);
        assert!(
            (lst - 13.6974).abs() < 1e-3,
            "LST at J2000.0, longitude -75 should be ~13.6974: {}",
            lst
        );
    }

    #[test]
    fn test_reference_scenario_date_line() {
        // 180°W drives the raw sum negative; the wrap must land at ~6.6974,
        // not at a negative hour
        let lst = local_sidereal_time(2451545.0, -180.0);
        assert!(
            (lst - 6.6974).abs() < 1e-3,
            "LST at J2000.0, longitude -180 should be ~6.6974: {}",
            lst
        );
        assert!(lst >= 0.0);
    }

    #[test]
    fn test_range_invariant() {
        let longitudes = [-900.0, -180.0, -75.0, -0.001, 0.0, 75.0, 180.0, 900.0];
        let dates = [2415020.5, 2451544.5, 2451545.0, 2459000.123, 2470000.9];
        for &jd in &dates {
            for &lon in &longitudes {
                let lst = local_sidereal_time(jd, lon);
                assert!(
                    (0.0..24.0).contains(&lst),
                    "LST(JD {}, {}°) out of range: {}",
                    jd,
                    lon,
                    lst
                );
            }
        }
    }

    #[test]
    fn test_longitude_periodicity() {
        // A full rotation of longitude is a full sidereal day
        for &lon in &[-170.0, -30.0, 0.0, 45.0, 155.0] {
            let base = local_sidereal_time(2451545.0, lon);
            let shifted = local_sidereal_time(2451545.0, lon + 360.0);
            assert!(
                (base - shifted).abs() < 1e-9,
                "longitude {} + 360 changed LST: {} vs {}",
                lon,
                base,
                shifted
            );
        }
    }

    #[test]
    fn test_monotonic_local_drift() {
        // Small forward steps in time advance LST, away from the 24h wrap
        let longitude = GeographicLongitude::from_degrees(-75.0);
        let base = JulianDate::new(2451545.0);
        let mut previous = LST::from_julian_date(&base, longitude).hours();
        for &delta_days in &[1e-6, 1e-4, 1e-2, 0.1] {
            let lst = LST::from_julian_date(&base.add_days(delta_days), longitude).hours();
            assert!(
                lst > previous,
                "LST should advance with time: {} then {}",
                previous,
                lst
            );
            previous = lst;
        }
    }

    #[test]
    fn test_lst_at_greenwich_equals_gst() {
        let jd = JulianDate::new(2459000.25);
        let gst = GST::from_julian_date(&jd);
        let lst = LST::from_julian_date(&jd, GeographicLongitude::greenwich());
        assert!(
            (lst.hours() - gst.hours()).abs() < 1e-14,
            "LST at Greenwich should equal GST: LST={}, GST={}",
            lst.hours(),
            gst.hours()
        );
    }

    #[test]
    fn test_longitude_correction() {
        // 15 degrees of longitude is one hour of sidereal time
        let jd = JulianDate::new(2451545.0);
        let greenwich = LST::from_julian_date(&jd, GeographicLongitude::greenwich());
        let east = LST::from_julian_date(&jd, GeographicLongitude::from_degrees(15.0));
        let west = LST::from_julian_date(&jd, GeographicLongitude::from_degrees(-15.0));

        assert!((east.hours() - greenwich.hours() - 1.0).abs() < 1e-12);
        assert!((west.hours() - greenwich.hours() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_to_gst_roundtrip() {
        let longitude = GeographicLongitude::from_degrees(-155.4783);
        let jd = JulianDate::new(2459000.75);

        let gst = GST::from_julian_date(&jd);
        let recovered = LST::from_julian_date(&jd, longitude).to_gst();
        assert!(
            (recovered.hours() - gst.hours()).abs() < 1e-12,
            "GST -> LST -> GST roundtrip failed: {} vs {}",
            gst.hours(),
            recovered.hours()
        );
    }

    #[test]
    fn test_non_finite_propagates() {
        assert!(local_sidereal_time(f64::NAN, 0.0).is_nan());
        assert!(local_sidereal_time(2451545.0, f64::NAN).is_nan());
        assert!(local_sidereal_time(f64::INFINITY, 0.0).is_nan());
    }

    #[test]
    fn test_accessors_and_display() {
        let longitude = GeographicLongitude::from_degrees(-75.0);
        let lst = LST::from_hours(12.0, longitude);

        assert_eq!(lst.hours(), 12.0);
        assert_eq!(lst.degrees(), 180.0);
        assert_eq!(LST::from_degrees(180.0, longitude).hours(), 12.0);
        assert_eq!(lst.angle().hours(), 12.0);
        assert_eq!(lst.longitude().degrees(), -75.0);
        assert_eq!(lst.hour_angle_to_target(10.0), 2.0);

        let display = format!("{}", lst);
        assert!(display.contains("LST"));
        assert!(display.contains("12.000000h"));
        assert!(display.contains("-75.0000"));
    }
}
