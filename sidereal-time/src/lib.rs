//! Local Sidereal Time from a Julian Date and an observer longitude.
//!
//! Sidereal time measures Earth's rotation against the vernal equinox
//! rather than the Sun; it is the right ascension currently crossing the
//! observer's meridian. This crate derives it in three normalized stages:
//! the Greenwich sidereal time at the preceding 0h UT boundary, the
//! Greenwich sidereal time at the requested instant, and finally the local
//! sidereal time at the observer's longitude. Each stage is reduced into
//! [0, 24) hours before the next term is added.
//!
//! # Usage
//!
//! ```
//! use sidereal_core::GeographicLongitude;
//! use sidereal_time::{local_sidereal_time, JulianDate, LST};
//!
//! // Free function over plain scalars
//! let hours = local_sidereal_time(2451545.0, -75.0);
//! assert!((hours - 13.6974).abs() < 1e-3);
//!
//! // Typed pipeline
//! let lst = LST::from_julian_date(
//!     &JulianDate::j2000(),
//!     GeographicLongitude::from_degrees(-75.0),
//! );
//! assert!((lst.hours() - hours).abs() < 1e-12);
//! ```
//!
//! Inputs are taken as-is: the Julian Date is assumed to already be a valid
//! continuous UT value, and non-finite inputs propagate as NaN output
//! rather than being rejected. The `validated` constructors on
//! [`JulianDate`] and [`sidereal_core::GeographicLongitude`] are the opt-in
//! rejecting surface.

pub mod julian;
pub mod sidereal;

pub use julian::JulianDate;
pub use sidereal::{local_sidereal_time, SiderealAngle, GST, LST};
