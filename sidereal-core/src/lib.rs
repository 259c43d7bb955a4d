//! Foundation types for sidereal time calculations.
//!
//! This crate provides the pieces shared by the time-facing crates:
//!
//! - [`constants`]: named astronomical constants (J2000.0 epoch, Julian
//!   century length, solar-to-sidereal rate)
//! - [`angle`]: normalization of time-angles into the [0, 24) hour range
//! - [`longitude`]: the [`GeographicLongitude`] observer value type
//! - [`errors`]: the error type returned by validating constructors
//!
//! The computations themselves live in `sidereal-time`; everything here is
//! a plain value type or a pure helper with no state.

pub mod angle;
pub mod constants;
pub mod errors;
pub mod longitude;
pub mod math;

pub use errors::{SiderealError, SiderealResult};
pub use longitude::GeographicLongitude;
