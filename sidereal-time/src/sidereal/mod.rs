mod angle;
mod conversions;
mod gst;
mod lst;

pub use angle::SiderealAngle;
pub use gst::GST;
pub use lst::LST;

pub use lst::local_sidereal_time;
