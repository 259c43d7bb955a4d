/// Floating-point remainder via `libm`, used by the angle wrapping
/// functions. Well-defined for all finite inputs; NaN propagates.
#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}
