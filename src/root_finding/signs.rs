//! Sign utilities for root-finding algorithms.
//! - `opposite_sign` : `true` if values have strictly opposite sign

/// Returns `true` if `x` and `y` have strictly opposite signs.
///
/// Equivalent to `x * y < 0.0` without the product, so tiny values
/// cannot underflow to zero. Zeros and NaN never count as a sign.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    (x < 0.0 && y > 0.0) || (x > 0.0 && y < 0.0)
}
