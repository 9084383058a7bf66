//! Scalar math helpers for the toolkit.

/// Multiply degrees by this to get radians.
pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;

/// Convert an angle in degrees to radians.
///
/// # Example
///
/// ```
/// use mullion_core::math::to_radians;
///
/// assert!((to_radians(180.0) - std::f32::consts::PI).abs() < 1e-6);
/// ```
pub const fn to_radians(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_radians() {
        assert!((to_radians(0.0)).abs() < 1e-6);
        assert!((to_radians(90.0) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((to_radians(360.0) - std::f32::consts::TAU).abs() < 1e-5);
    }
}
