pub mod point_2d;
pub mod segment_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Tolerance used by queries when the caller does not supply one.
pub const DEFAULT_TOLERANCE: f64 = 0.0;

/// Fewest vertices that still enclose an area.
pub const POLYGON_MINIMUM_POINTS: usize = 3;

/// Clamps a caller-supplied tolerance to a usable value.
///
/// Negative and NaN tolerances collapse to zero.
#[must_use]
pub(crate) fn sanitize_tolerance(tolerance: f64) -> f64 {
    tolerance.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_positive() {
        assert!((sanitize_tolerance(2.5) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn sanitize_clamps_negative_and_nan() {
        assert!(sanitize_tolerance(-1.0).abs() < f64::EPSILON);
        assert!(sanitize_tolerance(f64::NAN).abs() < f64::EPSILON);
    }
}
