use super::{Point2, POLYGON_MINIMUM_POINTS};

/// Exact coordinate equality, no tolerance.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn points_equal(a: &Point2, b: &Point2) -> bool {
    a.x == b.x && a.y == b.y
}

/// Returns `true` if both coordinates of `point` are finite.
#[must_use]
pub fn is_finite_point(point: &Point2) -> bool {
    point.x.is_finite() && point.y.is_finite()
}

/// Checks whether raw coordinates describe a point: exactly two finite numbers.
#[must_use]
pub fn is_valid_point(coords: &[f64]) -> bool {
    coords.len() == 2 && coords.iter().all(|c| c.is_finite())
}

/// Checks whether raw coordinates describe a polygon: at least
/// [`POLYGON_MINIMUM_POINTS`] entries, each a valid point.
#[must_use]
pub fn is_valid_polygon<P: AsRef<[f64]>>(points: &[P]) -> bool {
    points.len() >= POLYGON_MINIMUM_POINTS && points.iter().all(|p| is_valid_point(p.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_points() {
        assert!(points_equal(&Point2::new(1.0, 2.0), &Point2::new(1.0, 2.0)));
    }

    #[test]
    fn nearly_equal_points_differ() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(1.0 + f64::EPSILON, 2.0);
        assert!(!points_equal(&a, &b));
    }

    #[test]
    fn negative_zero_equals_zero() {
        assert!(points_equal(&Point2::new(0.0, -0.0), &Point2::new(-0.0, 0.0)));
    }

    #[test]
    fn valid_point_arity() {
        assert!(is_valid_point(&[1.0, 2.0]));
        assert!(!is_valid_point(&[1.0]));
        assert!(!is_valid_point(&[1.0, 2.0, 3.0]));
        assert!(!is_valid_point(&[]));
    }

    #[test]
    fn valid_point_rejects_non_finite() {
        assert!(!is_valid_point(&[f64::NAN, 0.0]));
        assert!(!is_valid_point(&[0.0, f64::INFINITY]));
        assert!(!is_valid_point(&[f64::NEG_INFINITY, 0.0]));
    }

    #[test]
    fn finite_point() {
        assert!(is_finite_point(&Point2::new(-3.0, 4.0)));
        assert!(!is_finite_point(&Point2::new(f64::NAN, 4.0)));
    }

    #[test]
    fn valid_polygon() {
        let tri = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
        assert!(is_valid_polygon(&tri));
    }

    #[test]
    fn polygon_too_short() {
        let seg = [[0.0, 0.0], [1.0, 0.0]];
        assert!(!is_valid_polygon(&seg));
        let empty: [[f64; 2]; 0] = [];
        assert!(!is_valid_polygon(&empty));
    }

    #[test]
    fn polygon_with_bad_point() {
        let pts: Vec<Vec<f64>> = vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0]];
        assert!(!is_valid_polygon(&pts));
        let pts = [[0.0, 0.0], [1.0, f64::NAN], [0.0, 1.0]];
        assert!(!is_valid_polygon(&pts));
    }
}
