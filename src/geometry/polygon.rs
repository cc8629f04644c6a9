use crate::error::{GeometryError, Result};
use crate::math::point_2d::is_finite_point;
use crate::math::segment_2d::{point_to_segment_dist, ray_crosses_edge};
use crate::math::{Point2, POLYGON_MINIMUM_POINTS};

/// A directed edge between two polygon vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Point2,
    pub end: Point2,
}

impl Edge {
    /// Creates a new edge from `start` to `end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns `true` if a horizontal ray from `point` towards +x crosses this edge.
    #[must_use]
    pub fn crosses_ray(&self, point: &Point2) -> bool {
        ray_crosses_edge(point, &self.start, &self.end)
    }

    /// Minimum distance from `point` to this edge.
    #[must_use]
    pub fn distance_to(&self, point: &Point2) -> f64 {
        point_to_segment_dist(point, &self.start, &self.end)
    }
}

/// Iterates the closed loop of edges `(points[i], points[i - 1])`.
///
/// Indices wrap, so the first edge runs from `points[0]` back to the last
/// vertex. Yields nothing for an empty slice and a single zero-length edge
/// for one point.
pub fn closed_edges(points: &[Point2]) -> impl Iterator<Item = Edge> + '_ {
    let n = points.len();
    points
        .iter()
        .enumerate()
        .map(move |(i, &start)| Edge::new(start, points[(i + n - 1) % n]))
}

/// An ordered sequence of points forming a closed loop.
///
/// The last point implicitly connects back to the first. `PartialEq` compares
/// vertex by vertex; use [`PolygonsEqual`](crate::operations::query::PolygonsEqual)
/// for equality up to rotation and reversal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point2>,
}

impl Polygon {
    /// Wraps `points` without validating them.
    ///
    /// Queries are defined for degenerate input, so this never fails.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Creates a polygon, checking that it has at least three finite points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` or `GeometryError::NonFinitePoint`.
    pub fn try_new(points: Vec<Point2>) -> Result<Self> {
        if points.len() < POLYGON_MINIMUM_POINTS {
            return Err(GeometryError::TooFewPoints {
                count: points.len(),
            }
            .into());
        }
        if let Some(index) = points.iter().position(|p| !is_finite_point(p)) {
            return Err(GeometryError::NonFinitePoint { index }.into());
        }
        Ok(Self { points })
    }

    /// Creates a polygon from raw coordinate pairs, as received from a caller
    /// that has not typed its input yet.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArity` if an entry does not hold exactly
    /// two numbers, otherwise the same errors as [`Polygon::try_new`].
    pub fn try_from_coords<P: AsRef<[f64]>>(coords: &[P]) -> Result<Self> {
        let points = coords
            .iter()
            .enumerate()
            .map(|(index, c)| match *c.as_ref() {
                [x, y] => Ok(Point2::new(x, y)),
                ref other => Err(GeometryError::InvalidArity {
                    index,
                    len: other.len(),
                }),
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Self::try_new(points)
    }

    /// The vertices in order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates the closed loop of edges. See [`closed_edges`].
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        closed_edges(&self.points)
    }

    /// Returns a copy starting at vertex `start` (taken modulo the length).
    #[must_use]
    pub fn rotated(&self, start: usize) -> Self {
        if self.points.is_empty() {
            return self.clone();
        }
        let start = start % self.points.len();
        let mut points = Vec::with_capacity(self.points.len());
        points.extend_from_slice(&self.points[start..]);
        points.extend_from_slice(&self.points[..start]);
        Self { points }
    }

    /// Returns a copy traversed in the opposite winding direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            points: self.points.iter().rev().copied().collect(),
        }
    }
}

impl AsRef<[Point2]> for Polygon {
    fn as_ref(&self) -> &[Point2] {
        &self.points
    }
}

impl From<Vec<Point2>> for Polygon {
    fn from(points: Vec<Point2>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point2> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PolyprobeError;

    fn square() -> Polygon {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ])
    }

    #[test]
    fn edges_wrap_around() {
        let edges: Vec<Edge> = square().edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0].start, Point2::new(0.0, 0.0));
        assert_eq!(edges[0].end, Point2::new(0.0, 10.0));
        assert_eq!(edges[2].start, Point2::new(10.0, 10.0));
        assert_eq!(edges[2].end, Point2::new(10.0, 0.0));
    }

    #[test]
    fn edges_of_empty_and_single() {
        assert_eq!(closed_edges(&[]).count(), 0);
        let single = [Point2::new(1.0, 1.0)];
        let edges: Vec<Edge> = closed_edges(&single).collect();
        assert_eq!(edges, vec![Edge::new(single[0], single[0])]);
    }

    #[test]
    fn edge_distance() {
        let edge = Edge::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        assert!((edge.distance_to(&Point2::new(5.0, 3.0)) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn rotated_starts_at_index() {
        let rotated = square().rotated(2);
        assert_eq!(rotated.points()[0], Point2::new(10.0, 10.0));
        assert_eq!(rotated.points()[3], Point2::new(10.0, 0.0));
        assert_eq!(square().rotated(4), square());
        assert_eq!(square().rotated(6), square().rotated(2));
    }

    #[test]
    fn rotated_empty() {
        assert!(Polygon::default().rotated(3).is_empty());
    }

    #[test]
    fn reversed_order() {
        let reversed = square().reversed();
        assert_eq!(reversed.points()[0], Point2::new(0.0, 10.0));
        assert_eq!(reversed.reversed(), square());
    }

    #[test]
    fn try_new_accepts_triangle() {
        let tri = Polygon::try_new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ])
        .unwrap();
        assert_eq!(tri.len(), 3);
    }

    #[test]
    fn try_new_too_few_points() {
        let err = Polygon::try_new(vec![Point2::new(0.0, 0.0)]).unwrap_err();
        assert!(matches!(
            err,
            PolyprobeError::Geometry(GeometryError::TooFewPoints { count: 1 })
        ));
    }

    #[test]
    fn try_new_non_finite() {
        let err = Polygon::try_new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(f64::INFINITY, 1.0),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            PolyprobeError::Geometry(GeometryError::NonFinitePoint { index: 2 })
        ));
    }

    #[test]
    fn try_from_coords_ok() {
        let poly = Polygon::try_from_coords(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]])
            .unwrap();
        assert_eq!(poly, square());
    }

    #[test]
    fn try_from_coords_bad_arity() {
        let coords: Vec<Vec<f64>> = vec![vec![0.0, 0.0], vec![1.0, 0.0, 2.0], vec![0.0, 1.0]];
        let err = Polygon::try_from_coords(&coords).unwrap_err();
        assert!(matches!(
            err,
            PolyprobeError::Geometry(GeometryError::InvalidArity { index: 1, len: 3 })
        ));
    }

    #[test]
    fn collects_from_iterator() {
        let poly: Polygon = square().points().iter().copied().collect();
        assert_eq!(poly, square());
    }
}
