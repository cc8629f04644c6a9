use crate::error::{OperationError, Result};
use crate::geometry::Polygon;
use crate::math::{sanitize_tolerance, Point2, DEFAULT_TOLERANCE};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb {
    /// Returns `true` if `point` lies within the box, boundary included.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// The four corners, starting at `min` and running through `(max.x, min.y)`.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [
            self.min,
            Point2::new(self.max.x, self.min.y),
            self.max,
            Point2::new(self.min.x, self.max.y),
        ]
    }

    /// The box as a 4-point rectangle in [`Aabb::corners`] order.
    #[must_use]
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.corners().to_vec())
    }
}

/// Computes the axis-aligned bounding box of a point sequence, padded
/// outward by a tolerance on every side.
pub struct BoundingBox<'a> {
    points: &'a [Point2],
    tolerance: f64,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query with zero tolerance.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self {
            points,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Sets the padding added on every side. Negative or NaN values mean zero.
    #[must_use]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = sanitize_tolerance(tolerance);
        self
    }

    /// Computes the padded min/max extents in a single pass.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if there are no points.
    pub fn extents(&self) -> Result<Aabb> {
        let (first, rest) = self.points.split_first().ok_or_else(|| {
            OperationError::InvalidInput("bounding box of an empty point sequence".into())
        })?;

        let (mut min, mut max) = (*first, *first);
        for p in rest {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }

        let t = self.tolerance;
        Ok(Aabb {
            min: Point2::new(min.x - t, min.y - t),
            max: Point2::new(max.x + t, max.y + t),
        })
    }

    /// Executes the query, returning the bounding rectangle as a polygon
    /// `(minX,minY), (maxX,minY), (maxX,maxY), (minX,maxY)`.
    ///
    /// A single point yields a zero-area rectangle, still padded.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if there are no points.
    pub fn execute(&self) -> Result<Polygon> {
        Ok(self.extents()?.to_polygon())
    }

    /// Returns `true` if `point` falls inside the padded extents, boundary
    /// included. An empty point sequence contains nothing.
    #[must_use]
    pub fn contains_point(&self, point: &Point2) -> bool {
        self.extents().is_ok_and(|aabb| aabb.contains(point))
    }
}
