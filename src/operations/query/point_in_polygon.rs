use std::fmt;

use tracing::{debug, trace};

use super::BoundingBox;
use crate::geometry::closed_edges;
use crate::math::{sanitize_tolerance, Point2, DEFAULT_TOLERANCE, POLYGON_MINIMUM_POINTS};

/// Why a point was classified as outside without running the full test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Fewer than three vertices; nothing can be inside.
    NotAPolygon,
    /// The point lies outside the tolerance-padded bounding box.
    OutsideBoundingBox,
}

impl Rejection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotAPolygon => "not a polygon",
            Self::OutsideBoundingBox => "outside bounding box",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a point-in-polygon query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Containment {
    /// Whether the point is inside (or within tolerance of the boundary).
    pub inside: bool,
    /// Set when the answer came from an early rejection.
    pub reason: Option<Rejection>,
}

impl Containment {
    fn rejected(reason: Rejection) -> Self {
        Self {
            inside: false,
            reason: Some(reason),
        }
    }

    fn decided(inside: bool) -> Self {
        Self {
            inside,
            reason: None,
        }
    }
}

/// Tests whether a point lies inside a polygon using the even-odd rule.
///
/// The polygon is a closed loop; its bounding box, padded by the tolerance,
/// is checked first so that clearly outside points return early. A point whose
/// distance to any edge is at most the tolerance counts as inside, so with
/// zero tolerance a point lying exactly on an edge is inside.
///
/// Points are not validated. Non-finite coordinates give an unspecified
/// answer but never panic.
pub struct PointInPolygon<'a> {
    polygon: &'a [Point2],
    point: Point2,
    tolerance: f64,
}

impl<'a> PointInPolygon<'a> {
    /// Creates a new `PointInPolygon` query with zero tolerance.
    #[must_use]
    pub fn new(polygon: &'a [Point2], point: Point2) -> Self {
        Self {
            polygon,
            point,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Sets the boundary tolerance. Negative or NaN values mean zero.
    #[must_use]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = sanitize_tolerance(tolerance);
        self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> Containment {
        let point = &self.point;

        if self.polygon.len() < POLYGON_MINIMUM_POINTS {
            debug!(len = self.polygon.len(), "rejected: {}", Rejection::NotAPolygon);
            return Containment::rejected(Rejection::NotAPolygon);
        }

        if !BoundingBox::new(self.polygon)
            .tolerance(self.tolerance)
            .contains_point(point)
        {
            debug!(x = point.x, y = point.y, "rejected: {}", Rejection::OutsideBoundingBox);
            return Containment::rejected(Rejection::OutsideBoundingBox);
        }

        let mut inside = false;
        let mut on_boundary = false;
        for edge in closed_edges(self.polygon) {
            if edge.crosses_ray(point) {
                inside = !inside;
            }
            if !on_boundary && edge.distance_to(point) <= self.tolerance {
                on_boundary = true;
            }
        }

        trace!(
            x = point.x,
            y = point.y,
            inside,
            on_boundary,
            "point-in-polygon scan finished"
        );
        Containment::decided(inside || on_boundary)
    }
}
