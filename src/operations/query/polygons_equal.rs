use tracing::{debug, trace};

use crate::math::point_2d::points_equal;
use crate::math::Point2;

/// Tests whether two point sequences describe the same closed polygon,
/// allowing a different starting vertex and a reversed winding direction.
///
/// The direction is guessed from the vertex after the matched start: if it
/// differs, the second polygon is assumed to run backwards, and that guess is
/// not checked on its own. A plain reversal always compares equal, but a
/// polygon that is both reversed and rotated may not.
pub struct PolygonsEqual<'a> {
    first: &'a [Point2],
    second: &'a [Point2],
}

impl<'a> PolygonsEqual<'a> {
    /// Creates a new `PolygonsEqual` query.
    #[must_use]
    pub fn new(first: &'a [Point2], second: &'a [Point2]) -> Self {
        Self { first, second }
    }

    /// Executes the comparison.
    #[must_use]
    pub fn execute(&self) -> bool {
        let (a, b) = (self.first, self.second);
        if a.len() != b.len() {
            return false;
        }

        let Some(start) = a.first() else {
            return false;
        };
        let Some(offset) = b.iter().position(|p| points_equal(p, start)) else {
            trace!("first vertex not found in second polygon");
            return false;
        };

        let n = b.len();
        let forward = a
            .get(1)
            .is_none_or(|next| points_equal(next, &b[(offset + 1) % n]));
        let step = if forward {
            to_isize(offset)
        } else {
            -to_isize(offset)
        };
        let len = to_isize(n);

        let equal = a.iter().enumerate().all(|(i, p)| {
            let j = ((to_isize(i) + step) % len).unsigned_abs();
            points_equal(p, &b[j])
        });
        if !equal && !forward {
            debug!(offset, "polygons differ under the assumed reversed direction");
        }
        trace!(offset, forward, equal, "compared polygons");
        equal
    }
}

/// Slice indices always fit in `isize`.
#[allow(clippy::cast_possible_wrap)]
fn to_isize(index: usize) -> isize {
    index as isize
}
