use super::Point2;

/// Even-odd crossing test for one edge.
///
/// Casts a horizontal ray from `point` and returns `true` if the edge
/// `a → b` crosses it on the side of increasing x. The edge must strictly
/// straddle `point.y`, so horizontal edges never count and a vertex lying on
/// the ray is counted for exactly one of its two edges.
#[must_use]
pub fn ray_crosses_edge(point: &Point2, a: &Point2, b: &Point2) -> bool {
    if (point.y < a.y) == (point.y < b.y) {
        return false;
    }
    let slope = (b.x - a.x) / (b.y - a.y);
    let x_cross = slope * (point.y - a.y) + a.x;
    point.x < x_cross
}

/// Returns the minimum distance from `point` to the segment `a → b`.
#[must_use]
pub fn point_to_segment_dist(point: &Point2, a: &Point2, b: &Point2) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();

    if len_sq == 0.0 {
        // Degenerate segment (zero length).
        return nalgebra::distance(point, a);
    }

    // Project onto the infinite line, clamp to the segment.
    let t = ((point - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    nalgebra::distance(point, &(a + ab * t))
}
