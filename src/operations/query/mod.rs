mod bounding_box;
mod is_valid;
mod point_in_polygon;
mod polygons_equal;

pub use bounding_box::{Aabb, BoundingBox};
pub use is_valid::IsValid;
pub use point_in_polygon::{Containment, PointInPolygon, Rejection};
pub use polygons_equal::PolygonsEqual;
