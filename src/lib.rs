//! Point-in-polygon, bounding box and polygon equality queries over 2D points.
//!
//! ```
//! use polyprobe::math::Point2;
//! use polyprobe::operations::query::{PointInPolygon, Rejection};
//!
//! let square = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ];
//! assert!(PointInPolygon::new(&square, Point2::new(5.0, 5.0)).execute().inside);
//!
//! let far = PointInPolygon::new(&square, Point2::new(15.0, 5.0)).execute();
//! assert_eq!(far.reason, Some(Rejection::OutsideBoundingBox));
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{PolyprobeError, Result};
