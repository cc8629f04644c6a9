pub mod polygon;

pub use polygon::{closed_edges, Edge, Polygon};
