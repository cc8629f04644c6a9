use thiserror::Error;

/// Top-level error type for polyprobe.
#[derive(Debug, Error)]
pub enum PolyprobeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while building geometric values from raw input.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("a polygon needs at least 3 points, got {count}")]
    TooFewPoints { count: usize },

    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },

    #[error("point {index} has {len} coordinates, expected 2")]
    InvalidArity { index: usize, len: usize },
}

/// Errors related to queries.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`PolyprobeError`].
pub type Result<T> = std::result::Result<T, PolyprobeError>;
