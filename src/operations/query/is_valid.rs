use crate::math::point_2d::is_valid_polygon;

/// Validates raw coordinate input before it is handed to the other queries.
///
/// Each entry must hold exactly two finite numbers and there must be at least
/// three entries.
pub struct IsValid<'a, P> {
    coords: &'a [P],
}

impl<'a, P: AsRef<[f64]>> IsValid<'a, P> {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(coords: &'a [P]) -> Self {
        Self { coords }
    }

    /// Executes the validation, returning `true` if the input is a valid polygon.
    #[must_use]
    pub fn execute(&self) -> bool {
        is_valid_polygon(self.coords)
    }
}
