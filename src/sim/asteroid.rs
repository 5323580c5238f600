//! Asteroid bounds

use crate::message::Coordinates;
use crate::settings::Boundary;

/// The rectangular grid robots move within
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asteroid {
    pub size: Coordinates,
    pub boundary: Boundary,
}

impl Asteroid {
    /// Asteroid spanning `[0, size]` on both axes
    pub fn new(size: Coordinates) -> Self {
        Self::with_boundary(size, Boundary::Origin)
    }

    pub fn with_boundary(size: Coordinates, boundary: Boundary) -> Self {
        Self { size, boundary }
    }

    /// Whether `coordinates` lie on the asteroid. Both bounds are inclusive.
    pub fn contains(&self, coordinates: Coordinates) -> bool {
        let (min_x, min_y) = match self.boundary {
            Boundary::Origin => (0, 0),
            Boundary::Symmetric => (-self.size.x, -self.size.y),
        };
        (min_x..=self.size.x).contains(&coordinates.x)
            && (min_y..=self.size.y).contains(&coordinates.y)
    }
}
