use crate::Arbitrary;
use crate::Coordinate;

/// A single anatomical 2D keypoint on a detected hand.
///
/// Coordinates are image-relative in [0, 1] with y growing downward, so a
/// raised fingertip has a *smaller* y than its knuckle. The estimator's z
/// channel is dropped upstream. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    x: Coordinate,
    y: Coordinate,
}

impl Landmark {
    pub fn x(&self) -> Coordinate {
        self.x
    }
    pub fn y(&self) -> Coordinate {
        self.y
    }
    /// Euclidean distance in normalized coordinate space. Pure and total.
    pub fn distance(&self, other: &Self) -> Coordinate {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl From<(Coordinate, Coordinate)> for Landmark {
    fn from((x, y): (Coordinate, Coordinate)) -> Self {
        Self { x, y }
    }
}

impl From<[Coordinate; 2]> for Landmark {
    fn from([x, y]: [Coordinate; 2]) -> Self {
        Self { x, y }
    }
}

impl Arbitrary for Landmark {
    fn random() -> Self {
        Self {
            x: rand::random::<Coordinate>(),
            y: rand::random::<Coordinate>(),
        }
    }
}

impl std::fmt::Display for Landmark {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
