use crate::math::{circle_gap, Point2d};
use crate::util::Interval;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The obstacles analysed by the binary, in normalized units.
pub const REFERENCE_OBSTACLES: [Obstacle; 9] = [
    Obstacle::new(2.0, 2.0, 20.0),
    Obstacle::new(3.0, 2.0, 10.0),
    Obstacle::new(0.5, 0.5, 20.0),
    Obstacle::new(1.25, 4.0, 10.0),
    Obstacle::new(3.5, 3.5, 15.0),
    Obstacle::new(4.5, 1.25, 10.0),
    Obstacle::new(2.75, 0.5, 10.0),
    Obstacle::new(0.5, 3.0, 10.0),
    Obstacle::new(2.5, 4.75, 10.0),
];

/// A circular obstacle, in normalized input units.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Obstacle {
    /// The x coordinate of the centre.
    pub x: f64,
    /// The y coordinate of the centre.
    pub y: f64,
    /// The radius.
    pub r: f64,
}

/// Factors converting normalized units to the working plane.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scale {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

/// An obstacle in working plane coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaledObstacle {
    pub centre: Point2d,
    pub radius: f64,
}

impl Obstacle {
    /// Creates a new obstacle.
    pub const fn new(x: f64, y: f64, r: f64) -> Self {
        Self { x, y, r }
    }

    /// Converts the obstacle to working plane coordinates.
    pub fn scaled(&self, scale: &Scale) -> ScaledObstacle {
        ScaledObstacle {
            centre: Point2d::new(self.x * scale.x, self.y * scale.y),
            radius: self.r * scale.r,
        }
    }
}

impl Scale {
    /// Coordinates are scaled by 200 onto a 1000 wide plane,
    /// radii are already in plane units.
    pub const REFERENCE: Scale = Scale::new(200.0, 200.0, 1.0);

    pub const fn new(x: f64, y: f64, r: f64) -> Self {
        Self { x, y, r }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::REFERENCE
    }
}

impl ScaledObstacle {
    /// Gap between the perimeters of the two obstacles.
    pub fn gap_to(&self, other: &ScaledObstacle) -> f64 {
        circle_gap(self.centre, self.radius, other.centre, other.radius)
    }

    /// The horizontal extents of the obstacle.
    pub fn x_extent(&self) -> Interval<f64> {
        Interval::disc(self.centre.x, self.radius)
    }

    /// The vertical extents of the obstacle.
    pub fn y_extent(&self) -> Interval<f64> {
        Interval::disc(self.centre.y, self.radius)
    }
}
