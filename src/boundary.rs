use crate::obstacle::ScaledObstacle;
use crate::util::Interval;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the four edges of the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Edge {
    /// The edge at `y = 0`.
    Front,
    /// The edge at `y = L`.
    Back,
    /// The edge at `x = 0`.
    Left,
    /// The edge at `x = L`.
    Right,
}

impl Edge {
    /// All edges, in reporting order.
    pub const ALL: [Edge; 4] = [Edge::Front, Edge::Back, Edge::Left, Edge::Right];

    /// The position of this edge within [Edge::ALL].
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A square region with a corner at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Boundary {
    /// The side length.
    pub size: f64,
}

/// The clearance from an obstacle's perimeter to each edge of the boundary.
/// Negative values mean the obstacle crosses that edge.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgeClearances([f64; 4]);

impl Boundary {
    pub const fn new(size: f64) -> Self {
        Self { size }
    }

    fn extent(&self) -> Interval<f64> {
        Interval::new(0.0, self.size)
    }

    /// Computes the clearance between the obstacle and each edge.
    pub fn clearances(&self, obstacle: &ScaledObstacle) -> EdgeClearances {
        let [front, back] = obstacle.y_extent().clearance_within(&self.extent());
        let [left, right] = obstacle.x_extent().clearance_within(&self.extent());
        EdgeClearances([front, back, left, right])
    }
}

impl EdgeClearances {
    /// The clearance to a single edge.
    pub fn get(&self, edge: Edge) -> f64 {
        self.0[edge.index()]
    }

    /// Iterates over the clearances in [Edge::ALL] order.
    pub fn iter(&self) -> impl Iterator<Item = (Edge, f64)> + '_ {
        Edge::ALL.into_iter().map(|edge| (edge, self.get(edge)))
    }

    /// Whether the obstacle lies entirely inside the boundary.
    pub fn is_inside(&self) -> bool {
        self.0.iter().all(|clearance| *clearance >= 0.0)
    }
}
