//! Miscellaneous utility structs and functions.

use std::fmt::Debug;

use cgmath::num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An interval on the real number line.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<T> {
    pub min: T,
    pub max: T,
}

impl<T> Interval<T> {
    /// Creates a new interval.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: Float> Interval<T> {
    /// Creates an interval with the given centre and radius.
    pub fn disc(centre: T, radius: T) -> Self {
        Self {
            min: centre - radius,
            max: centre + radius,
        }
    }

    /// Computes the clearance between each end of this interval
    /// and the matching end of an enclosing interval, as `[low, high]`.
    /// Either value will be negative if this interval pokes out of `outer` on that side.
    pub fn clearance_within(&self, outer: &Self) -> [T; 2] {
        [self.min - outer.min, outer.max - self.max]
    }
}

impl<T: Debug> Debug for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Interval({:?}, {:?})", &self.min, &self.max)
    }
}

/// Keeps whichever of `best` and `candidate` has the strictly smaller key.
///
/// An empty `best` behaves as if its key were positive infinity, so a
/// candidate is only taken if its key is finite or negative infinity.
/// Ties and NaN keys leave `best` untouched, which means folding a sequence
/// through this function selects the *first* minimum.
pub fn keep_smaller<T>(best: Option<T>, candidate: T, key: impl Fn(&T) -> f64) -> Option<T> {
    let current = best.as_ref().map_or(f64::INFINITY, &key);
    if key(&candidate) < current {
        Some(candidate)
    } else {
        best
    }
}
