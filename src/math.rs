//! Mathematical structs and functions.

use cgmath::prelude::*;
use cgmath::Point2;

/// A 2D point
pub type Point2d = Point2<f64>;

/// Computes the gap between the perimeters of two circles.
/// Will be negative if the circles overlap.
///
/// # Parameters
/// * `a`, `a_radius` - The centre and radius of the first circle
/// * `b`, `b_radius` - The centre and radius of the second circle
pub fn circle_gap(a: Point2d, a_radius: f64, b: Point2d, b_radius: f64) -> f64 {
    a.distance(b) - a_radius - b_radius
}
