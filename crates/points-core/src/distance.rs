//! Euclidean distance between points
//!
//! The by-value and by-reference forms reproduce native `int` arithmetic:
//! coordinate differences, their absolute values, squares and the final sum
//! all wrap in 32 bits before the conversion to `f64`. Inputs far enough
//! apart to overflow therefore give a wrapped (possibly `NaN`) result rather
//! than a panic. [`distance_wide`] is the overflow-free variant.

use crate::point::Point;

/// Distance between two points passed by value.
///
/// `sqrt(|x1 - x2|^2 + |y1 - y2|^2)` with 32-bit wrapping intermediates.
///
/// # Example
///
/// ```rust
/// use points_core::{distance, Point};
///
/// assert_eq!(distance(Point::new(0, 0), Point::new(3, 4)), 5.0);
/// assert_eq!(distance(Point::new(-3, -4), Point::new(0, 0)), 5.0);
/// ```
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x.wrapping_sub(b.x).wrapping_abs();
    let dy = a.y.wrapping_sub(b.y).wrapping_abs();
    let squared = dx.wrapping_mul(dx).wrapping_add(dy.wrapping_mul(dy));
    f64::from(squared).sqrt()
}

/// Distance between two points passed by reference.
#[inline]
pub fn distance_ref(a: &Point, b: &Point) -> f64 {
    distance(*a, *b)
}

/// Distance computed with widened intermediates.
///
/// Agrees with [`distance`] whenever the squared distance fits in an `i32`,
/// and stays exact (up to the final `f64` rounding) for every other pair.
pub fn distance_wide(a: Point, b: Point) -> f64 {
    let dx = u128::from(a.x.abs_diff(b.x));
    let dy = u128::from(a.y.abs_diff(b.y));
    ((dx * dx + dy * dy) as f64).sqrt()
}
