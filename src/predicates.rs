//! Exact geometric predicates.
//!
//! Collinearity is classified by comparing the cross product against exactly
//! zero. No tolerance is applied, so near-degenerate inputs are classified by
//! whatever the floating-point arithmetic produces.

use crate::primitives::Point2;
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear (zero area).
    Collinear,
}

/// Cross product of vectors OA and OB.
///
/// Equals twice the signed area of triangle OAB: positive if counter-clockwise,
/// negative if clockwise, zero if collinear.
#[inline]
pub fn cross<F: Float>(o: Point2<F>, a: Point2<F>, b: Point2<F>) -> F {
    (a - o).cross(b - o)
}

/// Computes the orientation of three points.
///
/// Returns the orientation of the triangle formed by points `a`, `b`, `c`:
/// - `CounterClockwise` if `c` is to the left of the line from `a` to `b`
/// - `Clockwise` if `c` is to the right of the line from `a` to `b`
/// - `Collinear` if the cross product is exactly zero
///
/// # Example
///
/// ```
/// use giftwrap::{orient2d, Orientation, Point2};
///
/// let a = Point2::new(0.0, 0.0);
/// let b = Point2::new(1.0, 0.0);
///
/// assert_eq!(orient2d(a, b, Point2::new(0.5, 1.0)), Orientation::CounterClockwise);
/// assert_eq!(orient2d(a, b, Point2::new(0.5, -1.0)), Orientation::Clockwise);
/// assert_eq!(orient2d(a, b, Point2::new(3.0, 0.0)), Orientation::Collinear);
/// ```
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Orientation {
    let value = cross(a, b, c);
    if value > F::zero() {
        Orientation::CounterClockwise
    } else if value < F::zero() {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}
