//! Convex hulls by gift wrapping.
//!
//! The hull is found with the Jarvis march: starting from the leftmost
//! (then lowest) point, repeatedly pick the point that every other point lies
//! to the left of, until the walk returns to the start.
//!
//! # Example
//!
//! ```
//! use giftwrap::hull::compute_hull;
//! use giftwrap::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//!     Point2::new(2.0, 2.0), // Interior point
//! ];
//!
//! let hull = compute_hull(&points).unwrap();
//!
//! // The 4 corners, counter-clockwise from the bottom-left one
//! assert_eq!(hull, points[..4].to_vec());
//! ```

use std::fmt;

use crate::error::HullError;
use crate::predicates::{cross, orient2d, Orientation};
use crate::primitives::Point2;
use num_traits::Float;
use tracing::{debug, trace, warn};

/// Computes the convex hull of a set of points by gift wrapping.
///
/// Returns the hull vertices in counter-clockwise order, starting from the
/// point with the smallest x (ties broken by smallest y). The first and last
/// points are NOT the same (the hull is implicitly closed).
///
/// # Algorithm
///
/// 1. Fewer than 3 points are returned unchanged, in input order
/// 2. Start at the anchor: minimum x, then minimum y
/// 3. From the current vertex, scan every other point and keep the one with
///    no point strictly to its right; among collinear candidates keep the
///    farthest
/// 4. Stop when the chosen vertex equals the anchor
///
/// Collinear points along an edge and duplicate points never appear in the
/// hull unless they are extreme. If every point is collinear the hull is the
/// two extreme points; if every point coincides it is a single point.
///
/// # Complexity
///
/// - Time: O(n·h) for n points and h hull vertices, O(n²) in the worst case
/// - Space: O(h)
///
/// # Errors
///
/// Returns [`HullError::InvalidInput`] if any coordinate is NaN or infinite.
///
/// # Example
///
/// ```
/// use giftwrap::hull::compute_hull;
/// use giftwrap::Point2;
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(1.0, 0.0),
/// ];
///
/// // Collinear input reduces to its two extremes
/// let hull = compute_hull(&points).unwrap();
/// assert_eq!(hull, vec![Point2::new(0.0, 0.0), Point2::new(2.0, 0.0)]);
/// ```
pub fn compute_hull<F: Float>(points: &[Point2<F>]) -> Result<Vec<Point2<F>>, HullError> {
    let indices = compute_hull_indices(points)?;
    Ok(indices.into_iter().map(|i| points[i]).collect())
}

/// Computes the convex hull and returns the indices of hull vertices.
///
/// Walks the same hull as [`compute_hull`]. Useful when you need to track
/// which original points are on the hull. For fewer than 3 points every index
/// is returned in order.
///
/// # Example
///
/// ```
/// use giftwrap::hull::compute_hull_indices;
/// use giftwrap::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.5, 0.5),  // 0 - interior
///     Point2::new(1.0, 0.0),  // 1
///     Point2::new(1.0, 1.0),  // 2
///     Point2::new(0.0, 1.0),  // 3
///     Point2::new(0.0, 0.0),  // 4
/// ];
///
/// let indices = compute_hull_indices(&points).unwrap();
/// assert_eq!(indices, vec![4, 1, 2, 3]);
/// ```
pub fn compute_hull_indices<F: Float>(points: &[Point2<F>]) -> Result<Vec<usize>, HullError> {
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(HullError::InvalidInput { index });
    }

    let n = points.len();
    if n < 3 {
        return Ok((0..n).collect());
    }

    let anchor = anchor_index(points);
    debug!(anchor, points = n, "starting gift wrap");

    let mut hull = vec![anchor];
    let mut current = anchor;
    loop {
        let next = next_vertex(points, current);
        if points[next] == points[anchor] {
            break;
        }
        // Each vertex is distinct, so a walk longer than the input can only
        // come from rounding in the orientation test.
        if hull.len() == n {
            warn!(vertices = n, "gift wrap did not return to its anchor, stopping");
            break;
        }
        trace!(vertex = next, "confirmed hull vertex");
        hull.push(next);
        current = next;
    }

    debug!(vertices = hull.len(), "gift wrap complete");
    Ok(hull)
}

/// Index of the leftmost point, ties broken by the lowest y.
///
/// The first such index wins when several points coincide.
fn anchor_index<F: Float>(points: &[Point2<F>]) -> usize {
    let mut best = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let b = points[best];
        if p.x < b.x || (p.x == b.x && p.y < b.y) {
            best = i;
        }
    }
    best
}

/// Picks the hull vertex following `current`.
///
/// The candidate starts as the next input point and is replaced by any point
/// strictly clockwise of `current -> candidate`, or collinear with it and
/// farther from `current`.
fn next_vertex<F: Float>(points: &[Point2<F>], current: usize) -> usize {
    let origin = points[current];
    let mut candidate = (current + 1) % points.len();

    for (r, &p) in points.iter().enumerate() {
        if r == current {
            continue;
        }
        match orient2d(origin, points[candidate], p) {
            Orientation::Clockwise => candidate = r,
            Orientation::Collinear => {
                if origin.distance_squared(p) > origin.distance_squared(points[candidate]) {
                    candidate = r;
                }
            }
            Orientation::CounterClockwise => {}
        }
    }

    candidate
}

/// Computes the area of a convex hull.
///
/// Uses the shoelace formula on the hull vertices.
///
/// # Arguments
///
/// * `hull` - The convex hull vertices in order (CCW or CW)
///
/// # Returns
///
/// The area of the hull. Returns 0 for fewer than 3 vertices.
///
/// # Example
///
/// ```
/// use giftwrap::hull::{compute_hull, convex_hull_area};
/// use giftwrap::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ];
///
/// let hull = compute_hull(&points).unwrap();
/// let area = convex_hull_area(&hull);
///
/// assert!((area - 4.0).abs() < 1e-10); // 2x2 square
/// ```
pub fn convex_hull_area<F: Float>(hull: &[Point2<F>]) -> F {
    if hull.len() < 3 {
        return F::zero();
    }

    let n = hull.len();
    let twice_area = (0..n).fold(F::zero(), |acc, i| {
        let j = (i + 1) % n;
        acc + hull[i].x * hull[j].y - hull[j].x * hull[i].y
    });

    twice_area.abs() / (F::one() + F::one())
}

/// Computes the perimeter of a convex hull.
///
/// The hull is treated as closed, so a two-vertex hull measures its segment
/// in both directions.
///
/// # Returns
///
/// The perimeter (sum of edge lengths). Returns 0 for fewer than 2 vertices.
///
/// # Example
///
/// ```
/// use giftwrap::hull::{compute_hull, convex_hull_perimeter};
/// use giftwrap::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
///
/// let hull = compute_hull(&points).unwrap();
/// let perimeter = convex_hull_perimeter(&hull);
///
/// assert!((perimeter - 4.0).abs() < 1e-10); // Unit square
/// ```
pub fn convex_hull_perimeter<F: Float>(hull: &[Point2<F>]) -> F {
    if hull.len() < 2 {
        return F::zero();
    }

    let n = hull.len();
    (0..n).fold(F::zero(), |acc, i| acc + hull[i].distance(hull[(i + 1) % n]))
}

/// Tests if a point is inside a convex hull.
///
/// A point on the boundary is considered inside. Degenerate hulls are
/// handled: a single vertex contains only itself, and a two-vertex hull
/// contains the points of its segment.
///
/// # Arguments
///
/// * `hull` - The convex hull vertices in CCW order
/// * `point` - The point to test
///
/// # Example
///
/// ```
/// use giftwrap::hull::{compute_hull, point_in_convex_hull};
/// use giftwrap::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ];
///
/// let hull = compute_hull(&points).unwrap();
///
/// assert!(point_in_convex_hull(&hull, Point2::new(1.0, 1.0))); // Center
/// assert!(point_in_convex_hull(&hull, Point2::new(0.0, 0.0))); // Corner
/// assert!(!point_in_convex_hull(&hull, Point2::new(3.0, 3.0))); // Outside
/// ```
pub fn point_in_convex_hull<F: Float>(hull: &[Point2<F>], point: Point2<F>) -> bool {
    match hull {
        [] => false,
        [only] => *only == point,
        [a, b] => {
            if orient2d(*a, *b, point) != Orientation::Collinear {
                return false;
            }
            let along = (point - *a).dot(*b - *a);
            along >= F::zero() && along <= a.distance_squared(*b)
        }
        _ => {
            // For a CCW hull the point must be on the left of (or on) every edge
            let n = hull.len();
            (0..n).all(|i| cross(hull[i], hull[(i + 1) % n], point) >= F::zero())
        }
    }
}

/// A computed hull together with the measurements reported alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct HullSummary<F> {
    /// Number of input points.
    pub point_count: usize,
    /// Hull vertices in CCW order, as returned by [`compute_hull`].
    pub hull: Vec<Point2<F>>,
    /// Enclosed area.
    pub area: F,
    /// Closed perimeter.
    pub perimeter: F,
}

impl<F: Float> HullSummary<F> {
    /// Computes the hull of `points` and measures it.
    ///
    /// # Example
    ///
    /// ```
    /// use giftwrap::hull::HullSummary;
    /// use giftwrap::Point2;
    ///
    /// let points: Vec<Point2<f64>> = vec![
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(1.0, 0.0),
    ///     Point2::new(1.0, 1.0),
    ///     Point2::new(0.0, 1.0),
    ///     Point2::new(0.5, 0.5), // Interior
    /// ];
    ///
    /// let summary = HullSummary::from_points(&points).unwrap();
    ///
    /// assert_eq!(summary.to_string(), "points loaded: 5 | hull vertices: 4");
    /// assert!((summary.area - 1.0).abs() < 1e-10);
    /// ```
    pub fn from_points(points: &[Point2<F>]) -> Result<Self, HullError> {
        let hull = compute_hull(points)?;
        let area = convex_hull_area(&hull);
        let perimeter = convex_hull_perimeter(&hull);
        Ok(Self {
            point_count: points.len(),
            hull,
            area,
            perimeter,
        })
    }

    /// Number of hull vertices.
    pub fn vertex_count(&self) -> usize {
        self.hull.len()
    }
}

impl<F> fmt::Display for HullSummary<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "points loaded: {} | hull vertices: {}",
            self.point_count,
            self.hull.len()
        )
    }
}
