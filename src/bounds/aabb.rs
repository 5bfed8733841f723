//! Axis-aligned bounding box.

use crate::primitives::Point2;
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Defined by minimum and maximum corners. May be degenerate (zero width
/// and/or height) when built from collinear or coincident points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates an AABB containing a single point.
    #[inline]
    pub fn from_point(p: Point2<F>) -> Self {
        Self { min: p, max: p }
    }

    /// Creates an AABB from an iterator of points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::from_point(first), Self::expand_to_include))
    }

    /// Returns the width of the AABB.
    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    /// Returns the height of the AABB.
    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Returns the center point of the AABB.
    #[inline]
    pub fn center(self) -> Point2<F> {
        self.min.midpoint(self.max)
    }

    /// Returns a new AABB expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let points = vec![
            Point2::new(1.0_f64, 5.0),
            Point2::new(-2.0, 3.0),
            Point2::new(4.0, -1.0),
        ];
        let aabb = Aabb2::from_points(points).unwrap();
        assert_eq!(aabb.min, Point2::new(-2.0, -1.0));
        assert_eq!(aabb.max, Point2::new(4.0, 5.0));
        assert_eq!(aabb.width(), 6.0);
        assert_eq!(aabb.height(), 6.0);
        assert_eq!(aabb.center(), Point2::new(1.0, 2.0));
    }

    #[test]
    fn test_from_points_empty() {
        let points: Vec<Point2<f64>> = vec![];
        assert!(Aabb2::from_points(points).is_none());
    }

    #[test]
    fn test_degenerate() {
        let aabb = Aabb2::from_points(vec![Point2::new(2.0_f64, 3.0), Point2::new(2.0, 7.0)])
            .unwrap();
        assert_eq!(aabb.width(), 0.0);
        assert_eq!(aabb.height(), 4.0);
    }
}
