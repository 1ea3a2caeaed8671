//! 2D line segment type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Unlike [`Edge2`](super::Edge2), a segment is directed: `start` and `end`
/// are distinguishable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the midpoint of the segment.
    #[inline]
    pub fn midpoint(self) -> Point2<F> {
        self.start.midpoint(self.end)
    }

    /// Returns `true` if `p` lies inside the closed axis-aligned bounding box
    /// spanned by the two endpoints.
    #[inline]
    pub fn bounds_contain(self, p: Point2<F>) -> bool {
        p.x >= self.start.x.min(self.end.x)
            && p.x <= self.start.x.max(self.end.x)
            && p.y >= self.start.y.min(self.end.y)
            && p.y <= self.start.y.max(self.end.y)
    }

    /// Returns `true` if `p` lies exactly on the closed segment.
    ///
    /// Uses an exact zero test on the cross product; there is no tolerance.
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        self.direction().cross(p - self.start) == F::zero() && self.bounds_contain(p)
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}
