//! Triangle value type.

use crate::predicates::{circumcenter, in_circumcircle, orientation, Orientation};
use crate::primitives::{Edge2, Point2, PointKey};
use num_traits::Float;

/// A triangle holding its three corners by value.
///
/// Field equality is positional; use [`Triangle::key`] to compare triangles
/// regardless of vertex order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<F> {
    pub a: Point2<F>,
    pub b: Point2<F>,
    pub c: Point2<F>,
}

/// Order-independent identity of a triangle: its sorted vertex keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriangleKey([PointKey; 3]);

impl<F: Float> Triangle<F> {
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self { a, b, c }
    }

    /// Creates a triangle with counter-clockwise winding, swapping `b` and
    /// `c` when the given order turns clockwise.
    #[inline]
    pub fn new_ccw(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        if orientation(a, b, c) == Orientation::Clockwise {
            Self { a, b: c, c: b }
        } else {
            Self { a, b, c }
        }
    }

    #[inline]
    pub fn vertices(&self) -> [Point2<F>; 3] {
        [self.a, self.b, self.c]
    }

    /// The three edges `ab`, `bc`, `ca`.
    #[inline]
    pub fn edges(&self) -> [Edge2<F>; 3] {
        [
            Edge2::new(self.a, self.b),
            Edge2::new(self.b, self.c),
            Edge2::new(self.c, self.a),
        ]
    }

    /// Returns `true` if `p` is one of the corners.
    #[inline]
    pub fn contains_vertex(&self, p: Point2<F>) -> bool {
        self.a == p || self.b == p || self.c == p
    }

    /// Canonical key, identical for every ordering of the same corners.
    pub fn key(&self) -> TriangleKey {
        let mut keys = [self.a.key(), self.b.key(), self.c.key()];
        keys.sort_unstable();
        TriangleKey(keys)
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        orientation(self.a, self.b, self.c)
    }

    /// Center of the circumscribed circle, `None` for a degenerate triangle.
    #[inline]
    pub fn circumcenter(&self) -> Option<Point2<F>> {
        circumcenter(self.a, self.b, self.c)
    }

    /// Returns `true` if `p` lies strictly inside the circumcircle.
    ///
    /// Works for either winding; degenerate triangles contain nothing.
    pub fn circumcircle_contains(&self, p: Point2<F>) -> bool {
        match self.orientation() {
            Orientation::CounterClockwise => in_circumcircle(p, self.a, self.b, self.c),
            Orientation::Clockwise => in_circumcircle(p, self.a, self.c, self.b),
            Orientation::Collinear => false,
        }
    }

    /// Unsigned area.
    pub fn area(&self) -> F {
        let two = F::one() + F::one();
        ((self.b - self.a).cross(self.c - self.a) / two).abs()
    }
}
