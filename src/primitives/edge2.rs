//! Undirected 2D edge type.

use super::{Point2, PointKey};
use num_traits::Float;
use std::hash::{Hash, Hasher};

/// An unordered pair of points.
///
/// `Edge2::new(a, b)` and `Edge2::new(b, a)` are equal and hash identically,
/// which is what shared-boundary detection between triangles relies on.
/// The endpoints are stored in canonical [`PointKey`] order.
#[derive(Debug, Clone, Copy)]
pub struct Edge2<F> {
    a: Point2<F>,
    b: Point2<F>,
}

impl<F: Float> Edge2<F> {
    /// Creates an edge between two points.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>) -> Self {
        if a.key() <= b.key() {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// Returns the endpoints in canonical order.
    #[inline]
    pub fn endpoints(self) -> (Point2<F>, Point2<F>) {
        (self.a, self.b)
    }

    /// Returns the canonical key pair of this edge.
    #[inline]
    pub fn key(self) -> (PointKey, PointKey) {
        (self.a.key(), self.b.key())
    }

    /// Returns `true` if `p` is one of the endpoints.
    #[inline]
    pub fn has_endpoint(self, p: Point2<F>) -> bool {
        self.a == p || self.b == p
    }
}

impl<F: Float> PartialEq for Edge2<F> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<F: Float> Eq for Edge2<F> {}

impl<F: Float> Hash for Edge2<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
