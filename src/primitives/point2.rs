//! 2D point type.

use super::Vec2;
use num_traits::Float;
use std::collections::HashSet;
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates.
///
/// Generic over floating-point types (`f32` or `f64`). Equality is exact
/// coordinate equality; no tolerance is applied anywhere in this crate's
/// point comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

/// Exact, hashable identity of a point.
///
/// Two points produce the same key iff they compare equal. Negative zero is
/// folded into positive zero so that `-0.0` and `0.0` share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointKey {
    x: (u64, i16, i8),
    y: (u64, i16, i8),
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Linearly interpolates between `self` and `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Returns the midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let two = F::one() + F::one();
        Self {
            x: (self.x + other.x) / two,
            y: (self.y + other.y) / two,
        }
    }

    /// Returns the exact hashable identity of this point.
    #[inline]
    pub fn key(self) -> PointKey {
        // -0.0 + 0.0 == +0.0 under round-to-nearest
        PointKey {
            x: (self.x + F::zero()).integer_decode(),
            y: (self.y + F::zero()).integer_decode(),
        }
    }

    /// Orders points by `y`, then by `x`.
    ///
    /// This is the pivot order used by both hull constructors. Incomparable
    /// (NaN) coordinates compare as equal.
    #[inline]
    pub fn cmp_yx(&self, other: &Self) -> std::cmp::Ordering {
        self.y
            .partial_cmp(&other.y)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                self.x
                    .partial_cmp(&other.x)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// Converts this point to a vector from the origin.
    #[inline]
    pub fn to_vec(self) -> Vec2<F> {
        Vec2::new(self.x, self.y)
    }
}

/// Removes repeated points, keeping the first occurrence of each.
///
/// Input order is otherwise preserved.
pub fn dedup_points<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    let mut seen: HashSet<PointKey> = HashSet::with_capacity(points.len());
    points
        .iter()
        .copied()
        .filter(|p| seen.insert(p.key()))
        .collect()
}

// Point - Point = Vec2
impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

// Point + Vec2 = Point
impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

// Point - Vec2 = Point
impl<F: Float> Sub<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x - v.x,
            y: self.y - v.y,
        }
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}
