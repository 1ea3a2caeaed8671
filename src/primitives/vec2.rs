//! Displacement between two points.
//!
//! `Point2 - Point2` yields a [`Vec2`]. Polygon edges and their normals are
//! expressed with it, as are the cross products behind orientation tests.

use num_traits::Float;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A displacement in the plane, such as an edge `end - start` or an outward
/// normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// The null displacement, used as the normal of a zero-length edge.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// `x1 * y2 - y1 * x2`: twice the signed area spanned by the two
    /// vectors, positive when `other` turns left from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    /// Euclidean length.
    #[inline]
    pub fn magnitude(self) -> F {
        self.magnitude_squared().sqrt()
    }

    /// Scales to length 1, or `None` when the length is exactly zero.
    #[inline]
    pub fn normalize(self) -> Option<Self> {
        let mag = self.magnitude();
        if mag > F::zero() {
            Some(self / mag)
        } else {
            None
        }
    }

    /// Left-hand normal: the vector turned a quarter counter-clockwise.
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    /// Right-hand normal: the vector turned a quarter clockwise. For a
    /// counter-clockwise polygon this points out of the interior.
    #[inline]
    pub fn perpendicular_cw(self) -> Self {
        Self {
            x: self.y,
            y: -self.x,
        }
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<F: Float> Default for Vec2<F> {
    fn default() -> Self {
        Self::zero()
    }
}
