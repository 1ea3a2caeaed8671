//! Orientation and distance predicates.

use crate::primitives::Point2;
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Points turn left (positive cross product).
    CounterClockwise,
    /// Points turn right (negative cross product).
    Clockwise,
    /// Points are collinear (cross product exactly zero).
    Collinear,
}

impl Orientation {
    /// Classifies the sign of a cross product. Zero, and NaN, are collinear.
    #[inline]
    pub fn from_sign<F: Float>(value: F) -> Self {
        if value > F::zero() {
            Orientation::CounterClockwise
        } else if value < F::zero() {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }

    /// Returns the opposite turn direction. Collinear stays collinear.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::Collinear => Orientation::Collinear,
        }
    }
}

/// Computes the turn direction of the path `a -> b -> c`.
///
/// The test is the sign of `(b - a) x (c - b)` with an exact zero test, so
/// collinear triples are reported as such rather than being absorbed by a
/// tolerance.
///
/// # Example
///
/// ```
/// use planum::predicates::{orientation, Orientation};
/// use planum::Point2;
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// assert_eq!(orientation(a, b, Point2::new(1.0, 1.0)), Orientation::CounterClockwise);
/// assert_eq!(orientation(a, b, Point2::new(2.0, 0.0)), Orientation::Collinear);
/// ```
#[inline]
pub fn orientation<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Orientation {
    Orientation::from_sign((b - a).cross(c - b))
}

/// Cross product of `a - o` and `b - o`: twice the signed area of `o, a, b`.
///
/// Positive if counter-clockwise, negative if clockwise, zero if collinear.
#[inline]
pub fn cross<F: Float>(o: Point2<F>, a: Point2<F>, b: Point2<F>) -> F {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Euclidean distance between two points.
#[inline]
pub fn distance<F: Float>(a: Point2<F>, b: Point2<F>) -> F {
    a.distance(b)
}

/// Returns `true` if every point lies on one line.
///
/// Fewer than three points, or any number of copies of a single point, count
/// as collinear.
pub fn are_collinear<F: Float>(points: &[Point2<F>]) -> bool {
    let Some(&first) = points.first() else {
        return true;
    };
    let Some(&second) = points.iter().find(|&&p| p != first) else {
        return true;
    };

    points
        .iter()
        .all(|&p| cross(first, second, p) == F::zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_ccw() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.5, 1.0);
        assert_eq!(orientation(a, b, c), Orientation::CounterClockwise);
    }

    #[test]
    fn test_orientation_cw() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.5, -1.0);
        assert_eq!(orientation(a, b, c), Orientation::Clockwise);
    }

    #[test]
    fn test_orientation_collinear() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 1.0);
        let c = Point2::new(3.0, 3.0);
        assert_eq!(orientation(a, b, c), Orientation::Collinear);
        // Backtracking along the line is still collinear
        assert_eq!(orientation(c, b, a), Orientation::Collinear);
    }

    #[test]
    fn test_orientation_has_no_tolerance() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.5, 1e-12);
        assert_eq!(orientation(a, b, c), Orientation::CounterClockwise);
    }

    #[test]
    fn test_orientation_matches_cross_sign() {
        let a: Point2<f64> = Point2::new(2.0, 1.0);
        let b = Point2::new(-1.0, 4.0);
        let c = Point2::new(0.0, -3.0);
        assert_eq!(orientation(a, b, c), Orientation::from_sign(cross(a, b, c)));
        assert_eq!(orientation(a, c, b), orientation(a, b, c).reversed());
    }

    #[test]
    fn test_cross() {
        let o = Point2::new(0.0_f64, 0.0);
        let a = Point2::new(2.0, 0.0);
        let b = Point2::new(0.0, 3.0);
        assert_eq!(cross(o, a, b), 6.0);
        assert_eq!(cross(o, b, a), -6.0);
    }

    #[test]
    fn test_distance() {
        let a = Point2::new(1.0_f64, 1.0);
        let b = Point2::new(4.0, 5.0);
        assert_eq!(distance(a, b), 5.0);
    }

    #[test]
    fn test_are_collinear() {
        let line: Vec<Point2<f64>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(-3.0, -6.0),
            Point2::new(2.0, 4.0),
        ];
        assert!(are_collinear(&line));

        let mut bent = line.clone();
        bent.push(Point2::new(2.0, 4.5));
        assert!(!are_collinear(&bent));
    }

    #[test]
    fn test_are_collinear_with_leading_duplicates() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 1.0),
            Point2::new(5.0, 1.0),
        ];
        assert!(are_collinear(&points));
        assert!(are_collinear::<f64>(&[]));
        assert!(are_collinear(&[Point2::new(0.0_f64, 0.0); 4]));
    }
}
