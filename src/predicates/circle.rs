//! Circumcircle predicates.

use crate::primitives::Point2;
use num_traits::Float;

/// Tests if a point lies strictly inside the circumcircle of a triangle.
///
/// Evaluates the sign of the lifted determinant
///
/// ```text
/// | ax-px  ay-py  (ax-px)²+(ay-py)² |
/// | bx-px  by-py  (bx-px)²+(by-py)² |
/// | cx-px  cy-py  (cx-px)²+(cy-py)² |
/// ```
///
/// which is positive iff `p` is inside the circle through `a`, `b`, `c`
/// **provided the triangle is counter-clockwise**. For a clockwise triangle
/// the sign flips; callers must normalise winding first. Points on the
/// circle give zero and are reported as outside.
///
/// # Example
///
/// ```
/// use planum::predicates::in_circumcircle;
/// use planum::Point2;
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// let c = Point2::new(0.5, 0.866);
///
/// assert!(in_circumcircle(Point2::new(0.5, 0.29), a, b, c));
/// assert!(!in_circumcircle(Point2::new(10.0, 10.0), a, b, c));
/// ```
pub fn in_circumcircle<F: Float>(p: Point2<F>, a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    let ax = a.x - p.x;
    let ay = a.y - p.y;
    let bx = b.x - p.x;
    let by = b.y - p.y;
    let cx = c.x - p.x;
    let cy = c.y - p.y;

    let aa = ax * ax + ay * ay;
    let bb = bx * bx + by * by;
    let cc = cx * cx + cy * cy;

    let det = aa * (bx * cy - by * cx) - bb * (ax * cy - ay * cx) + cc * (ax * by - ay * bx);

    det > F::zero()
}

/// Computes the center of the circle through three points.
///
/// Returns `None` when the points are collinear (the determinant
/// `2 * (ax(by - cy) + bx(cy - ay) + cx(ay - by))` is exactly zero).
///
/// # Example
///
/// ```
/// use planum::predicates::circumcenter;
/// use planum::Point2;
///
/// let center = circumcenter(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(0.0, 2.0),
/// );
/// assert_eq!(center, Some(Point2::new(1.0, 1.0)));
///
/// let collinear = circumcenter(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(2.0, 2.0),
/// );
/// assert!(collinear.is_none());
/// ```
pub fn circumcenter<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Option<Point2<F>> {
    let two = F::one() + F::one();
    let d = two * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));

    if d == F::zero() {
        return None;
    }

    let a2 = a.x * a.x + a.y * a.y;
    let b2 = b.x * b.x + b.y * b.y;
    let c2 = c.x * c.x + c.y * c.y;

    let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
    let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;

    Some(Point2::new(ux, uy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_in_circumcircle_inside() {
        let a = Point2::new(0.0_f64, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.5, 0.866);
        assert!(in_circumcircle(Point2::new(0.5, 0.288), a, b, c));
    }

    #[test]
    fn test_in_circumcircle_outside() {
        let a = Point2::new(0.0_f64, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.5, 0.866);
        assert!(!in_circumcircle(Point2::new(10.0, 10.0), a, b, c));
    }

    #[test]
    fn test_in_circumcircle_on_circle_is_outside() {
        // Opposite corner of the unit square lies exactly on the circle
        let a = Point2::new(0.0_f64, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);
        assert!(!in_circumcircle(Point2::new(1.0, 1.0), a, b, c));
    }

    #[test]
    fn test_in_circumcircle_depends_on_winding() {
        let a = Point2::new(0.0_f64, 0.0);
        let b = Point2::new(4.0, 0.0);
        let c = Point2::new(0.0, 4.0);
        let p = Point2::new(1.0, 1.0);
        assert!(in_circumcircle(p, a, b, c));
        // Same triangle listed clockwise inverts the answer
        assert!(!in_circumcircle(p, a, c, b));
    }

    #[test]
    fn test_circumcenter_equidistant() {
        let a = Point2::new(1.0_f64, 2.0);
        let b = Point2::new(5.0, -1.0);
        let c = Point2::new(3.0, 7.0);
        let center = circumcenter(a, b, c).unwrap();
        let ra = center.distance(a);
        assert_relative_eq!(center.distance(b), ra, epsilon = 1e-10);
        assert_relative_eq!(center.distance(c), ra, epsilon = 1e-10);
    }

    #[test]
    fn test_circumcenter_degenerate() {
        let p = Point2::new(3.0_f64, 3.0);
        assert!(circumcenter(p, p, Point2::new(1.0, 0.0)).is_none());
        assert!(circumcenter(
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(5.0, 0.0)
        )
        .is_none());
    }

    #[test]
    fn test_circumcenter_f32() {
        let center = circumcenter(
            Point2::new(0.0_f32, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 4.0),
        )
        .unwrap();
        assert_eq!(center, Point2::new(2.0, 2.0));
    }
}
