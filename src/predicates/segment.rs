//! Segment intersection tests.

use super::{orientation, Orientation};
use crate::primitives::Point2;
use num_traits::Float;

/// Tests whether segment `p1-p2` properly crosses segment `p3-p4`.
///
/// Uses four strict orientation tests: each segment's endpoints must lie on
/// opposite sides of the other segment's line. Touching at an endpoint,
/// T-junctions ending on the other segment and collinear overlap are **not**
/// reported as intersections.
///
/// # Example
///
/// ```
/// use planum::predicates::segments_intersect;
/// use planum::Point2;
///
/// let p = |x, y| Point2::new(x, y);
/// assert!(segments_intersect(p(0.0_f64, 0.0), p(4.0, 4.0), p(0.0, 4.0), p(4.0, 0.0)));
/// // Shared endpoint only
/// assert!(!segments_intersect(p(0.0_f64, 0.0), p(2.0, 2.0), p(2.0, 2.0), p(4.0, 0.0)));
/// ```
pub fn segments_intersect<F: Float>(
    p1: Point2<F>,
    p2: Point2<F>,
    p3: Point2<F>,
    p4: Point2<F>,
) -> bool {
    let o1 = orientation(p1, p2, p3);
    let o2 = orientation(p1, p2, p4);
    let o3 = orientation(p3, p4, p1);
    let o4 = orientation(p3, p4, p2);

    straddles(o1, o2) && straddles(o3, o4)
}

#[inline]
fn straddles(a: Orientation, b: Orientation) -> bool {
    a != Orientation::Collinear && b != Orientation::Collinear && a != b
}

/// Computes where the infinite lines through `p1-p2` and `p3-p4` meet.
///
/// Each line is written as `A x + B y = C` with `A = Δy`, `B = -Δx`, and the
/// 2x2 system is solved by Cramer's rule. Returns `None` when the determinant
/// is exactly zero (parallel or coincident lines).
///
/// This does not check that the point lies on either segment; pair it with
/// [`segments_intersect`] when segment semantics are wanted.
pub fn intersection_point<F: Float>(
    p1: Point2<F>,
    p2: Point2<F>,
    p3: Point2<F>,
    p4: Point2<F>,
) -> Option<Point2<F>> {
    let a1 = p2.y - p1.y;
    let b1 = p1.x - p2.x;
    let c1 = a1 * p1.x + b1 * p1.y;

    let a2 = p4.y - p3.y;
    let b2 = p3.x - p4.x;
    let c2 = a2 * p3.x + b2 * p3.y;

    let det = a1 * b2 - a2 * b1;
    if det == F::zero() {
        return None;
    }

    Some(Point2::new(
        (b2 * c1 - b1 * c2) / det,
        (a1 * c2 - a2 * c1) / det,
    ))
}

/// Finds the points where segment `a-b` properly crosses the edges of a
/// closed polygon.
///
/// Edges are visited in order starting with `vertices[0] -> vertices[1]`
/// and ending with the closing edge. Edges that only touch the segment are
/// ignored, as in [`segments_intersect`].
pub fn segment_polygon_crossings<F: Float>(
    a: Point2<F>,
    b: Point2<F>,
    vertices: &[Point2<F>],
) -> Vec<Point2<F>> {
    let n = vertices.len();
    if n < 2 {
        return Vec::new();
    }

    (0..n)
        .filter_map(|i| {
            let p = vertices[i];
            let q = vertices[(i + 1) % n];
            if segments_intersect(a, b, p, q) {
                intersection_point(a, b, p, q)
            } else {
                None
            }
        })
        .collect()
}
