//! Graham scan.

use super::{is_degenerate_input, lowest_point_index, ConvexHull};
use crate::predicates::{orientation, Orientation};
use crate::primitives::{dedup_points, Point2};
use num_traits::Float;
use std::cmp::Ordering;

/// Computes the convex hull with a Graham scan.
///
/// The pivot is the point with minimal `(y, x)`. Remaining points are sorted
/// by polar angle about the pivot (closer first on equal angle), then swept
/// with a stack that pops every vertex not making a strict left turn.
///
/// # Example
///
/// ```
/// use planum::hull::graham_scan;
/// use planum::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(0.0, 2.0),
/// ];
///
/// let hull = graham_scan(&points);
/// assert_eq!(hull.vertices()[0], Point2::new(0.0, 0.0));
/// assert_eq!(hull.vertices()[1], Point2::new(2.0, 0.0));
/// ```
pub fn graham_scan<F: Float>(points: &[Point2<F>]) -> ConvexHull<F> {
    let mut rest = dedup_points(points);
    if is_degenerate_input(&rest) {
        return ConvexHull::Degenerate(rest);
    }

    let pivot = match lowest_point_index(&rest) {
        Some(i) => rest.swap_remove(i),
        None => return ConvexHull::Degenerate(rest),
    };
    rest.sort_by(|a, b| polar_order(pivot, *a, *b));

    let mut stack: Vec<Point2<F>> = Vec::with_capacity(rest.len() + 1);
    stack.push(pivot);

    for p in rest {
        while stack.len() >= 2
            && orientation(stack[stack.len() - 2], stack[stack.len() - 1], p)
                != Orientation::CounterClockwise
        {
            stack.pop();
        }
        stack.push(p);
    }

    // Rounding can disagree with the collinearity check on nearly flat input
    if stack.len() < 3 {
        return ConvexHull::Degenerate(dedup_points(points));
    }

    tracing::trace!(vertices = stack.len(), "graham scan finished");
    ConvexHull::Polygon(stack)
}

/// Angular order about `pivot`; ties broken by distance from the pivot.
///
/// Every point lies in the half-plane above the pivot (or to its right on the
/// same row), so the orientation test alone gives a total order.
fn polar_order<F: Float>(pivot: Point2<F>, a: Point2<F>, b: Point2<F>) -> Ordering {
    match orientation(pivot, a, b) {
        Orientation::CounterClockwise => Ordering::Less,
        Orientation::Clockwise => Ordering::Greater,
        Orientation::Collinear => pivot
            .distance_squared(a)
            .partial_cmp(&pivot.distance_squared(b))
            .unwrap_or(Ordering::Equal),
    }
}
