//! Jarvis march (gift wrapping).

use super::{is_degenerate_input, lowest_point_index, ConvexHull};
use crate::predicates::{orientation, Orientation};
use crate::primitives::{dedup_points, Point2};
use num_traits::Float;

/// Computes the convex hull by gift wrapping.
///
/// Starting from the point with minimal `(y, x)`, each step selects the
/// candidate that has no other point strictly to its right, preferring the
/// farthest one when several are collinear with the current vertex. The walk
/// ends when it returns to the start.
///
/// # Example
///
/// ```
/// use planum::hull::jarvis_march;
/// use planum::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 4.0),
/// ];
///
/// let hull = jarvis_march(&points);
/// assert_eq!(hull.vertices().len(), 3);
/// ```
pub fn jarvis_march<F: Float>(points: &[Point2<F>]) -> ConvexHull<F> {
    let unique = dedup_points(points);
    if is_degenerate_input(&unique) {
        return ConvexHull::Degenerate(unique);
    }

    let start = match lowest_point_index(&unique) {
        Some(i) => unique[i],
        None => return ConvexHull::Degenerate(unique),
    };

    let mut hull = vec![start];
    let mut current = start;

    loop {
        let next = wrap_step(&unique, current);
        if next == start {
            break;
        }
        // A hull never has more vertices than distinct inputs
        if hull.len() >= unique.len() {
            tracing::warn!(vertices = hull.len(), "gift wrapping did not close");
            break;
        }
        hull.push(next);
        current = next;
    }

    if hull.len() < 3 {
        return ConvexHull::Degenerate(unique);
    }

    tracing::trace!(vertices = hull.len(), "jarvis march finished");
    ConvexHull::Polygon(hull)
}

/// Picks the next hull vertex after `current`.
fn wrap_step<F: Float>(points: &[Point2<F>], current: Point2<F>) -> Point2<F> {
    let mut candidates = points.iter().copied().filter(|&p| p != current);
    let first = match candidates.next() {
        Some(p) => p,
        None => return current,
    };

    candidates.fold(first, |next, p| match orientation(current, next, p) {
        Orientation::Clockwise => p,
        Orientation::Collinear
            if current.distance_squared(p) > current.distance_squared(next) =>
        {
            p
        }
        _ => next,
    })
}
