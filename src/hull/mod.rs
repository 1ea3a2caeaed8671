//! Convex hull algorithms.
//!
//! Two independent constructors are provided, selected by [`HullMethod`]:
//!
//! - [`graham_scan`]: angular sort about the lowest point, then a monotone
//!   stack that discards non-left turns. O(n log n).
//! - [`jarvis_march`]: gift wrapping from the lowest point, picking the most
//!   clockwise candidate at every step. O(nh) for h hull vertices.
//!
//! Both return hulls in counter-clockwise order starting from the point with
//! minimal `(y, x)`, without collinear boundary points, so for the same input
//! they agree vertex for vertex.
//!
//! # Example
//!
//! ```
//! use planum::hull::{convex_hull, HullMethod};
//! use planum::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 0.5), // Interior point
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! let graham = convex_hull(&points, HullMethod::GrahamScan);
//! let jarvis = convex_hull(&points, HullMethod::JarvisMarch);
//!
//! assert_eq!(graham.vertices().len(), 4);
//! assert_eq!(graham, jarvis);
//! ```

mod graham;
mod jarvis;

pub use graham::graham_scan;
pub use jarvis::jarvis_march;

use crate::predicates::{are_collinear, cross};
use crate::primitives::Point2;
use num_traits::Float;

/// Hull construction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HullMethod {
    /// Angular sweep with a monotone stack.
    #[default]
    GrahamScan,
    /// Gift wrapping.
    JarvisMarch,
}

/// Result of a hull computation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvexHull<F> {
    /// A proper convex polygon, counter-clockwise, at least 3 vertices.
    Polygon(Vec<Point2<F>>),
    /// The input had fewer than 3 distinct points, or all of them are
    /// collinear. Holds the deduplicated input in first-occurrence order.
    Degenerate(Vec<Point2<F>>),
}

impl<F: Float> ConvexHull<F> {
    /// Returns the hull vertices (or the deduplicated input when degenerate).
    pub fn vertices(&self) -> &[Point2<F>] {
        match self {
            ConvexHull::Polygon(v) | ConvexHull::Degenerate(v) => v,
        }
    }

    /// Consumes the hull and returns its vertices.
    pub fn into_vertices(self) -> Vec<Point2<F>> {
        match self {
            ConvexHull::Polygon(v) | ConvexHull::Degenerate(v) => v,
        }
    }

    /// Returns `true` if the input could not form a proper hull.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, ConvexHull::Degenerate(_))
    }
}

/// Computes the convex hull of `points` with the chosen method.
///
/// Duplicate points are ignored. Fewer than 3 distinct points, or an
/// all-collinear input, yields [`ConvexHull::Degenerate`].
pub fn convex_hull<F: Float>(points: &[Point2<F>], method: HullMethod) -> ConvexHull<F> {
    let hull = match method {
        HullMethod::GrahamScan => graham_scan(points),
        HullMethod::JarvisMarch => jarvis_march(points),
    };

    tracing::debug!(
        ?method,
        input = points.len(),
        vertices = hull.vertices().len(),
        degenerate = hull.is_degenerate(),
        "convex hull computed"
    );

    hull
}

/// Returns `true` when deduplicated points cannot form a proper hull.
fn is_degenerate_input<F: Float>(unique: &[Point2<F>]) -> bool {
    unique.len() < 3 || are_collinear(unique)
}

/// Index of the point with minimal `(y, x)`.
fn lowest_point_index<F: Float>(points: &[Point2<F>]) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp_yx(b))
        .map(|(i, _)| i)
}

/// Computes the area of a hull using the shoelace formula.
///
/// Returns 0 for fewer than 3 vertices.
///
/// # Example
///
/// ```
/// use planum::hull::{convex_hull, hull_area, HullMethod};
/// use planum::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ];
///
/// let hull = convex_hull(&points, HullMethod::GrahamScan);
/// assert!((hull_area(hull.vertices()) - 4.0).abs() < 1e-10);
/// ```
pub fn hull_area<F: Float>(hull: &[Point2<F>]) -> F {
    crate::polygon::polygon_area(hull)
}

/// Computes the perimeter of a hull.
///
/// Returns 0 for fewer than 2 vertices.
pub fn hull_perimeter<F: Float>(hull: &[Point2<F>]) -> F {
    if hull.len() < 2 {
        return F::zero();
    }

    let n = hull.len();
    (0..n).fold(F::zero(), |acc, i| acc + hull[i].distance(hull[(i + 1) % n]))
}

/// Tests if a point is inside or on the boundary of a CCW convex hull.
pub fn point_in_convex_hull<F: Float>(hull: &[Point2<F>], point: Point2<F>) -> bool {
    if hull.len() < 3 {
        return false;
    }

    let n = hull.len();
    (0..n).all(|i| cross(hull[i], hull[(i + 1) % n], point) >= F::zero())
}
