//! Core polygon type, membership and shape analysis.

use crate::bounds::Aabb2;
use crate::error::GeometryError;
use crate::predicates::Orientation;
use crate::primitives::{Point2, Segment2, Vec2};
use num_traits::Float;

/// A polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the first).
/// Well-formedness is not enforced on construction; see [`Polygon::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the polygon, in either winding.
    pub vertices: Vec<Point2<F>>,
}

/// Outcome of a convexity test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Convexity {
    /// `true` if no two non-degenerate turns disagree in direction.
    pub convex: bool,
    /// Dominant turn direction along the boundary.
    ///
    /// For a convex polygon this is the shared turn direction
    /// (`CounterClockwise` for CCW vertex order). For a concave polygon it is
    /// the more frequent direction. `Collinear` when there are no
    /// non-degenerate turns, or when a concave polygon has a tie.
    pub turn: Orientation,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates the closed edge loop, ending with the edge back to the first
    /// vertex.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Checks that the polygon has at least three vertices and no two
    /// consecutive identical vertices (closing pair included).
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.vertices.len() < 3 {
            return Err(GeometryError::TooFewPoints {
                required: 3,
                found: self.vertices.len(),
            });
        }
        if self.edges().any(|e| e.start == e.end) {
            return Err(GeometryError::RepeatedVertex);
        }
        Ok(())
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the area centroid (center of mass) of the polygon.
    pub fn centroid(&self) -> Option<Point2<F>> {
        polygon_centroid(&self.vertices)
    }

    /// Returns the arithmetic mean of the vertices.
    pub fn vertex_centroid(&self) -> Option<Point2<F>> {
        vertex_centroid(&self.vertices)
    }

    /// Tests if a point is strictly inside the polygon.
    pub fn contains(&self, point: Point2<F>) -> bool {
        point_in_polygon(point, &self.vertices)
    }

    /// Classifies the polygon's convexity and turn direction.
    pub fn convexity(&self) -> Convexity {
        convexity(&self.vertices)
    }

    /// Returns the outward unit normal of every edge of a convex polygon.
    pub fn edge_normals(&self) -> Result<Vec<Vec2<F>>, GeometryError> {
        edge_normals(&self.vertices)
    }

    /// Returns the bounding box, or `None` for an empty polygon.
    pub fn bounding_box(&self) -> Option<Aabb2<F>> {
        Aabb2::from_points(self.vertices.iter().copied())
    }

    /// Ensures the polygon has CCW winding order.
    pub fn ensure_ccw(&mut self) {
        if self.signed_area() < F::zero() {
            self.vertices.reverse();
        }
    }
}

impl<F: Float> From<Vec<Point2<F>>> for Polygon<F> {
    fn from(vertices: Vec<Point2<F>>) -> Self {
        Self::new(vertices)
    }
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let n = vertices.len();
    let twice = (0..n).fold(F::zero(), |acc, i| {
        let j = (i + 1) % n;
        acc + vertices[i].x * vertices[j].y - vertices[j].x * vertices[i].y
    });

    twice / (F::one() + F::one())
}

/// Computes the absolute area of a polygon.
pub fn polygon_area<F: Float>(vertices: &[Point2<F>]) -> F {
    polygon_signed_area(vertices).abs()
}

/// Computes the area centroid of a polygon.
///
/// Returns None for degenerate polygons (fewer than 3 vertices or zero area).
pub fn polygon_centroid<F: Float>(vertices: &[Point2<F>]) -> Option<Point2<F>> {
    let area = polygon_signed_area(vertices);
    if area == F::zero() {
        return None;
    }

    let mut cx = F::zero();
    let mut cy = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        let cross = vertices[i].x * vertices[j].y - vertices[j].x * vertices[i].y;
        cx = cx + (vertices[i].x + vertices[j].x) * cross;
        cy = cy + (vertices[i].y + vertices[j].y) * cross;
    }

    let three = F::one() + F::one() + F::one();
    let six_area = area * (three + three);
    Some(Point2::new(cx / six_area, cy / six_area))
}

/// Computes the arithmetic mean of the vertices.
///
/// Returns None for an empty slice.
pub fn vertex_centroid<F: Float>(vertices: &[Point2<F>]) -> Option<Point2<F>> {
    if vertices.is_empty() {
        return None;
    }

    let (sx, sy, count) = vertices.iter().fold(
        (F::zero(), F::zero(), F::zero()),
        |(sx, sy, count), v| (sx + v.x, sy + v.y, count + F::one()),
    );
    Some(Point2::new(sx / count, sy / count))
}

/// Tests if a point is strictly inside a polygon using even-odd ray casting.
///
/// A horizontal ray is cast towards +x and edge crossings are counted with
/// the half-open rule (an edge counts when exactly one endpoint lies above
/// the point). Points lying exactly on an edge are reported as outside, which
/// keeps this test consistent with the scanline fills in [`crate::raster`].
///
/// The result does not depend on which vertex the sequence starts at.
///
/// # Example
///
/// ```
/// use planum::polygon::point_in_polygon;
/// use planum::Point2;
///
/// let square = [
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 4.0),
/// ];
/// assert!(point_in_polygon(Point2::new(2.0, 2.0), &square));
/// assert!(!point_in_polygon(Point2::new(5.0, 2.0), &square));
/// assert!(!point_in_polygon(Point2::new(4.0, 2.0), &square)); // on the boundary
/// ```
pub fn point_in_polygon<F: Float>(point: Point2<F>, vertices: &[Point2<F>]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = vertices.len();

    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if Segment2::new(vj, vi).contains_point(point) {
            return false;
        }

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Tests if a polygon is convex and reports its dominant turn direction.
///
/// Each vertex contributes the sign of `(b - a) x (c - b)` for consecutive
/// vertices `a, b, c`; exactly collinear turns are skipped. The polygon is
/// convex when all remaining signs agree. Fewer than 3 vertices is not
/// convex.
///
/// # Example
///
/// ```
/// use planum::polygon::convexity;
/// use planum::predicates::Orientation;
/// use planum::Point2;
///
/// let ccw_square = [
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
/// let result = convexity(&ccw_square);
/// assert!(result.convex);
/// assert_eq!(result.turn, Orientation::CounterClockwise);
/// ```
pub fn convexity<F: Float>(vertices: &[Point2<F>]) -> Convexity {
    let n = vertices.len();
    if n < 3 {
        return Convexity {
            convex: false,
            turn: Orientation::Collinear,
        };
    }

    let mut left = 0usize;
    let mut right = 0usize;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let c = vertices[(i + 2) % n];

        match Orientation::from_sign((b - a).cross(c - b)) {
            Orientation::CounterClockwise => left += 1,
            Orientation::Clockwise => right += 1,
            Orientation::Collinear => {}
        }
    }

    let turn = match left.cmp(&right) {
        std::cmp::Ordering::Greater => Orientation::CounterClockwise,
        std::cmp::Ordering::Less => Orientation::Clockwise,
        std::cmp::Ordering::Equal => Orientation::Collinear,
    };

    Convexity {
        convex: left == 0 || right == 0,
        turn,
    }
}

/// Returns `true` if the polygon is convex. See [`convexity`].
pub fn polygon_is_convex<F: Float>(vertices: &[Point2<F>]) -> bool {
    convexity(vertices).convex
}

/// Computes the outward unit normal of every edge of a convex polygon.
///
/// The normal for edge `i` belongs to the edge from `vertices[i]` to
/// `vertices[i + 1]` (the last one to the closing edge). "Outward" is the
/// side away from the interior: the right side of each edge for a CCW
/// polygon, the left side for a CW one. A zero-length edge yields a zero
/// vector.
///
/// # Errors
///
/// - [`GeometryError::TooFewPoints`] for fewer than 3 vertices.
/// - [`GeometryError::NotConvex`] if the polygon is concave or has no
///   non-degenerate turn at all.
pub fn edge_normals<F: Float>(vertices: &[Point2<F>]) -> Result<Vec<Vec2<F>>, GeometryError> {
    if vertices.len() < 3 {
        return Err(GeometryError::TooFewPoints {
            required: 3,
            found: vertices.len(),
        });
    }

    let shape = convexity(vertices);
    if !shape.convex {
        return Err(GeometryError::NotConvex);
    }

    let outward: fn(Vec2<F>) -> Vec2<F> = match shape.turn {
        Orientation::CounterClockwise => Vec2::perpendicular_cw,
        Orientation::Clockwise => Vec2::perpendicular,
        Orientation::Collinear => return Err(GeometryError::NotConvex),
    };

    let n = vertices.len();
    let normals: Vec<Vec2<F>> = (0..n)
        .map(|i| {
            let edge = vertices[(i + 1) % n] - vertices[i];
            outward(edge).normalize().unwrap_or_else(Vec2::zero)
        })
        .collect();

    Ok(normals)
}
