//! Delaunay triangulation using the Bowyer-Watson algorithm.
//!
//! Delaunay triangulation maximizes the minimum angle of all triangles,
//! avoiding skinny triangles when possible. No input point lies strictly
//! inside the circumcircle of any output triangle.
//!
//! # Algorithm
//!
//! 1. Start from a super-triangle with its corners at infinity. The corners
//!    collapse into one ideal vertex, so the initial mesh is the first
//!    non-degenerate input triangle plus one ideal face on each of its edges
//! 2. Insert points one at a time: remove every face whose circumcircle
//!    strictly contains the point and re-triangulate the hole from it
//! 3. Remove the faces that use the ideal vertex
//!
//! The circumcircle of an ideal face degenerates to the open half-plane
//! beyond its hull edge plus the open edge itself. No real triangle ever
//! shares a circle with a super-triangle corner, so the result always covers
//! the convex hull.
//!
//! # Complexity
//!
//! - Time: O(n²) worst case, O(n log n) expected for random points
//! - Space: O(n)

use super::Triangle;
use crate::error::GeometryError;
use crate::hull::{convex_hull, hull_area, HullMethod};
use crate::predicates::{in_circumcircle, orientation, Orientation};
use crate::primitives::{dedup_points, Edge2, Point2, PointKey, Segment2};
use num_traits::Float;
use std::collections::{HashMap, HashSet};

/// A Delaunay triangulation of a point set.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangulation<F> {
    /// Distinct input points, in first-occurrence order.
    pub points: Vec<Point2<F>>,
    /// Counter-clockwise triangles covering the convex hull of `points`.
    pub triangles: Vec<Triangle<F>>,
}

impl<F: Float> Triangulation<F> {
    /// Number of triangles.
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` if there are no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Distinct triangle edges, in order of first appearance.
    pub fn edges(&self) -> Vec<Edge2<F>> {
        let mut seen: HashSet<Edge2<F>> = HashSet::new();
        self.triangles
            .iter()
            .flat_map(|t| t.edges())
            .filter(|e| seen.insert(*e))
            .collect()
    }

    /// Returns `true` if the triangles tile the convex hull of `points`.
    ///
    /// Every point must be a triangle corner, and the summed triangle area
    /// must match the hull area up to a relative `sqrt(epsilon)`. A
    /// degenerate point set is covered only by an empty mesh.
    pub fn covers_hull(&self) -> bool {
        let hull = convex_hull(&self.points, HullMethod::GrahamScan);
        if hull.is_degenerate() {
            return self.triangles.is_empty();
        }

        let corners: HashSet<PointKey> = self
            .triangles
            .iter()
            .flat_map(|t| t.vertices())
            .map(Point2::key)
            .collect();
        if !self.points.iter().all(|p| corners.contains(&p.key())) {
            return false;
        }

        let expected = hull_area(hull.vertices());
        let covered = self
            .triangles
            .iter()
            .fold(F::zero(), |acc, t| acc + t.area());
        (covered - expected).abs() <= expected * F::epsilon().sqrt()
    }

    /// Returns `true` if the mesh covers the hull and no point lies strictly
    /// inside any circumcircle.
    pub fn is_delaunay(&self) -> bool {
        self.covers_hull()
            && self.triangles.iter().all(|t| {
                self.points
                    .iter()
                    .all(|&p| t.contains_vertex(p) || !t.circumcircle_contains(p))
            })
    }
}

/// A counter-clockwise face referring to vertices by index while the mesh is
/// being built.
///
/// The ideal vertex, when present, is always stored in `c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Face {
    a: usize,
    b: usize,
    c: usize,
}

impl Face {
    /// Builds a face from a counter-clockwise cycle, rotating the ideal
    /// vertex into `c`.
    #[inline]
    fn new(a: usize, b: usize, c: usize, ideal: usize) -> Self {
        if a == ideal {
            Face { a: b, b: c, c: a }
        } else if b == ideal {
            Face { a: c, b: a, c: b }
        } else {
            Face { a, b, c }
        }
    }

    #[inline]
    fn edges(self) -> [(usize, usize); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    #[inline]
    fn is_ideal(self, ideal: usize) -> bool {
        self.c == ideal
    }
}

/// Undirected index edge, smaller index first.
#[inline]
fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Returns `true` if inserting `p` destroys `face`.
///
/// The ideal vertex is `points.len()`. An ideal face `(a, b, ideal)` has the
/// outside of the hull to the left of `a -> b`, so it conflicts with points
/// strictly left of that edge or on its open segment.
fn in_conflict<F: Float>(points: &[Point2<F>], face: Face, p: Point2<F>) -> bool {
    if face.is_ideal(points.len()) {
        let (a, b) = (points[face.a], points[face.b]);
        return match orientation(a, b, p) {
            Orientation::CounterClockwise => true,
            Orientation::Collinear => Segment2::new(a, b).contains_point(p),
            Orientation::Clockwise => false,
        };
    }
    in_circumcircle(p, points[face.a], points[face.b], points[face.c])
}

/// Picks the first two points and the first point not collinear with them,
/// ordered counter-clockwise. `None` if every point lies on one line.
fn initial_triangle<F: Float>(points: &[Point2<F>]) -> Option<[usize; 3]> {
    let (p, q) = (*points.first()?, *points.get(1)?);
    let (apex, turn) = (2..points.len())
        .map(|k| (k, orientation(p, q, points[k])))
        .find(|&(_, turn)| turn != Orientation::Collinear)?;

    Some(match turn {
        Orientation::Clockwise => [0, apex, 1],
        _ => [0, 1, apex],
    })
}

/// Computes the Delaunay triangulation of a set of points.
///
/// Duplicates are dropped first (the first occurrence is kept). Every output
/// triangle is counter-clockwise, and together they cover the convex hull of
/// the distinct points.
///
/// # Errors
///
/// - [`GeometryError::TooFewPoints`] for fewer than 3 distinct points.
/// - [`GeometryError::CollinearPoints`] if every point lies on one line.
///
/// # Example
///
/// ```
/// use planum::triangulation::delaunay_triangulation;
/// use planum::Point2;
///
/// // Square with center point
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(0.5, 0.5),
/// ];
///
/// let mesh = delaunay_triangulation(&points).unwrap();
/// assert_eq!(mesh.triangles.len(), 4);
/// assert!(mesh.is_delaunay());
/// ```
pub fn delaunay_triangulation<F: Float>(
    points: &[Point2<F>],
) -> Result<Triangulation<F>, GeometryError> {
    let unique = dedup_points(points);
    if unique.len() < 3 {
        return Err(GeometryError::TooFewPoints {
            required: 3,
            found: unique.len(),
        });
    }
    let [a, b, c] = initial_triangle(&unique).ok_or(GeometryError::CollinearPoints)?;

    let n = unique.len();
    let ideal = n;

    // First triangle plus the ideal faces outside each of its edges
    let mut faces: Vec<Face> = vec![
        Face { a, b, c },
        Face { a: b, b: a, c: ideal },
        Face { a: c, b, c: ideal },
        Face { a, b: c, c: ideal },
    ];

    for i in (0..n).filter(|&i| i != a && i != b && i != c) {
        let p = unique[i];
        let bad: Vec<usize> = faces
            .iter()
            .enumerate()
            .filter(|(_, f)| in_conflict(&unique, **f, p))
            .map(|(fi, _)| fi)
            .collect();

        if bad.is_empty() {
            tracing::warn!(point = i, "no face conflicts with point, skipping it");
            continue;
        }

        // An edge is on the boundary of the hole iff exactly one bad face uses it
        let mut edge_count: HashMap<(usize, usize), usize> = HashMap::new();
        for &fi in &bad {
            for (ea, eb) in faces[fi].edges() {
                *edge_count.entry(edge_key(ea, eb)).or_insert(0) += 1;
            }
        }
        let boundary: Vec<(usize, usize)> = bad
            .iter()
            .flat_map(|&fi| faces[fi].edges())
            .filter(|&(ea, eb)| edge_count.get(&edge_key(ea, eb)) == Some(&1))
            .collect();

        // Remove bad faces (in reverse order to preserve indices)
        for &fi in bad.iter().rev() {
            faces.swap_remove(fi);
        }

        // Boundary edges keep their face's winding, so `p` is on their left
        faces.extend(boundary.into_iter().map(|(ea, eb)| Face::new(ea, eb, i, ideal)));

        tracing::trace!(
            point = i,
            removed = bad.len(),
            faces = faces.len(),
            "inserted point"
        );
    }

    let triangles: Vec<Triangle<F>> = faces
        .into_iter()
        .filter(|f| !f.is_ideal(ideal))
        .map(|f| Triangle::new_ccw(unique[f.a], unique[f.b], unique[f.c]))
        .collect();

    tracing::debug!(
        input = points.len(),
        distinct = n,
        triangles = triangles.len(),
        "delaunay triangulation complete"
    );

    Ok(Triangulation {
        points: unique,
        triangles,
    })
}
