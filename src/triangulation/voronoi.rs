//! Voronoi diagram computation from a Delaunay triangulation.
//!
//! The Voronoi diagram is the dual of the Delaunay triangulation:
//! - Each Delaunay triangle's circumcenter becomes a Voronoi vertex
//! - Each pair of triangles sharing an edge yields a Voronoi edge joining
//!   their circumcenters
//!
//! Hull edges, which belong to a single triangle, produce no edge; unbounded
//! rays are not represented.
//!
//! # Example
//!
//! ```
//! use planum::triangulation::{delaunay_triangulation, voronoi_diagram};
//! use planum::Point2;
//!
//! let sites: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(5.0, 3.0),
//!     Point2::new(1.0, 4.0),
//! ];
//!
//! let mesh = delaunay_triangulation(&sites).unwrap();
//! let voronoi = voronoi_diagram(&mesh);
//!
//! assert_eq!(voronoi.vertices().count(), 2);
//! assert_eq!(voronoi.edges.len(), 1);
//! ```

use super::{Triangle, Triangulation};
use crate::primitives::{Edge2, Point2};
use num_traits::Float;
use std::collections::{BTreeSet, HashMap};

/// A finite Voronoi edge between the circumcenters of two adjacent
/// triangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoronoiEdge<F> {
    /// Circumcenter of the first triangle.
    pub from: Point2<F>,
    /// Circumcenter of the second triangle.
    pub to: Point2<F>,
    /// Indices of the two triangles, smaller first.
    pub triangles: (usize, usize),
}

impl<F: Float> VoronoiEdge<F> {
    /// Distance between the two circumcenters.
    #[inline]
    pub fn length(&self) -> F {
        self.from.distance(self.to)
    }
}

/// A Voronoi diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiDiagram<F> {
    /// One entry per input triangle; `None` where the triangle is degenerate.
    pub circumcenters: Vec<Option<Point2<F>>>,
    /// Edges in ascending `(first triangle, second triangle)` order.
    pub edges: Vec<VoronoiEdge<F>>,
}

impl<F: Float> VoronoiDiagram<F> {
    /// The Voronoi vertices: every circumcenter that exists.
    pub fn vertices(&self) -> impl Iterator<Item = Point2<F>> + '_ {
        self.circumcenters.iter().flatten().copied()
    }

    /// Returns `true` if no two triangles share an edge.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Computes the Voronoi diagram dual to a triangulation.
pub fn voronoi_diagram<F: Float>(triangulation: &Triangulation<F>) -> VoronoiDiagram<F> {
    voronoi_from_triangles(&triangulation.triangles)
}

/// Computes the Voronoi diagram of an arbitrary triangle list.
///
/// Triangles are adjacent when they share an edge, compared without regard
/// to direction. An adjacent pair yields one edge unless either triangle has
/// no circumcenter.
///
/// # Example
///
/// ```
/// use planum::triangulation::{voronoi_from_triangles, Triangle};
/// use planum::Point2;
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(2.0, 0.0);
/// let c = Point2::new(2.0, 2.0);
/// let d = Point2::new(0.0, 2.0);
///
/// let voronoi = voronoi_from_triangles(&[Triangle::new(a, b, c), Triangle::new(a, c, d)]);
///
/// // Both right triangles share the circumcenter (1, 1)
/// assert_eq!(voronoi.edges.len(), 1);
/// assert_eq!(voronoi.edges[0].length(), 0.0);
/// ```
pub fn voronoi_from_triangles<F: Float>(triangles: &[Triangle<F>]) -> VoronoiDiagram<F> {
    let circumcenters: Vec<Option<Point2<F>>> =
        triangles.iter().map(Triangle::circumcenter).collect();

    let mut owners: HashMap<Edge2<F>, Vec<usize>> = HashMap::new();
    for (ti, tri) in triangles.iter().enumerate() {
        for edge in tri.edges() {
            owners.entry(edge).or_default().push(ti);
        }
    }

    let mut pairs: BTreeSet<(usize, usize)> = BTreeSet::new();
    for sharing in owners.values() {
        for (k, &i) in sharing.iter().enumerate() {
            for &j in &sharing[k + 1..] {
                if i != j {
                    pairs.insert((i.min(j), i.max(j)));
                }
            }
        }
    }

    let edges: Vec<VoronoiEdge<F>> = pairs
        .into_iter()
        .filter_map(|(i, j)| {
            Some(VoronoiEdge {
                from: circumcenters[i]?,
                to: circumcenters[j]?,
                triangles: (i, j),
            })
        })
        .collect();

    tracing::debug!(
        triangles = triangles.len(),
        edges = edges.len(),
        "voronoi diagram built"
    );

    VoronoiDiagram {
        circumcenters,
        edges,
    }
}
