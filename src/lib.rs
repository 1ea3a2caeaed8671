//! planum - Planar computational geometry
//!
//! Convex hulls, point-in-polygon and convexity tests, segment intersection,
//! polygon interior rasterization, Delaunay triangulation and its Voronoi
//! dual. Predicates compare against exactly zero; degenerate inputs surface
//! as explicit outcomes ([`GeometryError`], [`ConvexHull::Degenerate`],
//! `None`) rather than tolerances.
//!
//! Geometry is generic over `f32` and `f64` via [`num_traits::Float`]. The
//! rasterizer works on `f64` polygons and an integer pixel canvas.
//!
//! # Example
//!
//! ```
//! use planum::{convex_hull, delaunay_triangulation, voronoi_diagram, HullMethod, Point2};
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(5.0, 3.0),
//!     Point2::new(1.0, 4.0),
//! ];
//!
//! let hull = convex_hull(&points, HullMethod::GrahamScan);
//! assert_eq!(hull.vertices().len(), 4);
//!
//! let mesh = delaunay_triangulation(&points).unwrap();
//! assert_eq!(mesh.triangles.len(), 2);
//! assert_eq!(voronoi_diagram(&mesh).edges.len(), 1);
//! ```
//!
//! Operations emit `tracing` events at `debug` and `trace` level; install a
//! subscriber to see them.

pub mod bounds;
pub mod error;
pub mod hull;
pub mod polygon;
pub mod predicates;
pub mod primitives;
pub mod raster;
pub mod triangulation;

pub use bounds::Aabb2;
pub use error::GeometryError;
pub use hull::{convex_hull, ConvexHull, HullMethod};
pub use polygon::{convexity, edge_normals, point_in_polygon, Convexity, Polygon};
pub use predicates::{
    circumcenter, in_circumcircle, intersection_point, orientation, segments_intersect,
    Orientation,
};
pub use primitives::{Edge2, Point2, Segment2, Vec2};
pub use raster::{fill_polygon, CanvasBounds, FillStrategy, Pixel, Raster, Span};
pub use triangulation::{
    delaunay_triangulation, voronoi_diagram, Triangle, Triangulation, VoronoiDiagram,
};
