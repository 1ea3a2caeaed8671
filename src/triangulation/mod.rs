//! Delaunay triangulation and its Voronoi dual.

mod delaunay;
mod triangle;
mod voronoi;

pub use delaunay::{delaunay_triangulation, Triangulation};
pub use triangle::{Triangle, TriangleKey};
pub use voronoi::{voronoi_diagram, voronoi_from_triangles, VoronoiDiagram, VoronoiEdge};
