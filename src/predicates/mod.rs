//! Exact-sign geometric predicates.
//!
//! Every test here compares against exactly zero. Degenerate configurations
//! (collinear triples, parallel lines, zero-area triangles) are reported as
//! first-class outcomes, either as [`Orientation::Collinear`] or as `None`.

mod circle;
mod orient;
mod segment;

pub use circle::{circumcenter, in_circumcircle};
pub use orient::{are_collinear, cross, distance, orientation, Orientation};
pub use segment::{intersection_point, segment_polygon_crossings, segments_intersect};
