//! Floating-point geometric primitives.

mod edge2;
mod point2;
mod segment2;
mod vec2;

pub use edge2::Edge2;
pub use point2::{dedup_points, Point2, PointKey};
pub use segment2::Segment2;
pub use vec2::Vec2;
