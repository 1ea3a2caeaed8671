//! Error types for planum operations.

use thiserror::Error;

/// Errors reported by geometry operations that cannot produce a result.
///
/// Numerically ambiguous outcomes (parallel lines, collinear circumcircles)
/// are not errors; those operations return `Option` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Not enough distinct points for the operation.
    #[error("degenerate input: need at least {required} distinct points, got {found}")]
    TooFewPoints {
        /// Minimum number of distinct points the operation needs.
        required: usize,
        /// Number of distinct points supplied.
        found: usize,
    },

    /// All input points lie on a single line.
    #[error("degenerate input: points are collinear, cannot triangulate")]
    CollinearPoints,

    /// Two consecutive polygon vertices coincide.
    #[error("degenerate input: polygon has repeated consecutive vertices")]
    RepeatedVertex,

    /// The operation is only defined for convex polygons.
    #[error("polygon is not convex")]
    NotConvex,

    /// The seed pixel chosen for a flood fill is not inside the polygon.
    #[error("seed pixel ({x}, {y}) is not inside the polygon")]
    SeedOutsidePolygon {
        /// Seed column.
        x: i32,
        /// Seed row.
        y: i32,
    },
}
