//! Polygon membership and shape analysis.
//!
//! This module provides:
//! - Point-in-polygon testing (even-odd ray casting, boundary exclusive)
//! - Convexity classification with the dominant turn direction
//! - Outward edge normals of convex polygons
//! - Area and centroid calculation
//!
//! # Example
//!
//! ```
//! use planum::polygon::Polygon;
//! use planum::Point2;
//!
//! let triangle = Polygon::new(vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(0.0, 4.0),
//! ]);
//!
//! assert!(triangle.contains(Point2::new(1.0, 1.0)));
//! assert!(triangle.convexity().convex);
//! assert_eq!(triangle.edge_normals().unwrap().len(), 3);
//! ```

mod core;

pub use self::core::{
    convexity, edge_normals, point_in_polygon, polygon_area, polygon_centroid, polygon_is_convex,
    polygon_signed_area, vertex_centroid, Convexity, Polygon,
};
