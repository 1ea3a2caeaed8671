//! Polygon interior rasterization.
//!
//! Four interchangeable strategies fill the integer pixels lying strictly
//! inside a polygon and on the canvas. Boundary pixels are never filled, so
//! every strategy produces the same [`Raster`] for a simple polygon whose
//! interior is 4-connected.
//!
//! | Strategy | Approach |
//! |---|---|
//! | [`FillStrategy::OrderedEdges`] | per-row crossings of every edge |
//! | [`FillStrategy::ActiveEdges`] | incremental active edge table |
//! | [`FillStrategy::SeedSimple`] | pixel flood fill from the vertex average |
//! | [`FillStrategy::SeedScanline`] | span flood fill from the vertex average |
//!
//! # Example
//!
//! ```
//! use planum::raster::{fill_polygon, CanvasBounds, FillStrategy};
//! use planum::{Point2, Polygon};
//!
//! let square = Polygon::new(vec![
//!     Point2::new(10.0, 10.0),
//!     Point2::new(10.0, 50.0),
//!     Point2::new(50.0, 50.0),
//!     Point2::new(50.0, 10.0),
//! ]);
//!
//! let raster = fill_polygon(&square, CanvasBounds::default(), FillStrategy::ActiveEdges).unwrap();
//! assert_eq!(raster.pixel_count(), 39 * 39);
//! assert!(raster.contains(11, 11));
//! assert!(!raster.contains(10, 10));
//! ```

mod edges;
mod grid;
mod scanline;
mod seed;

pub use grid::{CanvasBounds, Pixel, Raster, Span};
pub use scanline::{active_edge_fill, ordered_edge_fill};
pub use seed::{scanline_seed_fill, seed_fill, seed_pixel};

use crate::error::GeometryError;
use crate::polygon::Polygon;

/// Polygon fill algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillStrategy {
    /// Intersect every edge with every row.
    OrderedEdges,
    /// Sweep rows with an active edge table.
    #[default]
    ActiveEdges,
    /// Flood fill one pixel at a time.
    SeedSimple,
    /// Flood fill one span at a time.
    SeedScanline,
}

impl FillStrategy {
    /// Every strategy, in declaration order.
    pub const ALL: [FillStrategy; 4] = [
        FillStrategy::OrderedEdges,
        FillStrategy::ActiveEdges,
        FillStrategy::SeedSimple,
        FillStrategy::SeedScanline,
    ];

    /// Fills `polygon` with this strategy. See [`fill_polygon`].
    pub fn fill(self, polygon: &Polygon<f64>, bounds: CanvasBounds) -> Result<Raster, GeometryError> {
        fill_polygon(polygon, bounds, self)
    }
}

/// Fills the interior of `polygon` on a canvas.
///
/// # Errors
///
/// - [`GeometryError::TooFewPoints`] if the polygon has fewer than 3 vertices.
/// - [`GeometryError::SeedOutsidePolygon`] from the seed strategies when the
///   vertex average is not an interior pixel.
pub fn fill_polygon(
    polygon: &Polygon<f64>,
    bounds: CanvasBounds,
    strategy: FillStrategy,
) -> Result<Raster, GeometryError> {
    if polygon.len() < 3 {
        return Err(GeometryError::TooFewPoints {
            required: 3,
            found: polygon.len(),
        });
    }

    let raster = match strategy {
        FillStrategy::OrderedEdges => ordered_edge_fill(polygon, bounds),
        FillStrategy::ActiveEdges => active_edge_fill(polygon, bounds),
        FillStrategy::SeedSimple => seed_fill(polygon, bounds)?,
        FillStrategy::SeedScanline => scanline_seed_fill(polygon, bounds)?,
    };

    tracing::debug!(
        ?strategy,
        vertices = polygon.len(),
        pixels = raster.pixel_count(),
        "polygon filled"
    );

    Ok(raster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Point2;

    fn polygon(coords: &[(f64, f64)]) -> Polygon<f64> {
        Polygon::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    fn fill_all(p: &Polygon<f64>) -> Vec<Raster> {
        FillStrategy::ALL
            .iter()
            .map(|s| s.fill(p, CanvasBounds::default()).unwrap())
            .collect()
    }

    fn assert_all_agree(p: &Polygon<f64>) -> Raster {
        let rasters = fill_all(p);
        for (strategy, raster) in FillStrategy::ALL.iter().zip(&rasters) {
            assert_eq!(raster, &rasters[0], "{strategy:?} disagrees");
        }
        rasters[0].clone()
    }

    #[test]
    fn test_square_exact_pixels() {
        let square = polygon(&[(10.0, 10.0), (10.0, 50.0), (50.0, 50.0), (50.0, 10.0)]);
        let expected = Raster::from_spans((11..=49).map(|y| Span::new(y, 11, 49)));
        for raster in fill_all(&square) {
            assert_eq!(raster, expected);
        }
    }

    #[test]
    fn test_triangle_agrees() {
        let tri = polygon(&[(10.0, 10.0), (90.0, 10.0), (50.0, 70.0)]);
        let raster = assert_all_agree(&tri);
        assert!(raster.contains(50, 69));
        assert!(!raster.contains(50, 70));
        assert!(!raster.contains(20, 10));
    }

    #[test]
    fn test_concave_chevron_agrees() {
        let chevron = polygon(&[(10.0, 10.0), (60.0, 30.0), (110.0, 10.0), (60.0, 90.0)]);
        let raster = assert_all_agree(&chevron);
        assert!(raster.contains(60, 31));
        assert!(!raster.contains(60, 30));
        assert!(!raster.contains(60, 20));
    }

    #[test]
    fn test_diamond_agrees() {
        let diamond = polygon(&[(50.0, 10.0), (90.0, 50.0), (50.0, 90.0), (10.0, 50.0)]);
        let raster = assert_all_agree(&diamond);
        assert!(raster.contains(50, 11));
        assert!(!raster.contains(50, 10));
        assert!(!raster.contains(90, 50));
        // rows narrow by one pixel per side per step
        assert_eq!(raster.spans()[0], Span::new(11, 50, 50));
    }

    #[test]
    fn test_seed_fills_miss_diagonal_pixel() {
        // (67, 8) sits in the sharp corner at (68, 7) and touches the rest
        // of the interior only diagonally
        let sliver = polygon(&[(68.0, 7.0), (3.0, 87.0), (3.0, 42.0)]);
        let rasters = fill_all(&sliver);
        let (scan, seeded) = (&rasters[0], &rasters[2]);

        assert_eq!(scan, &rasters[1]);
        assert_eq!(seeded, &rasters[3]);
        assert!(scan.contains(67, 8));
        assert!(!seeded.contains(67, 8));
        assert_eq!(scan.pixel_count(), 1436);
        assert_eq!(seeded.pixel_count(), 1435);
        assert!(seeded.pixels().all(|p| scan.contains(p.x, p.y)));
    }

    #[test]
    fn test_winding_does_not_matter() {
        let ccw = polygon(&[(10.0, 10.0), (90.0, 10.0), (50.0, 70.0)]);
        let cw = polygon(&[(50.0, 70.0), (90.0, 10.0), (10.0, 10.0)]);
        assert_eq!(fill_all(&ccw), fill_all(&cw));
    }

    #[test]
    fn test_too_few_points() {
        let segment = polygon(&[(0.0, 0.0), (10.0, 10.0)]);
        for strategy in FillStrategy::ALL {
            assert_eq!(
                fill_polygon(&segment, CanvasBounds::default(), strategy),
                Err(GeometryError::TooFewPoints {
                    required: 3,
                    found: 2
                })
            );
        }
    }

    #[test]
    fn test_idempotent() {
        let tri = polygon(&[(10.0, 10.0), (90.0, 10.0), (50.0, 70.0)]);
        for strategy in FillStrategy::ALL {
            let bounds = CanvasBounds::default();
            assert_eq!(strategy.fill(&tri, bounds), strategy.fill(&tri, bounds));
        }
    }

    #[test]
    fn test_pixels_strictly_inside() {
        let tri = polygon(&[(10.0, 10.0), (90.0, 10.0), (50.0, 70.0)]);
        let raster = fill_polygon(&tri, CanvasBounds::default(), FillStrategy::OrderedEdges).unwrap();
        for p in raster.pixels() {
            assert!(tri.contains(Point2::new(f64::from(p.x), f64::from(p.y))));
        }
    }
}
