//! Seed-driven flood fills.
//!
//! Both fills start from the vertex average of the polygon and grow through
//! 4-connected neighbours that lie on the canvas and strictly inside the
//! polygon. Worklists are explicit stacks, so fill size is bounded by heap
//! memory rather than call depth.

use super::grid::{CanvasBounds, Pixel, Raster, Span};
use crate::error::GeometryError;
use crate::polygon::Polygon;
use crate::primitives::Point2;
use std::collections::HashSet;

/// Pixel membership test shared by both fills.
struct Region<'a> {
    polygon: &'a Polygon<f64>,
    bounds: CanvasBounds,
}

impl Region<'_> {
    #[inline]
    fn contains(&self, p: Pixel) -> bool {
        self.bounds.contains(p) && self.polygon.contains(Point2::new(f64::from(p.x), f64::from(p.y)))
    }
}

/// The seed pixel: the vertex average, truncated toward zero.
///
/// # Errors
///
/// Returns [`GeometryError::SeedOutsidePolygon`] if that pixel is off the
/// canvas or not strictly inside the polygon.
pub fn seed_pixel(polygon: &Polygon<f64>, bounds: CanvasBounds) -> Result<Pixel, GeometryError> {
    let center = polygon.vertex_centroid().unwrap_or_else(Point2::origin);
    let seed = Pixel::new(center.x.trunc() as i32, center.y.trunc() as i32);

    let region = Region { polygon, bounds };
    if region.contains(seed) {
        Ok(seed)
    } else {
        tracing::debug!(x = seed.x, y = seed.y, "seed rejected");
        Err(GeometryError::SeedOutsidePolygon {
            x: seed.x,
            y: seed.y,
        })
    }
}

/// Pixel-at-a-time 4-connected flood fill.
///
/// # Errors
///
/// See [`seed_pixel`].
pub fn seed_fill(polygon: &Polygon<f64>, bounds: CanvasBounds) -> Result<Raster, GeometryError> {
    let seed = seed_pixel(polygon, bounds)?;
    let region = Region { polygon, bounds };

    let mut visited: HashSet<Pixel> = HashSet::from([seed]);
    let mut stack = vec![seed];
    let mut filled: Vec<Pixel> = Vec::new();

    while let Some(p) = stack.pop() {
        if !region.contains(p) {
            continue;
        }
        filled.push(p);

        for n in p.neighbors() {
            if bounds.contains(n) && visited.insert(n) {
                stack.push(n);
            }
        }
    }

    tracing::trace!(visited = visited.len(), filled = filled.len(), "seed fill finished");
    Ok(Raster::from_pixels(filled))
}

/// Span-at-a-time flood fill.
///
/// Each seed popped from the stack is widened to its maximal run of unfilled
/// member pixels. The rows above and below are then scanned across that run,
/// and a new seed is pushed at the start of every unfilled member run found.
///
/// # Errors
///
/// See [`seed_pixel`].
pub fn scanline_seed_fill(
    polygon: &Polygon<f64>,
    bounds: CanvasBounds,
) -> Result<Raster, GeometryError> {
    let seed = seed_pixel(polygon, bounds)?;
    let region = Region { polygon, bounds };

    let mut filled: HashSet<Pixel> = HashSet::new();
    let mut spans: Vec<Span> = Vec::new();
    let mut stack = vec![seed];

    let open = |p: Pixel, filled: &HashSet<Pixel>| !filled.contains(&p) && region.contains(p);

    while let Some(p) = stack.pop() {
        if !open(p, &filled) {
            continue;
        }

        let mut left = p.x;
        while open(Pixel::new(left - 1, p.y), &filled) {
            left -= 1;
        }
        let mut right = p.x;
        while open(Pixel::new(right + 1, p.y), &filled) {
            right += 1;
        }

        filled.extend((left..=right).map(|x| Pixel::new(x, p.y)));
        spans.push(Span::new(p.y, left, right));

        for y in [p.y - 1, p.y + 1] {
            let mut in_run = false;
            for x in left..=right {
                let candidate = Pixel::new(x, y);
                let member = open(candidate, &filled);
                if member && !in_run {
                    stack.push(candidate);
                }
                in_run = member;
            }
        }
    }

    tracing::trace!(spans = spans.len(), "scanline seed fill finished");
    Ok(Raster::from_spans(spans))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygon(coords: &[(f64, f64)]) -> Polygon<f64> {
        Polygon::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    fn square() -> Polygon<f64> {
        polygon(&[(10.0, 10.0), (10.0, 50.0), (50.0, 50.0), (50.0, 10.0)])
    }

    #[test]
    fn test_seed_pixel_truncates() {
        let tri = polygon(&[(0.0, 0.0), (10.0, 0.0), (0.0, 11.0)]);
        assert_eq!(seed_pixel(&tri, CanvasBounds::default()), Ok(Pixel::new(3, 3)));
        assert_eq!(seed_pixel(&square(), CanvasBounds::default()), Ok(Pixel::new(30, 30)));
    }

    #[test]
    fn test_seed_outside_rejected() {
        // a C shape whose vertex average lands in the gap
        let c_shape = polygon(&[
            (0.0, 0.0),
            (60.0, 0.0),
            (60.0, 10.0),
            (10.0, 10.0),
            (10.0, 50.0),
            (60.0, 50.0),
            (60.0, 60.0),
            (0.0, 60.0),
        ]);
        assert_eq!(
            seed_fill(&c_shape, CanvasBounds::default()),
            Err(GeometryError::SeedOutsidePolygon { x: 32, y: 30 })
        );
        assert_eq!(
            scanline_seed_fill(&c_shape, CanvasBounds::default()),
            Err(GeometryError::SeedOutsidePolygon { x: 32, y: 30 })
        );
    }

    #[test]
    fn test_seed_off_canvas_rejected() {
        let far = polygon(&[(-40.0, -40.0), (-10.0, -40.0), (-10.0, -10.0), (-40.0, -10.0)]);
        assert_eq!(
            seed_fill(&far, CanvasBounds::default()),
            Err(GeometryError::SeedOutsidePolygon { x: -25, y: -25 })
        );
    }

    #[test]
    fn test_seed_fill_square() {
        let raster = seed_fill(&square(), CanvasBounds::default()).unwrap();
        assert_eq!(raster.pixel_count(), 39 * 39);
        assert!(raster.contains(11, 11));
        assert!(raster.contains(49, 49));
        assert!(!raster.contains(10, 30));
        assert!(!raster.contains(30, 50));
    }

    #[test]
    fn test_scanline_seed_fill_square() {
        let raster = scanline_seed_fill(&square(), CanvasBounds::default()).unwrap();
        assert_eq!(raster, seed_fill(&square(), CanvasBounds::default()).unwrap());
    }

    #[test]
    fn test_scanline_seed_fill_u_shape() {
        // two arms above a solid base; rows from y = 25 up split in two
        let u_shape = polygon(&[
            (0.0, 0.0),
            (30.0, 0.0),
            (30.0, 30.0),
            (20.0, 30.0),
            (20.0, 25.0),
            (10.0, 25.0),
            (10.0, 30.0),
            (0.0, 30.0),
        ]);
        let bounds = CanvasBounds::default();
        assert_eq!(seed_pixel(&u_shape, bounds), Ok(Pixel::new(15, 21)));

        let simple = seed_fill(&u_shape, bounds).unwrap();
        let scan = scanline_seed_fill(&u_shape, bounds).unwrap();
        assert_eq!(simple, scan);
        assert!(scan.contains(5, 28));
        assert!(scan.contains(25, 28));
        assert!(!scan.contains(15, 27));
        assert!(!scan.contains(15, 25));
    }

    #[test]
    fn test_fill_clipped_by_canvas() {
        let big = polygon(&[(0.0, 0.0), (40.0, 0.0), (40.0, 40.0), (0.0, 40.0)]);
        let bounds = CanvasBounds::new(30, 30);
        let raster = seed_fill(&big, bounds).unwrap();
        assert_eq!(raster.pixel_count(), 29 * 29);
        assert_eq!(raster, scanline_seed_fill(&big, bounds).unwrap());
    }
}
