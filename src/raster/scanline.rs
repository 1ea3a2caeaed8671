//! Edge-driven scanline fills.

use super::edges::{row_range, snap, EdgeRecord, EdgeTable};
use super::grid::{CanvasBounds, Raster, Span};
use crate::polygon::Polygon;

/// Fills a polygon by intersecting every edge with every row.
///
/// For each row the crossings of all non-horizontal edges satisfying
/// `y_low <= y < y_high` are computed directly, sorted, and filled in pairs.
pub fn ordered_edge_fill(polygon: &Polygon<f64>, bounds: CanvasBounds) -> Raster {
    let table = EdgeTable::build(polygon);
    let Some(rows) = row_range(polygon, bounds) else {
        return Raster::new();
    };

    let mut spans: Vec<Span> = Vec::new();
    let mut crossings: Vec<f64> = Vec::with_capacity(table.edges.len());

    for y in rows {
        let row = f64::from(y);
        crossings.clear();
        crossings.extend(
            table
                .edges
                .iter()
                .filter(|e| e.crosses_row(row))
                .map(|e| snap(e.x_at(row))),
        );
        crossings.sort_by(f64::total_cmp);
        spans.extend(table.fill_row(y, &crossings, bounds));
    }

    Raster::from_spans(spans)
}

/// An edge currently intersecting the sweep row.
#[derive(Debug, Clone, Copy)]
struct ActiveEdge {
    x: f64,
    dx: f64,
    y_max: f64,
}

/// Fills a polygon with an active edge table.
///
/// Edges are sorted by their lower y and enter the table when the sweep
/// reaches that row; each live edge advances its crossing by its inverse
/// slope per row and leaves once the sweep reaches its upper y.
pub fn active_edge_fill(polygon: &Polygon<f64>, bounds: CanvasBounds) -> Raster {
    let table = EdgeTable::build(polygon);
    let Some(rows) = row_range(polygon, bounds) else {
        return Raster::new();
    };

    let mut pending: Vec<EdgeRecord> = table.edges.clone();
    pending.sort_by(|a, b| a.y_low.total_cmp(&b.y_low));

    let mut next = 0;
    let mut active: Vec<ActiveEdge> = Vec::new();
    let mut crossings: Vec<f64> = Vec::new();
    let mut spans: Vec<Span> = Vec::new();

    for y in rows {
        let row = f64::from(y);

        while let Some(edge) = pending.get(next).filter(|e| e.y_low <= row) {
            // Edges wholly below a clipped first row never become active
            if row < edge.y_high {
                active.push(ActiveEdge {
                    x: edge.x_at(row),
                    dx: edge.inverse_slope(),
                    y_max: edge.y_high,
                });
            }
            next += 1;
        }
        active.retain(|e| row < e.y_max);
        active.sort_by(|a, b| a.x.total_cmp(&b.x));

        crossings.clear();
        crossings.extend(active.iter().map(|e| snap(e.x)));
        spans.extend(table.fill_row(y, &crossings, bounds));

        for edge in &mut active {
            edge.x += edge.dx;
        }
    }

    tracing::trace!(edges = pending.len(), "active edge sweep finished");
    Raster::from_spans(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Point2;

    fn polygon(coords: &[(f64, f64)]) -> Polygon<f64> {
        Polygon::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    #[test]
    fn test_ordered_square() {
        let square = polygon(&[(10.0, 10.0), (10.0, 50.0), (50.0, 50.0), (50.0, 10.0)]);
        let raster = ordered_edge_fill(&square, CanvasBounds::default());
        assert_eq!(raster.pixel_count(), 39 * 39);
        assert_eq!(raster.spans().first(), Some(&Span::new(11, 11, 49)));
        assert_eq!(raster.spans().last(), Some(&Span::new(49, 11, 49)));
    }

    #[test]
    fn test_active_square() {
        let square = polygon(&[(10.0, 10.0), (10.0, 50.0), (50.0, 50.0), (50.0, 10.0)]);
        let raster = active_edge_fill(&square, CanvasBounds::default());
        assert_eq!(raster, ordered_edge_fill(&square, CanvasBounds::default()));
    }

    #[test]
    fn test_steep_edges_accumulate_without_drift() {
        // inverse slopes of 1/3 and -2/3 are inexact in binary
        let tri = polygon(&[(0.0, 0.0), (100.0, 300.0), (300.0, 0.0)]);
        let a = active_edge_fill(&tri, CanvasBounds::default());
        let o = ordered_edge_fill(&tri, CanvasBounds::default());
        assert!(!a.is_empty());
        assert_eq!(a, o);
    }

    #[test]
    fn test_reflex_top_vertex_excluded() {
        // notch rising from the bottom edge up to (20, 10)
        let notch = polygon(&[
            (0.0, 0.0),
            (15.0, 0.0),
            (20.0, 10.0),
            (25.0, 0.0),
            (40.0, 0.0),
            (40.0, 20.0),
            (0.0, 20.0),
        ]);
        let raster = ordered_edge_fill(&notch, CanvasBounds::default());
        assert!(!raster.contains(20, 10));
        assert!(raster.contains(19, 10));
        assert!(raster.contains(20, 11));
        assert_eq!(raster, active_edge_fill(&notch, CanvasBounds::default()));
    }

    #[test]
    fn test_off_canvas_polygon_is_empty() {
        let far = polygon(&[(-50.0, -50.0), (-10.0, -50.0), (-10.0, -10.0)]);
        assert!(ordered_edge_fill(&far, CanvasBounds::default()).is_empty());
        assert!(active_edge_fill(&far, CanvasBounds::default()).is_empty());
    }

    #[test]
    fn test_partially_clipped() {
        let square = polygon(&[(-10.0, -10.0), (-10.0, 10.0), (10.0, 10.0), (10.0, -10.0)]);
        let raster = active_edge_fill(&square, CanvasBounds::default());
        assert_eq!(raster.pixel_count(), 10 * 10);
        assert!(raster.contains(0, 0));
        assert!(!raster.contains(10, 5));
        assert_eq!(raster, ordered_edge_fill(&square, CanvasBounds::default()));
    }
}
