//! Edge records and row filling shared by the scanline strategies.

use super::grid::{CanvasBounds, Span};
use crate::polygon::Polygon;
use std::ops::RangeInclusive;

/// Crossings closer than this to an integer column are treated as exact.
pub(crate) const SNAP_EPSILON: f64 = 1e-9;

/// Rounds `x` to the nearest integer when it is within [`SNAP_EPSILON`].
#[inline]
pub(crate) fn snap(x: f64) -> f64 {
    let r = x.round();
    if (x - r).abs() < SNAP_EPSILON {
        r
    } else {
        x
    }
}

/// A non-horizontal polygon edge, oriented from its lower to its upper end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct EdgeRecord {
    pub y_low: f64,
    pub y_high: f64,
    pub x_low: f64,
    pub x_high: f64,
}

impl EdgeRecord {
    /// Half-open row test: the lower end counts, the upper end does not.
    #[inline]
    pub fn crosses_row(&self, y: f64) -> bool {
        self.y_low <= y && y < self.y_high
    }

    /// The x coordinate where the edge meets row `y`.
    #[inline]
    pub fn x_at(&self, y: f64) -> f64 {
        (self.x_high - self.x_low) * (y - self.y_low) / (self.y_high - self.y_low) + self.x_low
    }

    /// Change in x per unit row.
    #[inline]
    pub fn inverse_slope(&self) -> f64 {
        (self.x_high - self.x_low) / (self.y_high - self.y_low)
    }
}

/// A piece of boundary lying along a single row: a horizontal edge or a
/// vertex (where `x_low == x_high`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RowBoundary {
    pub y: f64,
    pub x_low: f64,
    pub x_high: f64,
}

/// Edges of a polygon split into those that produce crossings and those that
/// only remove boundary pixels.
#[derive(Debug, Clone, Default)]
pub(crate) struct EdgeTable {
    pub edges: Vec<EdgeRecord>,
    pub boundary: Vec<RowBoundary>,
}

impl EdgeTable {
    pub fn build(polygon: &Polygon<f64>) -> Self {
        let mut table = EdgeTable::default();

        for v in &polygon.vertices {
            table.boundary.push(RowBoundary {
                y: v.y,
                x_low: v.x,
                x_high: v.x,
            });
        }

        for edge in polygon.edges() {
            let (a, b) = (edge.start, edge.end);
            if a.y == b.y {
                table.boundary.push(RowBoundary {
                    y: a.y,
                    x_low: a.x.min(b.x),
                    x_high: a.x.max(b.x),
                });
                continue;
            }

            let (lo, hi) = if a.y < b.y { (a, b) } else { (b, a) };
            table.edges.push(EdgeRecord {
                y_low: lo.y,
                y_high: hi.y,
                x_low: lo.x,
                x_high: hi.x,
            });
        }

        table
    }

    /// Fills the spans of row `y` from its sorted crossings, then removes
    /// boundary pixels on that row.
    pub fn fill_row(&self, y: i32, crossings: &[f64], bounds: CanvasBounds) -> Vec<Span> {
        let max_x = bounds.max_x();
        let mut runs: Vec<(i32, i32)> = crossings
            .chunks_exact(2)
            .map(|pair| {
                let start = (pair[0].floor() as i32).saturating_add(1).max(0);
                let end = (pair[1].ceil() as i32).saturating_sub(1).min(max_x);
                (start, end)
            })
            .filter(|(start, end)| start <= end)
            .collect();

        let row = f64::from(y);
        for b in self.boundary.iter().filter(|b| b.y == row) {
            let lo = b.x_low.ceil() as i32;
            let hi = b.x_high.floor() as i32;
            if lo <= hi {
                runs = subtract(runs, lo, hi);
            }
        }

        runs.into_iter().map(|(s, e)| Span::new(y, s, e)).collect()
    }
}

/// Integer rows covered by the polygon's vertical extent, clipped to the
/// canvas. `None` when the polygon misses the canvas entirely.
pub(crate) fn row_range(polygon: &Polygon<f64>, bounds: CanvasBounds) -> Option<RangeInclusive<i32>> {
    let bbox = polygon.bounding_box()?;
    let first = (bbox.min.y.ceil() as i32).max(0);
    let last = (bbox.max.y.floor() as i32).min(bounds.max_y());
    (first <= last).then_some(first..=last)
}

/// Removes columns `lo..=hi` from a list of inclusive runs.
fn subtract(runs: Vec<(i32, i32)>, lo: i32, hi: i32) -> Vec<(i32, i32)> {
    let mut out = Vec::with_capacity(runs.len() + 1);
    for (s, e) in runs {
        if e < lo || s > hi {
            out.push((s, e));
            continue;
        }
        if s < lo {
            out.push((s, lo - 1));
        }
        if e > hi {
            out.push((hi + 1, e));
        }
    }
    out
}
