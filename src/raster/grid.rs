//! Pixel, span and canonical raster types.

use std::collections::HashMap;

/// An integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

impl Pixel {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four edge-adjacent neighbours: left, right, below, above.
    #[inline]
    pub fn neighbors(self) -> [Pixel; 4] {
        [
            Pixel::new(self.x.saturating_sub(1), self.y),
            Pixel::new(self.x.saturating_add(1), self.y),
            Pixel::new(self.x, self.y.saturating_sub(1)),
            Pixel::new(self.x, self.y.saturating_add(1)),
        ]
    }
}

/// A horizontal run of pixels on row `y`, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub y: i32,
    pub x_start: i32,
    pub x_end: i32,
}

impl Span {
    #[inline]
    pub fn new(y: i32, x_start: i32, x_end: i32) -> Self {
        Self { y, x_start, x_end }
    }

    /// Number of pixels in the span (0 when `x_start > x_end`).
    #[inline]
    pub fn len(self) -> usize {
        if self.x_start > self.x_end {
            0
        } else {
            (i64::from(self.x_end) - i64::from(self.x_start) + 1) as usize
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.x_start > self.x_end
    }

    #[inline]
    pub fn contains(self, x: i32, y: i32) -> bool {
        self.y == y && self.x_start <= x && x <= self.x_end
    }
}

/// The drawing surface: pixels `0..width` by `0..height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasBounds {
    pub width: u32,
    pub height: u32,
}

impl CanvasBounds {
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Largest valid column, or -1 for a zero-width canvas.
    #[inline]
    pub(crate) fn max_x(self) -> i32 {
        i32::try_from(self.width).unwrap_or(i32::MAX) - 1
    }

    /// Largest valid row, or -1 for a zero-height canvas.
    #[inline]
    pub(crate) fn max_y(self) -> i32 {
        i32::try_from(self.height).unwrap_or(i32::MAX) - 1
    }

    /// Returns `true` if the pixel lies on the canvas.
    #[inline]
    pub fn contains(self, pixel: Pixel) -> bool {
        (0..=self.max_x()).contains(&pixel.x) && (0..=self.max_y()).contains(&pixel.y)
    }
}

impl Default for CanvasBounds {
    /// An 800 x 600 canvas.
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// A set of filled pixels in canonical form.
///
/// Spans are sorted by row, then by column, and never overlap or touch, so
/// two rasters compare equal exactly when they cover the same pixels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Raster {
    spans: Vec<Span>,
}

impl Raster {
    /// Creates an empty raster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a raster from spans in any order, merging overlaps.
    ///
    /// # Example
    ///
    /// ```
    /// use planum::raster::{Raster, Span};
    ///
    /// let raster = Raster::from_spans(vec![
    ///     Span::new(0, 5, 9),
    ///     Span::new(0, 0, 4),
    ///     Span::new(-1, 2, 2),
    /// ]);
    /// assert_eq!(raster.spans(), &[Span::new(-1, 2, 2), Span::new(0, 0, 9)]);
    /// ```
    pub fn from_spans<I>(spans: I) -> Self
    where
        I: IntoIterator<Item = Span>,
    {
        let mut sorted: Vec<Span> = spans.into_iter().filter(|s| !s.is_empty()).collect();
        sorted.sort_by_key(|s| (s.y, s.x_start));

        let mut merged: Vec<Span> = Vec::with_capacity(sorted.len());
        for span in sorted {
            match merged.last_mut() {
                Some(last) if last.y == span.y && span.x_start <= last.x_end.saturating_add(1) => {
                    last.x_end = last.x_end.max(span.x_end);
                }
                _ => merged.push(span),
            }
        }

        Self { spans: merged }
    }

    /// Builds a raster from individual pixels; duplicates are ignored.
    pub fn from_pixels<I>(pixels: I) -> Self
    where
        I: IntoIterator<Item = Pixel>,
    {
        let mut rows: HashMap<i32, Vec<i32>> = HashMap::new();
        for p in pixels {
            rows.entry(p.y).or_default().push(p.x);
        }

        let spans = rows.into_iter().flat_map(|(y, mut xs)| {
            xs.sort_unstable();
            xs.dedup();
            runs(&xs).into_iter().map(move |(a, b)| Span::new(y, a, b))
        });
        Self::from_spans(spans)
    }

    /// The canonical spans.
    #[inline]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Iterates the filled pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.spans
            .iter()
            .flat_map(|s| (s.x_start..=s.x_end).map(move |x| Pixel::new(x, s.y)))
    }

    /// Total number of filled pixels.
    pub fn pixel_count(&self) -> usize {
        self.spans.iter().map(|s| s.len()).sum()
    }

    /// Returns `true` if pixel `(x, y)` is filled.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let i = self.spans.partition_point(|s| (s.y, s.x_end) < (y, x));
        self.spans.get(i).is_some_and(|s| s.contains(x, y))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

impl FromIterator<Pixel> for Raster {
    fn from_iter<I: IntoIterator<Item = Pixel>>(iter: I) -> Self {
        Self::from_pixels(iter)
    }
}

/// Splits sorted, distinct columns into inclusive runs of consecutive values.
fn runs(xs: &[i32]) -> Vec<(i32, i32)> {
    let mut out: Vec<(i32, i32)> = Vec::new();
    for &x in xs {
        match out.last_mut() {
            Some((_, end)) if *end + 1 == x => *end = x,
            _ => out.push((x, x)),
        }
    }
    out
}
