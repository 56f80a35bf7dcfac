//! Geometry helpers for scan conversion: edge functions, scan bounds, stroke outlines.
//!
//! Triangles here are already in raster space (y-down, one unit per pixel).

use std::ops::Range;

use glam::DVec2;

use crate::types::Vector;

use super::types::LineCapStyle;

/// Edge function for the directed edge `a -> b`.
///
/// Non-negative when `p` lies on the inner side of the edge for triangles in
/// the conventional winding, zero when `p` is on the edge's supporting line.
#[inline]
pub fn edge(a: DVec2, b: DVec2, p: DVec2) -> f64 {
    (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
}

/// A non-degenerate triangle in raster space, stored in the winding the
/// inclusion test expects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    a: DVec2,
    b: DVec2,
    c: DVec2,
}

impl Triangle {
    /// Build a triangle for scan conversion.
    ///
    /// Returns `None` for zero-area triangles. Triangles wound the other way
    /// (what a mirrored frame produces) get `b` and `c` swapped.
    pub fn oriented(a: DVec2, b: DVec2, c: DVec2) -> Option<Self> {
        let area = edge(a, b, c);
        if area > 0.0 {
            Some(Triangle { a, b, c })
        } else if area < 0.0 {
            Some(Triangle { a, b: c, c: b })
        } else {
            None
        }
    }

    /// Inclusive half-plane test against all three edges.
    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        edge(self.a, self.b, p) >= 0.0 && edge(self.b, self.c, p) >= 0.0 && edge(self.c, self.a, p) >= 0.0
    }

    pub fn min(&self) -> DVec2 {
        self.a.min(self.b).min(self.c)
    }

    pub fn max(&self) -> DVec2 {
        self.a.max(self.b).max(self.c)
    }

    /// Pixel rows and columns whose centers can possibly fall inside, clipped to
    /// a `width` x `height` buffer. Scanning only these gives the same pixels as
    /// scanning the whole buffer.
    pub fn scan_bounds(&self, width: u32, height: u32) -> ScanBounds {
        let size = DVec2::new(width as f64, height as f64);
        let lo = self.min().clamp(DVec2::ZERO, size).floor();
        let hi = self.max().clamp(DVec2::ZERO, size).ceil();
        ScanBounds {
            cols: lo.x as u32..hi.x as u32,
            rows: lo.y as u32..hi.y as u32,
        }
    }
}

/// Rectangle of pixel indices to visit for one triangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanBounds {
    pub cols: Range<u32>,
    pub rows: Range<u32>,
}

impl ScanBounds {
    pub fn is_empty(&self) -> bool {
        self.cols.is_empty() || self.rows.is_empty()
    }
}

/// Center of pixel `(x, y)` in raster space.
#[inline]
pub fn pixel_center(x: u32, y: u32) -> DVec2 {
    DVec2::new(x as f64 + 0.5, y as f64 + 0.5)
}

/// The quad covered by a stroke from `a` to `b`, in a winding `draw_quad` can split.
///
/// # Panics
///
/// Panics if `a == b`: a zero-length line has no direction to offset along.
pub fn stroke_outline(a: Vector, b: Vector, width: f64, cap: LineCapStyle) -> [Vector; 4] {
    let q = (b - a).normalize(width * 0.5);
    let r = q.rotate90_clockwise();
    match cap {
        LineCapStyle::Butt => [a + r, b + r, b - r, a - r],
        LineCapStyle::Square => [a - q + r, b + q + r, b + q - r, a - q - r],
    }
}
