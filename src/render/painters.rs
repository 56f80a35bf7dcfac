//! Painter types
//!
//! A painter knows how to draw itself into whatever frame it is handed. The
//! variants form a closed set; each is its own type implementing [`Paint`],
//! and [`PainterKind`] dispatches over them. [`Painter`] is the shared,
//! immutable handle that combinators pass around, so one sub-picture can
//! appear under many parents without being copied.

use std::sync::Arc;

use enum_dispatch::enum_dispatch;

use crate::errors::PaintError;
use crate::frame::Frame;
use crate::log::warn;
use crate::types::{Color, Raster, Segment, Vector};

use super::context::DrawingContext;
use super::types::StrokeStyle;

/// Common behavior for all painters
#[enum_dispatch]
pub trait Paint {
    /// Draw into `cx`, with the unit square mapped onto `frame`.
    fn paint(&self, cx: &mut DrawingContext, frame: &Frame);
}

// ============================================================================
// Painter Types
// ============================================================================

/// Fills its whole frame with one color.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPainter {
    pub color: Color,
}

impl Paint for FillPainter {
    fn paint(&self, cx: &mut DrawingContext, frame: &Frame) {
        let [a, b, c, d] = frame.corners();
        cx.draw_quad(a, b, c, d, self.color);
    }
}

/// A filled triangle given by three unit-square points.
#[derive(Debug, Clone, PartialEq)]
pub struct TrianglePainter {
    pub a: Vector,
    pub b: Vector,
    pub c: Vector,
    pub color: Color,
}

impl Paint for TrianglePainter {
    fn paint(&self, cx: &mut DrawingContext, frame: &Frame) {
        cx.draw_triangle(frame.project(self.a), frame.project(self.b), frame.project(self.c), self.color);
    }
}

/// Strokes a list of unit-square segments.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentsPainter {
    pub segments: Vec<Segment>,
    pub style: StrokeStyle,
}

impl Paint for SegmentsPainter {
    fn paint(&self, cx: &mut DrawingContext, frame: &Frame) {
        let width = self.style.width_in(frame);
        for segment in &self.segments {
            let projected = frame.project(*segment);
            if projected.direction().try_normalize(1.0).is_none() {
                warn!(start = %segment.start, end = %segment.end, "segment collapses to a point in this frame");
                continue;
            }
            cx.draw_line(projected.start, projected.end, self.style.color, width, self.style.cap);
        }
    }
}

/// Warps a raster onto its frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePainter {
    pub raster: Raster,
}

impl Paint for ImagePainter {
    fn paint(&self, cx: &mut DrawingContext, frame: &Frame) {
        cx.draw_pixels(
            self.raster.width(),
            self.raster.height(),
            self.raster.pixels(),
            frame.origin,
            frame.edge1,
            frame.edge2,
        );
    }
}

/// Reparents a painter into a sub-frame of whatever frame it is painted into.
#[derive(Debug, Clone)]
pub struct TransformPainter {
    pub painter: Painter,
    /// Fixed at construction from an origin and two corners.
    pub frame: Frame,
}

impl Paint for TransformPainter {
    fn paint(&self, cx: &mut DrawingContext, frame: &Frame) {
        self.painter.paint(cx, &frame.project(self.frame));
    }
}

/// Paints `first`, then `second`, into the same frame.
#[derive(Debug, Clone)]
pub struct OverlayPainter {
    pub first: Painter,
    pub second: Painter,
}

impl Paint for OverlayPainter {
    fn paint(&self, cx: &mut DrawingContext, frame: &Frame) {
        self.first.paint(cx, frame);
        self.second.paint(cx, frame);
    }
}

// ============================================================================
// Painter Enum
// ============================================================================

/// All painter variants
#[enum_dispatch(Paint)]
#[derive(Debug, Clone)]
pub enum PainterKind {
    Fill(FillPainter),
    Triangle(TrianglePainter),
    Segments(SegmentsPainter),
    Image(ImagePainter),
    Transform(TransformPainter),
    Overlay(OverlayPainter),
}

/// Shared handle to an immutable painter.
///
/// Cloning is a reference-count bump. Painters are never mutated after
/// construction, so a handle can be reused anywhere in a picture and sent
/// across threads.
#[derive(Debug, Clone)]
pub struct Painter(Arc<PainterKind>);

impl Painter {
    fn new(kind: impl Into<PainterKind>) -> Self {
        Painter(Arc::new(kind.into()))
    }

    pub fn kind(&self) -> &PainterKind {
        &self.0
    }

    /// True if both handles point at the same painter node.
    pub fn ptr_eq(&self, other: &Painter) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Solid fill of the whole frame.
    pub fn fill(color: Color) -> Self {
        Self::new(FillPainter { color })
    }

    pub fn triangle(a: Vector, b: Vector, c: Vector, color: Color) -> Self {
        Self::new(TrianglePainter { a, b, c, color })
    }

    pub fn segments(segments: Vec<Segment>, style: StrokeStyle) -> Self {
        Self::new(SegmentsPainter { segments, style })
    }

    /// Image painter from a caller-owned, row-major buffer (row 0 at the top).
    pub fn image(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self, PaintError> {
        Ok(Self::from_raster(Raster::new(width, height, pixels)?))
    }

    pub fn from_raster(raster: Raster) -> Self {
        Self::new(ImagePainter { raster })
    }

    /// Paint `self` into the parallelogram whose unit-square corners
    /// `(0,0)`, `(1,0)`, `(0,1)` land on `origin`, `corner1`, `corner2`.
    pub fn transform(&self, origin: Vector, corner1: Vector, corner2: Vector) -> Self {
        Self::new(TransformPainter {
            painter: self.clone(),
            frame: Frame::from_corners(origin, corner1, corner2),
        })
    }

    /// `self` first, then `top` over it.
    pub fn over(&self, top: &Painter) -> Self {
        Self::new(OverlayPainter {
            first: self.clone(),
            second: top.clone(),
        })
    }
}

impl Paint for Painter {
    fn paint(&self, cx: &mut DrawingContext, frame: &Frame) {
        self.0.paint(cx, frame);
    }
}

impl From<PainterKind> for Painter {
    fn from(kind: PainterKind) -> Self {
        Painter(Arc::new(kind))
    }
}
