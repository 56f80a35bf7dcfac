//! Combinators: new painters built from existing ones
//!
//! Everything geometric here reduces to [`transform`] and [`over`]. None of
//! these functions copy their arguments; the returned painter shares them.

use crate::types::{Color, Segment, Vector};

use super::painters::Painter;
use super::types::StrokeStyle;

const THIRD: f64 = 1.0 / 3.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

#[inline]
fn v(x: f64, y: f64) -> Vector {
    Vector::new(x, y)
}

// ============================================================================
// Primitive painters
// ============================================================================

/// Solid fill of the whole frame.
pub fn color(c: Color) -> Painter {
    Painter::fill(c)
}

pub fn black() -> Painter {
    color(Color::BLACK)
}

pub fn gray() -> Painter {
    color(Color::GRAY)
}

pub fn white() -> Painter {
    color(Color::WHITE)
}

pub fn red() -> Painter {
    color(Color::RED)
}

pub fn blue() -> Painter {
    color(Color::BLUE)
}

/// Stroke each segment with `style`.
pub fn segments(segments: Vec<Segment>, style: StrokeStyle) -> Painter {
    Painter::segments(segments, style)
}

/// Polyline through `points`: each consecutive pair becomes one segment.
/// Fewer than two points draws nothing.
pub fn path(points: &[Vector], style: StrokeStyle) -> Painter {
    let segs = points.windows(2).map(|w| Segment::new(w[0], w[1])).collect();
    Painter::segments(segs, style)
}

/// Filled triangle with unit-square corners `a`, `b`, `c`.
pub fn triangle(a: Vector, b: Vector, c: Vector, color: Color) -> Painter {
    Painter::triangle(a, b, c, color)
}

/// Solid parallelogram spanned from `origin` to `corner1` and `corner2`.
pub fn parallelogram(origin: Vector, corner1: Vector, corner2: Vector, c: Color) -> Painter {
    transform(&color(c), origin, corner1, corner2)
}

// ============================================================================
// Composition
// ============================================================================

/// `painter` mapped into the parallelogram whose unit-square corners
/// `(0,0)`, `(1,0)`, `(0,1)` land on `origin`, `corner1`, `corner2`.
pub fn transform(painter: &Painter, origin: Vector, corner1: Vector, corner2: Vector) -> Painter {
    painter.transform(origin, corner1, corner2)
}

/// `bottom` first, then `top` over it.
pub fn over(bottom: &Painter, top: &Painter) -> Painter {
    bottom.over(top)
}

/// Mirror left to right.
pub fn flip_horiz(p: &Painter) -> Painter {
    transform(p, v(1.0, 0.0), v(0.0, 0.0), v(1.0, 1.0))
}

/// Mirror top to bottom.
pub fn flip_vert(p: &Painter) -> Painter {
    transform(p, v(0.0, 1.0), v(1.0, 1.0), v(0.0, 0.0))
}

/// Quarter turn counterclockwise.
pub fn rotate90(p: &Painter) -> Painter {
    transform(p, v(1.0, 0.0), v(1.0, 1.0), v(0.0, 0.0))
}

pub fn rotate180(p: &Painter) -> Painter {
    rotate90(&rotate90(p))
}

pub fn rotate270(p: &Painter) -> Painter {
    rotate90(&rotate180(p))
}

/// `a` in the left half, `b` in the right half.
pub fn beside(a: &Painter, b: &Painter) -> Painter {
    over(
        &transform(a, v(0.0, 0.0), v(0.5, 0.0), v(0.0, 1.0)),
        &transform(b, v(0.5, 0.0), v(1.0, 0.0), v(0.5, 1.0)),
    )
}

/// `a` in the bottom half, `b` in the top half.
pub fn below(a: &Painter, b: &Painter) -> Painter {
    over(
        &transform(a, v(0.0, 0.0), v(1.0, 0.0), v(0.0, 0.5)),
        &transform(b, v(0.0, 0.5), v(1.0, 0.5), v(0.0, 1.0)),
    )
}

/// `a` in the top half, `b` in the bottom half.
pub fn above(a: &Painter, b: &Painter) -> Painter {
    below(b, a)
}

/// Three vertical strips, left to right.
pub fn beside3(a: &Painter, b: &Painter, c: &Painter) -> Painter {
    over(
        &over(
            &transform(a, v(0.0, 0.0), v(THIRD, 0.0), v(0.0, 1.0)),
            &transform(b, v(THIRD, 0.0), v(TWO_THIRDS, 0.0), v(THIRD, 1.0)),
        ),
        &transform(c, v(TWO_THIRDS, 0.0), v(1.0, 0.0), v(TWO_THIRDS, 1.0)),
    )
}

/// Three horizontal strips, `a` on top and `c` at the bottom.
pub fn above3(a: &Painter, b: &Painter, c: &Painter) -> Painter {
    over(
        &over(
            &transform(a, v(0.0, TWO_THIRDS), v(1.0, TWO_THIRDS), v(0.0, 1.0)),
            &transform(b, v(0.0, THIRD), v(1.0, THIRD), v(0.0, TWO_THIRDS)),
        ),
        &transform(c, v(0.0, 0.0), v(1.0, 0.0), v(0.0, THIRD)),
    )
}
