//! Painters and the rasterizer they draw through
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes and settings
//! - `types`: Stroke configuration (`StrokeStyle`, `LineCapStyle`, `LineWidthScaling`)
//! - `geometry`: Edge functions, scan bounds and stroke outlines
//! - `context`: `DrawingContext`, the pixel buffer and its primitives
//! - `painters`: The `Painter` handle and its variants
//! - `combinators`: Flip, rotate, beside, below and friends

pub mod combinators;
pub mod context;
pub mod defaults;
pub mod geometry;
pub mod painters;
pub mod types;

// Re-export commonly used items
pub use combinators::*;
pub use context::DrawingContext;
pub use painters::{Paint, Painter, PainterKind};
pub use types::*;

use crate::frame::Frame;
use crate::log::debug;

/// Clear `cx` to the background color and paint `painter` over the whole canvas.
pub fn paint(cx: &mut DrawingContext, painter: &Painter) {
    debug!(width = cx.width(), height = cx.height(), "painting");
    cx.fill(defaults::BACKGROUND);
    painter.paint(cx, &Frame::IDENTITY);
}
