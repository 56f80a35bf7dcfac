//! Default sizes and settings (logical units are fractions of the unit square)

use crate::types::{Color, Vector};

/// Canvas resolution used by the gallery renders when none is given.
pub const RESOLUTION: u32 = 800;
/// Stroke width for `path` painters built without an explicit style.
pub const STROKE_WIDTH: f64 = 0.01;
/// Hairline width for the Escher tile grids.
pub const GRID_STROKE_WIDTH: f64 = 0.002;
/// What `paint` clears the canvas to before painting.
pub const BACKGROUND: Color = Color::WHITE;
/// Diagonal of the unit square; `Scaled` strokes measure frames against it.
pub const UNIT_DIAGONAL: Vector = Vector::new(1.0, 1.0);
