//! A compositional picture language.
//!
//! Pictures are [`Painter`]s: flat colors, stroked segments, filled triangles
//! and bitmaps, combined with geometric operators (transform, overlay, flip,
//! rotate, beside, below and the three-way splits) into arbitrarily nested
//! pictures. Nothing is drawn until [`paint`] hands the root painter the
//! identity frame; every painter then projects its own unit-square geometry
//! through the frames it is nested in and rasterizes triangles into a
//! [`DrawingContext`].
//!
//! ```
//! use pictura::{Color, DrawingContext, Vector, beside, flip_vert, paint, triangle};
//!
//! let corner = triangle(Vector::new(0.0, 0.0), Vector::new(1.0, 0.0), Vector::new(0.0, 1.0), Color::RED);
//! let picture = beside(&corner, &flip_vert(&corner));
//!
//! let mut cx = DrawingContext::new(64);
//! paint(&mut cx, &picture);
//! assert_eq!(cx.pixels().len(), 64 * 64);
//! ```

pub mod errors;
pub mod frame;
pub mod gallery;
pub mod log;
pub mod ppm;
pub mod render;
pub mod types;

pub use errors::{PaintError, PpmError};
pub use frame::Frame;
pub use render::*;
pub use types::{Color, Raster, Segment, Vector};
