//! Drawing context - the pixel buffer and its scan-conversion primitives

use crate::errors::PaintError;
use crate::frame::Frame;
use crate::log::trace;
use crate::types::{Color, Raster, Vector};

use super::defaults;
use super::geometry::{Triangle, pixel_center, stroke_outline};
use super::types::LineCapStyle;

/// An owned RGB pixel buffer plus the frame that maps the logical unit square onto it.
///
/// All drawing calls take logical coordinates (y-up, unit square = whole
/// canvas) and project them through [`canvas_frame`](Self::canvas_frame)
/// before touching pixels.
#[derive(Debug, Clone)]
pub struct DrawingContext {
    width: u32,
    height: u32,
    canvas_frame: Frame,
    /// Row-major, row 0 at the top of the image.
    pixels: Vec<Color>,
}

impl DrawingContext {
    /// Square `resolution` x `resolution` canvas, filled white.
    pub fn new(resolution: u32) -> Self {
        Self::with_size(resolution, resolution)
    }

    /// `width` x `height` canvas, filled white.
    pub fn with_size(width: u32, height: u32) -> Self {
        let (w, h) = (width as f64, height as f64);
        Self {
            width,
            height,
            canvas_frame: Frame::new(Vector::new(0.0, h), Vector::new(w, 0.0), Vector::new(0.0, -h)),
            pixels: vec![defaults::BACKGROUND; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `((0, height), (width, 0), (0, -height))`: the unit square, flipped to raster y-down.
    pub fn canvas_frame(&self) -> &Frame {
        &self.canvas_frame
    }

    /// The whole buffer, row-major, row 0 = top of the canvas.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Pixel at column `x`, row `y` (row 0 = top), or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Copy the current pixels out as a raster, e.g. to feed an image painter.
    ///
    /// Fails only for a zero-sized canvas.
    pub fn to_raster(&self) -> Result<Raster, PaintError> {
        Raster::new(self.width, self.height, self.pixels.clone())
    }

    pub fn into_pixels(self) -> Vec<Color> {
        self.pixels
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Overwrite every pixel.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Fill the triangle `a`, `b`, `c` (logical coordinates).
    ///
    /// A pixel is painted when its center lies on the inner side of all three
    /// edges, edges included. Zero-area triangles paint nothing.
    pub fn draw_triangle(&mut self, a: Vector, b: Vector, c: Vector, color: Color) {
        let frame = self.canvas_frame;
        let Some(triangle) = Triangle::oriented(
            frame.project(a).into(),
            frame.project(b).into(),
            frame.project(c).into(),
        ) else {
            trace!(%a, %b, %c, "skipping zero-area triangle");
            return;
        };

        let bounds = triangle.scan_bounds(self.width, self.height);
        if bounds.is_empty() {
            return;
        }
        for y in bounds.rows.clone() {
            for x in bounds.cols.clone() {
                if triangle.contains(pixel_center(x, y)) {
                    let index = self.index(x, y);
                    self.pixels[index] = color;
                }
            }
        }
    }

    /// Fill the quad `a`, `b`, `c`, `d` as the triangles `a b c` and `c d a`.
    ///
    /// Corners must go around the quad in order, otherwise the diagonal split
    /// does not tile it.
    pub fn draw_quad(&mut self, a: Vector, b: Vector, c: Vector, d: Vector, color: Color) {
        self.draw_triangle(a, b, c, color);
        self.draw_triangle(c, d, a, color);
    }

    /// Stroke the segment `a`-`b` with the given logical `width`.
    ///
    /// # Panics
    ///
    /// Panics if `a == b`.
    pub fn draw_line(&mut self, a: Vector, b: Vector, color: Color, width: f64, cap: LineCapStyle) {
        let [p0, p1, p2, p3] = stroke_outline(a, b, width, cap);
        self.draw_quad(p0, p1, p2, p3, color);
    }

    /// Warp a `pixel_width` x `pixel_height` source raster onto the parallelogram
    /// `origin`, `edge1`, `edge2`.
    ///
    /// Each source pixel becomes one cell quad. Source row 0 is the top of the
    /// image, so it lands at the `origin + edge2` side of the target.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or `pixels` does not hold exactly
    /// `pixel_width * pixel_height` colors.
    pub fn draw_pixels(
        &mut self,
        pixel_width: u32,
        pixel_height: u32,
        pixels: &[Color],
        origin: Vector,
        edge1: Vector,
        edge2: Vector,
    ) {
        assert!(
            pixel_width > 0 && pixel_height > 0,
            "draw_pixels: empty {pixel_width}x{pixel_height} image"
        );
        assert_eq!(
            pixels.len(),
            pixel_width as usize * pixel_height as usize,
            "draw_pixels: wrong color count for a {pixel_width}x{pixel_height} image"
        );
        let dx = edge1.scale(1.0 / pixel_width as f64);
        let dy = edge2.scale(1.0 / pixel_height as f64);
        // Neighbouring cells share their corner points exactly, so no seams open between them.
        let corner = |x: u32, y: u32| origin + dx * x as f64 + dy * y as f64;

        trace!(pixel_width, pixel_height, %origin, "drawing pixel grid");
        for y in 0..pixel_height {
            let source_row = (pixel_height - 1 - y) as usize * pixel_width as usize;
            for x in 0..pixel_width {
                let color = pixels[source_row + x as usize];
                self.draw_quad(
                    corner(x, y),
                    corner(x + 1, y),
                    corner(x + 1, y + 1),
                    corner(x, y + 1),
                    color,
                );
            }
        }
    }
}

impl Default for DrawingContext {
    fn default() -> Self {
        Self::new(defaults::RESOLUTION)
    }
}
