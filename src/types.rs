//! Value types for the picture language: vectors, segments, colors and rasters.
//!
//! Everything here is `Copy` (or cheaply owned) and immutable once built.
//! Logical coordinates are y-up; only the canvas frame of a
//! [`DrawingContext`](crate::render::DrawingContext) flips them into raster space.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use glam::DVec2;

use crate::errors::PaintError;

/// A 2-D point or displacement.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Vector { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub fn scale(self, s: f64) -> Vector {
        Vector::new(self.x * s, self.y * s)
    }

    /// Euclidean length.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Rescale to `length`.
    ///
    /// # Panics
    ///
    /// Panics if the vector has zero magnitude. Drawing code only normalizes
    /// line directions, and a zero-length line is a caller bug.
    pub fn normalize(self, length: f64) -> Vector {
        match self.try_normalize(length) {
            Some(v) => v,
            None => panic!("cannot normalize zero-length vector ({}, {})", self.x, self.y),
        }
    }

    /// Rescale to `length`, or `None` if the vector has zero magnitude.
    pub fn try_normalize(self, length: f64) -> Option<Vector> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            None
        } else {
            Some(self.scale(length / magnitude))
        }
    }

    /// `(x, y) -> (y, -x)`: a quarter turn clockwise in y-up coordinates.
    #[inline]
    pub fn rotate90_clockwise(self) -> Vector {
        Vector::new(self.y, -self.x)
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector { Vector::new(self.x + rhs.x, self.y + rhs.y) }
}
impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector { Vector::new(self.x - rhs.x, self.y - rhs.y) }
}
impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector { self.scale(rhs) }
}
impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector { Vector::new(-self.x, -self.y) }
}

impl From<DVec2> for Vector {
    fn from(v: DVec2) -> Self {
        Vector::new(v.x, v.y)
    }
}

impl From<Vector> for DVec2 {
    fn from(v: Vector) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Vector::new(x, y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A line segment between two points.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Segment {
    pub start: Vector,
    pub end: Vector,
}

impl Segment {
    #[inline]
    pub const fn new(start: Vector, end: Vector) -> Self {
        Segment { start, end }
    }

    /// Displacement from start to end.
    #[inline]
    pub fn direction(self) -> Vector {
        self.end - self.start
    }

    /// True when both endpoints coincide, so the segment has no direction to stroke along.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }
}

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::gray(0);
    pub const GRAY: Color = Color::gray(150);
    pub const WHITE: Color = Color::gray(255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Same level on all three channels.
    #[inline]
    pub const fn gray(level: u8) -> Self {
        Color { r: level, g: level, b: level }
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::rgb(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// An owned pixel grid, row-major with row 0 at the top.
///
/// This is the ingestion format for image painters and the output of the PPM decoder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Raster {
    /// Take ownership of `pixels`, checking that it is a non-empty `width * height` grid.
    pub fn new(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self, PaintError> {
        if width == 0 || height == 0 {
            return Err(PaintError::EmptyImage { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(PaintError::PixelCountMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Raster { width, height, pixels })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Pixel at column `x`, row `y` (row 0 = top).
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    pub fn into_pixels(self) -> Vec<Color> {
        self.pixels
    }
}
