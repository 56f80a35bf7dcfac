//! Frames: affine coordinate systems nested inside one another.
//!
//! A frame maps the unit square onto a parallelogram. Painters never see
//! absolute coordinates; they receive a frame and project their own unit-square
//! geometry through it. Composing frames is what every geometric combinator
//! reduces to, so [`Frame::project`] over a sub-frame has to agree with
//! projecting points through the chain one frame at a time.

use glam::DAffine2;

use crate::types::{Segment, Vector};

/// An origin and two edge vectors. The edges may be skewed, scaled or mirrored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub origin: Vector,
    pub edge1: Vector,
    pub edge2: Vector,
}

impl Frame {
    /// The unit square itself: `((0,0), (1,0), (0,1))`.
    pub const IDENTITY: Frame = Frame::new(
        Vector::new(0.0, 0.0),
        Vector::new(1.0, 0.0),
        Vector::new(0.0, 1.0),
    );

    pub const fn new(origin: Vector, edge1: Vector, edge2: Vector) -> Self {
        Frame { origin, edge1, edge2 }
    }

    /// Frame whose unit-square corners `(0,0)`, `(1,0)` and `(0,1)` land on
    /// `origin`, `corner1` and `corner2`.
    pub fn from_corners(origin: Vector, corner1: Vector, corner2: Vector) -> Self {
        Frame::new(origin, corner1 - origin, corner2 - origin)
    }

    /// Project a point, segment or frame expressed in this frame's unit square
    /// into the enclosing space.
    #[inline]
    pub fn project<T: Project>(&self, item: T) -> T {
        item.project_through(self)
    }

    /// The four corners in order origin, origin+edge1, origin+edge1+edge2, origin+edge2.
    pub fn corners(&self) -> [Vector; 4] {
        let far = self.origin + self.edge1;
        [self.origin, far, far + self.edge2, self.origin + self.edge2]
    }

    /// `edge1 + edge2`, the diagonal from the origin to the opposite corner.
    #[inline]
    pub fn diagonal(&self) -> Vector {
        self.edge1 + self.edge2
    }

    /// Signed area of the parallelogram. Negative for mirrored frames.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.edge1.x * self.edge2.y - self.edge1.y * self.edge2.x
    }

    /// The same map as a `glam` affine transform.
    pub fn to_affine(&self) -> DAffine2 {
        DAffine2::from_cols(self.edge1.into(), self.edge2.into(), self.origin.into())
    }
}

impl Default for Frame {
    fn default() -> Self {
        Frame::IDENTITY
    }
}

impl From<Frame> for DAffine2 {
    fn from(frame: Frame) -> Self {
        frame.to_affine()
    }
}

/// Things that can be carried from a frame's unit square into its enclosing space.
pub trait Project: Sized {
    fn project_through(self, frame: &Frame) -> Self;
}

impl Project for Vector {
    #[inline]
    fn project_through(self, frame: &Frame) -> Self {
        frame.origin + (frame.edge1 * self.x + frame.edge2 * self.y)
    }
}

impl Project for Segment {
    fn project_through(self, frame: &Frame) -> Self {
        Segment::new(frame.project(self.start), frame.project(self.end))
    }
}

impl Project for Frame {
    /// Edges are projected as the points they reach, then turned back into
    /// displacements, so the outer translation never leaks into them.
    fn project_through(self, frame: &Frame) -> Self {
        let origin = frame.project(self.origin);
        Frame::new(
            origin,
            frame.project(self.origin + self.edge1) - origin,
            frame.project(self.origin + self.edge2) - origin,
        )
    }
}
