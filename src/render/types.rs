//! Stroke configuration shared by the rasterizer and segment painters

use crate::frame::Frame;
use crate::types::Color;

use super::defaults;

/// Shape added at the two ends of a stroked line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineCapStyle {
    /// Flush with the endpoints.
    #[default]
    Butt,
    /// Extended past each endpoint by half the stroke width.
    Square,
}

/// Whether a stroke keeps its absolute width or follows the frame it is painted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineWidthScaling {
    /// Width is in canvas units no matter how deeply the painter is nested.
    #[default]
    Unscaled,
    /// Width shrinks and grows with the frame's diagonal.
    Scaled,
}

/// Everything a segment painter needs to stroke its segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    pub cap: LineCapStyle,
    pub scaling: LineWidthScaling,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: defaults::STROKE_WIDTH,
            cap: LineCapStyle::Butt,
            scaling: LineWidthScaling::Unscaled,
        }
    }
}

impl StrokeStyle {
    /// Default style in the given color.
    pub fn new(color: Color) -> Self {
        Self { color, ..Self::default() }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_cap(mut self, cap: LineCapStyle) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_scaling(mut self, scaling: LineWidthScaling) -> Self {
        self.scaling = scaling;
        self
    }

    /// Stroke width to use when painting into `frame`.
    ///
    /// `Scaled` multiplies by `|edge1 + edge2| / |(1,1)|`, so the identity frame
    /// leaves the width untouched and a half-size frame halves it.
    pub fn width_in(&self, frame: &Frame) -> f64 {
        match self.scaling {
            LineWidthScaling::Unscaled => self.width,
            LineWidthScaling::Scaled => {
                self.width * frame.diagonal().magnitude() / defaults::UNIT_DIAGONAL.magnitude()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vector;

    #[test]
    fn default_style() {
        let style = StrokeStyle::default();
        assert_eq!(style.color, Color::BLACK);
        assert_eq!(style.width, defaults::STROKE_WIDTH);
        assert_eq!(style.cap, LineCapStyle::Butt);
        assert_eq!(style.scaling, LineWidthScaling::Unscaled);
    }

    #[test]
    fn builder_overrides_fields() {
        let style = StrokeStyle::new(Color::RED)
            .with_width(0.25)
            .with_cap(LineCapStyle::Square)
            .with_scaling(LineWidthScaling::Scaled);
        assert_eq!(style.color, Color::RED);
        assert_eq!(style.width, 0.25);
        assert_eq!(style.cap, LineCapStyle::Square);
        assert_eq!(style.scaling, LineWidthScaling::Scaled);
    }

    #[test]
    fn unscaled_width_ignores_frame() {
        let style = StrokeStyle::default().with_width(0.1);
        let tiny = Frame::new(Vector::ZERO, Vector::new(0.01, 0.0), Vector::new(0.0, 0.01));
        assert_eq!(style.width_in(&tiny), 0.1);
    }

    #[test]
    fn scaled_width_follows_frame_diagonal() {
        let style = StrokeStyle::default()
            .with_width(0.1)
            .with_scaling(LineWidthScaling::Scaled);
        assert!((style.width_in(&Frame::IDENTITY) - 0.1).abs() < 1e-12);

        let half = Frame::new(Vector::ZERO, Vector::new(0.5, 0.0), Vector::new(0.0, 0.5));
        assert!((style.width_in(&half) - 0.05).abs() < 1e-12);
    }
}
