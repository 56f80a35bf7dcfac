//! Error types with diagnostics using miette
//!
//! The rasterizer itself cannot fail: degenerate geometry handed to it is a
//! caller bug and panics. What can fail is ingesting pixel data, either from a
//! caller-supplied buffer or from a PPM stream.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Painter Errors
// ============================================================================

/// Errors that occur while building painters
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum PaintError {
    #[error("image has zero dimensions: {width}x{height}")]
    #[diagnostic(
        code(pictura::paint::empty_image),
        help("an image painter needs at least one pixel in each direction")
    )]
    EmptyImage { width: u32, height: u32 },

    #[error("image buffer holds {actual} pixels, expected {expected} for {width}x{height}")]
    #[diagnostic(
        code(pictura::paint::pixel_count_mismatch),
        help("pixels are row-major, one Color per pixel, row 0 at the top")
    )]
    PixelCountMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

// ============================================================================
// PPM Errors
// ============================================================================

/// Errors that occur while reading or writing binary PPM files
#[derive(Error, Diagnostic, Debug)]
pub enum PpmError {
    #[error("i/o error: {0}")]
    #[diagnostic(code(pictura::ppm::io))]
    Io(#[from] std::io::Error),

    #[error("expected PPM magic `P6`, found `{found}`")]
    #[diagnostic(
        code(pictura::ppm::bad_magic),
        help("only binary RGB PPM (P6) is supported")
    )]
    BadMagic { found: String },

    #[error("malformed PPM header: {message}")]
    #[diagnostic(code(pictura::ppm::bad_header))]
    BadHeader { message: String },

    #[error("bad PPM dimensions: {width}x{height}")]
    #[diagnostic(code(pictura::ppm::bad_dimensions))]
    BadDimensions { width: u32, height: u32 },

    #[error("unsupported PPM max value {value}")]
    #[diagnostic(
        code(pictura::ppm::unsupported_max_value),
        help("only 8-bit channels (max value 255) are supported")
    )]
    UnsupportedMaxValue { value: u32 },

    #[error("PPM pixel data truncated: expected {expected} bytes, got {actual}")]
    #[diagnostic(code(pictura::ppm::truncated))]
    Truncated { expected: usize, actual: usize },

    #[error("{extra} unexpected bytes after PPM pixel data")]
    #[diagnostic(code(pictura::ppm::trailing_data))]
    TrailingData { extra: usize },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Image(#[from] PaintError),
}
