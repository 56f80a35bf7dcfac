//! Binary PPM (`P6`, 8-bit channels) encoding and decoding
//!
//! The encoder writes `P6\n{width} {height}\n255\n` followed by raw RGB
//! triples, top row first. The decoder accepts any header netpbm tools emit
//! (arbitrary whitespace, `#` comments) but insists on max value 255 and on
//! exactly `width * height * 3` bytes of pixel data.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::errors::PpmError;
use crate::log::{debug, warn};
use crate::render::DrawingContext;
use crate::types::{Color, Raster};

const MAGIC: &[u8] = b"P6";
const MAX_VALUE: u32 = 255;

/// Encode the whole canvas of `cx`.
pub fn write_ppm<W: Write>(cx: &DrawingContext, out: W) -> Result<(), PpmError> {
    write_pixels(cx.width(), cx.height(), cx.pixels(), out)
}

/// Encode a raster, e.g. one previously read with [`read_ppm`].
pub fn write_raster<W: Write>(raster: &Raster, out: W) -> Result<(), PpmError> {
    write_pixels(raster.width(), raster.height(), raster.pixels(), out)
}

fn write_pixels<W: Write>(width: u32, height: u32, pixels: &[Color], mut out: W) -> Result<(), PpmError> {
    write!(out, "P6\n{width} {height}\n{MAX_VALUE}\n")?;
    let bytes: Vec<u8> = pixels.iter().flat_map(|c| c.to_array()).collect();
    out.write_all(&bytes)?;
    out.flush()?;
    Ok(())
}

/// Write the canvas of `cx` to a file at `path`, replacing it if it exists.
pub fn save_ppm(cx: &DrawingContext, path: impl AsRef<Path>) -> Result<(), PpmError> {
    let path = path.as_ref();
    debug!(path = %path.display(), width = cx.width(), height = cx.height(), "writing PPM");
    let file = File::create(path)?;
    write_ppm(cx, BufWriter::new(file))
}

/// Read a raster from `path`.
pub fn load_ppm(path: impl AsRef<Path>) -> Result<Raster, PpmError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading PPM");
    let file = File::open(path)?;
    read_ppm(BufReader::new(file))
}

/// Decode a complete PPM stream. Nothing may follow the pixel data.
pub fn read_ppm<R: Read>(mut input: R) -> Result<Raster, PpmError> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    decode(&bytes)
}

fn decode(bytes: &[u8]) -> Result<Raster, PpmError> {
    let mut header = Header { bytes, pos: 0 };
    header.magic()?;
    let width = header.number("width")?;
    let height = header.number("height")?;
    let max_value = header.number("max value")?;
    header.single_separator()?;

    if max_value != MAX_VALUE {
        warn!(max_value, "rejecting PPM with unsupported max value");
        return Err(PpmError::UnsupportedMaxValue { value: max_value });
    }
    let Some(expected) = data_len(width, height) else {
        warn!(width, height, "rejecting PPM with bad dimensions");
        return Err(PpmError::BadDimensions { width, height });
    };

    let data = &bytes[header.pos..];
    if data.len() < expected {
        warn!(expected, actual = data.len(), "PPM pixel data truncated");
        return Err(PpmError::Truncated {
            expected,
            actual: data.len(),
        });
    }
    if data.len() > expected {
        warn!(extra = data.len() - expected, "trailing bytes after PPM pixel data");
        return Err(PpmError::TrailingData {
            extra: data.len() - expected,
        });
    }

    let pixels = data
        .chunks_exact(3)
        .map(|rgb| Color::rgb(rgb[0], rgb[1], rgb[2]))
        .collect();
    Ok(Raster::new(width, height, pixels)?)
}

/// Number of pixel bytes for a `width` x `height` image, or `None` if either
/// side is zero or the size does not fit in memory.
fn data_len(width: u32, height: u32) -> Option<usize> {
    if width == 0 || height == 0 {
        return None;
    }
    (width as usize).checked_mul(height as usize)?.checked_mul(3)
}

/// Cursor over the text header.
struct Header<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Header<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn magic(&mut self) -> Result<(), PpmError> {
        let token_end = self
            .bytes
            .iter()
            .position(|b| b.is_ascii_whitespace() || *b == b'#')
            .unwrap_or(self.bytes.len());
        let token = &self.bytes[..token_end];
        if token != MAGIC {
            let found = String::from_utf8_lossy(&token[..token.len().min(16)]).into_owned();
            warn!(%found, "not a binary PPM");
            return Err(PpmError::BadMagic { found });
        }
        self.pos = token_end;
        Ok(())
    }

    /// Skip whitespace and `#` comments up to the next token.
    fn skip_separators(&mut self) {
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() {
                self.pos += 1;
            } else if b == b'#' {
                while let Some(b) = self.peek() {
                    self.pos += 1;
                    if b == b'\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn number(&mut self, what: &str) -> Result<u32, PpmError> {
        self.skip_separators();
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        let digits = &self.bytes[start..self.pos];
        if digits.is_empty() {
            return Err(PpmError::BadHeader {
                message: format!("expected {what} at byte {start}"),
            });
        }
        std::str::from_utf8(digits)
            .ok()
            .and_then(|text| text.parse().ok())
            .ok_or_else(|| PpmError::BadHeader {
                message: format!("{what} is out of range"),
            })
    }

    /// Exactly one whitespace byte separates the header from the pixel data.
    fn single_separator(&mut self) -> Result<(), PpmError> {
        match self.peek() {
            Some(b) if b.is_ascii_whitespace() => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(PpmError::BadHeader {
                message: "expected whitespace after the max value".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{below, black, paint, white};

    fn ppm(header: &str, data: &[u8]) -> Vec<u8> {
        let mut bytes = header.as_bytes().to_vec();
        bytes.extend_from_slice(data);
        bytes
    }

    #[test]
    fn encodes_header_and_rows_top_first() {
        let mut cx = DrawingContext::with_size(1, 2);
        paint(&mut cx, &below(&white(), &black()));

        let mut out = Vec::new();
        write_ppm(&cx, &mut out).unwrap();
        assert_eq!(out, ppm("P6\n1 2\n255\n", &[0, 0, 0, 255, 255, 255]));
    }

    #[test]
    fn context_survives_encode_and_decode() {
        let mut cx = DrawingContext::with_size(5, 3);
        paint(&mut cx, &below(&black(), &white()));

        let mut out = Vec::new();
        write_ppm(&cx, &mut out).unwrap();
        let raster = read_ppm(out.as_slice()).unwrap();
        assert_eq!(raster.width(), 5);
        assert_eq!(raster.height(), 3);
        assert_eq!(raster.pixels(), cx.pixels());
    }

    #[test]
    fn header_may_carry_comments_and_extra_whitespace() {
        let bytes = ppm("P6 # made by hand\n  2\t1 # size\n255\n", &[1, 2, 3, 4, 5, 6]);
        let raster = read_ppm(bytes.as_slice()).unwrap();
        assert_eq!(raster.get(0, 0), Some(Color::rgb(1, 2, 3)));
        assert_eq!(raster.get(1, 0), Some(Color::rgb(4, 5, 6)));
    }

    #[test]
    fn pixel_data_may_start_with_whitespace_bytes() {
        // 0x20 and 0x0a are pixel values here, not separators
        let bytes = ppm("P6\n1 1\n255\n", b" \n ");
        let raster = read_ppm(bytes.as_slice()).unwrap();
        assert_eq!(raster.get(0, 0), Some(Color::rgb(b' ', b'\n', b' ')));
    }

    #[test]
    fn rejects_other_formats() {
        let err = read_ppm(ppm("P3\n1 1\n255\n", b"0 0 0").as_slice()).unwrap_err();
        assert!(matches!(err, PpmError::BadMagic { ref found } if found == "P3"), "{err:?}");

        let err = read_ppm(&b""[..]).unwrap_err();
        assert!(matches!(err, PpmError::BadMagic { ref found } if found.is_empty()), "{err:?}");
    }

    #[test]
    fn rejects_sixteen_bit_channels() {
        let err = read_ppm(ppm("P6\n1 1\n65535\n", &[0; 6]).as_slice()).unwrap_err();
        assert!(matches!(err, PpmError::UnsupportedMaxValue { value: 65535 }), "{err:?}");
    }

    #[test]
    fn rejects_zero_dimensions() {
        let err = read_ppm(ppm("P6\n0 4\n255\n", &[]).as_slice()).unwrap_err();
        assert!(matches!(err, PpmError::BadDimensions { width: 0, height: 4 }), "{err:?}");
    }

    #[test]
    fn rejects_missing_fields() {
        let err = read_ppm(ppm("P6\n3\n", &[]).as_slice()).unwrap_err();
        assert!(matches!(err, PpmError::BadHeader { .. }), "{err:?}");

        let err = read_ppm(ppm("P6\n99999999999 1\n255\n", &[]).as_slice()).unwrap_err();
        assert!(matches!(err, PpmError::BadHeader { .. }), "{err:?}");
    }

    #[test]
    fn rejects_short_data() {
        let err = read_ppm(ppm("P6\n2 2\n255\n", &[7; 11]).as_slice()).unwrap_err();
        assert!(matches!(err, PpmError::Truncated { expected: 12, actual: 11 }), "{err:?}");
    }

    #[test]
    fn rejects_trailing_data() {
        let err = read_ppm(ppm("P6\n1 1\n255\n", &[1, 2, 3, 4]).as_slice()).unwrap_err();
        assert!(matches!(err, PpmError::TrailingData { extra: 1 }), "{err:?}");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_ppm("/nonexistent/pictura/input.ppm").unwrap_err();
        assert!(matches!(err, PpmError::Io(_)), "{err:?}");
    }
}
