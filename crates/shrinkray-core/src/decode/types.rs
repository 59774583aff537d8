//! Core types for image decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// Pixel buffer does not match the stated dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (flip horizontal + rotate 270 CW).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (flip horizontal + rotate 90 CW).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// An immutable decoded bitmap.
///
/// Pixels are RGBA8 in row-major order, the same layout a browser exposes
/// through `ImageData`. Dimensions are the natural (unscaled) size of the
/// source after orientation correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    natural_width: u32,
    natural_height: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Bytes per pixel in the RGBA buffer.
    pub const CHANNELS: usize = 4;

    /// Build an image from an RGBA buffer, validating its length.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, DecodeError> {
        let expected = (width as usize) * (height as usize) * Self::CHANNELS;
        if pixels.len() != expected {
            return Err(DecodeError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            natural_width: width,
            natural_height: height,
            pixels,
        })
    }

    /// Create a RasterImage from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (natural_width, natural_height) = img.dimensions();
        Self {
            natural_width,
            natural_height,
            pixels: img.into_raw(),
        }
    }

    pub fn natural_width(&self) -> u32 {
        self.natural_width
    }

    pub fn natural_height(&self) -> u32 {
        self.natural_height
    }

    /// RGBA pixel data, 4 bytes per pixel.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// True when either dimension is zero, leaving nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.natural_width == 0 || self.natural_height == 0
    }
}
