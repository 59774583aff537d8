//! JPEG encoding with a normalized quality factor.
//!
//! This module wraps the `image` crate's JPEG encoder behind the `[0, 1]`
//! quality scale used by the size changer. The encoder is deterministic:
//! identical pixels and quality always produce identical bytes.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;

/// Errors that can occur while producing an encoded artifact.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Requested byte budget is zero
    #[error("Invalid target size: {0} bytes (must be greater than zero)")]
    InvalidTarget(u64),

    /// Search options are out of range
    #[error("Invalid compression options: {0}")]
    InvalidOptions(String),

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Map a normalized quality in `[0, 1]` onto the encoder's 1-100 scale.
///
/// Values outside the range are clamped; NaN is treated as 0.
pub fn jpeg_quality(quality: f32) -> u8 {
    if quality.is_nan() {
        return 1;
    }
    (quality.clamp(0.0, 1.0) * 100.0).round().clamp(1.0, 100.0) as u8
}

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - Normalized quality in `[0, 1]`, where 1.0 is highest quality
///
/// # Returns
///
/// JPEG-encoded bytes on success, or an error if encoding fails.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: f32,
) -> Result<Vec<u8>, EncodingError> {
    if width == 0 || height == 0 {
        return Err(EncodingError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected_len {
        return Err(EncodingError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, jpeg_quality(quality))
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodingError::EncodingFailed(e.to_string()))?;

    Ok(buffer)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
