//! Off-screen drawing surface used for repeated JPEG encodes.

use crate::decode::RasterImage;
use crate::encode::{encode_jpeg, EncodingError};

/// Something that can encode a fixed image at a requested quality.
///
/// The search only depends on this trait, so any deterministic encoder whose
/// output size never shrinks as quality rises can be plugged in.
pub trait QualityEncoder {
    /// Encode at `quality` in `[0, 1]`, returning the encoded bytes.
    fn encode(&mut self, quality: f32) -> Result<Vec<u8>, EncodingError>;
}

/// An RGB drawing surface sized exactly to an image's natural dimensions.
///
/// Each compression call owns its own surface; nothing is shared between
/// calls. Transparent pixels are composited onto black, which is what a
/// canvas produces when exported as JPEG.
#[derive(Debug, Clone)]
pub struct DrawingSurface {
    width: u32,
    height: u32,
    rgb: Vec<u8>,
}

impl DrawingSurface {
    /// Draw `image` onto a fresh surface at 1:1 scale.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::InvalidDimensions` for a zero-size image.
    pub fn for_image(image: &RasterImage) -> Result<Self, EncodingError> {
        let (width, height) = (image.natural_width(), image.natural_height());
        if image.is_empty() {
            return Err(EncodingError::InvalidDimensions { width, height });
        }

        let rgb = image
            .pixels()
            .chunks_exact(RasterImage::CHANNELS)
            .flat_map(|px| {
                let alpha = px[3] as u16;
                [
                    premultiply(px[0], alpha),
                    premultiply(px[1], alpha),
                    premultiply(px[2], alpha),
                ]
            })
            .collect();

        Ok(Self { width, height, rgb })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGB pixel data, 3 bytes per pixel.
    pub fn pixels(&self) -> &[u8] {
        &self.rgb
    }
}

impl QualityEncoder for DrawingSurface {
    fn encode(&mut self, quality: f32) -> Result<Vec<u8>, EncodingError> {
        encode_jpeg(&self.rgb, self.width, self.height, quality)
    }
}

#[inline]
fn premultiply(channel: u8, alpha: u16) -> u8 {
    ((channel as u16 * alpha + 127) / 255) as u8
}
