//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core Shrinkray
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use std::fmt::Display;

use shrinkray_core::decode::RasterImage;
use wasm_bindgen::prelude::*;
use web_sys::console;

/// A decoded image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`. The compressor reads the image in place,
/// so a typical page never needs to copy the pixels out.
#[wasm_bindgen]
pub struct JsRasterImage {
    inner: RasterImage,
}

#[wasm_bindgen]
impl JsRasterImage {
    /// Create an image from canvas `ImageData` (RGBA, 4 bytes per pixel).
    ///
    /// # Errors
    ///
    /// Returns an error if `pixels.length !== width * height * 4`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsRasterImage, JsValue> {
        RasterImage::from_rgba(width, height, pixels)
            .map(Self::from_raster)
            .map_err(|e| js_error("Invalid image data", e))
    }

    /// Natural width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.natural_width()
    }

    /// Natural height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.natural_height()
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4 for RGBA)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels().len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels().to_vec()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {}
}

impl JsRasterImage {
    pub(crate) fn from_raster(inner: RasterImage) -> Self {
        Self { inner }
    }

    pub(crate) fn raster(&self) -> &RasterImage {
        &self.inner
    }
}

/// Log a failure to the browser console and turn it into a JS error value.
pub(crate) fn js_error(context: &str, err: impl Display) -> JsValue {
    let message = format!("{context}: {err}");
    console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_js_raster_image_rejects_short_buffer() {
        let result = JsRasterImage::new(10, 10, vec![0u8; 10]);
        assert!(result.is_err());
    }
}
