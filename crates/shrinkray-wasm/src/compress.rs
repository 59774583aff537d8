//! Target-size compression WASM bindings.
//!
//! This module exposes the shrinkray-core compressor to JavaScript. The page
//! passes a decoded image and a budget, and receives the JPEG bytes ready to be
//! wrapped in a `Blob` and downloaded.
//!
//! # Functions
//!
//! - [`compress_to_target`] - Compress to a budget given in KB (slider value)
//! - [`compress_to_target_bytes`] - Compress to a budget in bytes, with options
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, compress_to_target, output_file_name } from '@shrinkray/wasm';
//!
//! const image = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const result = compress_to_target(image, 100);
//! const blob = new Blob([result.bytes()], { type: 'image/jpeg' });
//! link.download = output_file_name(file.name, 100);
//! ```

use crate::types::{js_error, JsRasterImage};
use shrinkray_core::compress::{
    CompressionOptions, CompressionOutcome, CompressionRequest, CompressionResult, QualityProbe,
};
use shrinkray_core::tool::target_bytes_from_kb;
use wasm_bindgen::prelude::*;

/// The compressed artifact handed back to JavaScript.
#[wasm_bindgen]
pub struct JsCompressionResult {
    bytes: Vec<u8>,
    quality: f32,
    iterations: u32,
    outcome: CompressionOutcome,
    probes: Vec<QualityProbe>,
}

#[wasm_bindgen]
impl JsCompressionResult {
    /// JPEG bytes as a `Uint8Array` (copied into JS memory).
    pub fn bytes(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.bytes.as_slice())
    }

    /// Encoded size in bytes.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Quality factor in `[0, 1]` that produced the bytes.
    #[wasm_bindgen(getter)]
    pub fn quality(&self) -> f32 {
        self.quality
    }

    /// Bisection iterations performed (0 when no search was needed).
    #[wasm_bindgen(getter)]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// False when even the lowest quality exceeded the budget.
    #[wasm_bindgen(getter)]
    pub fn reached_target(&self) -> bool {
        self.outcome != CompressionOutcome::Unreachable
    }

    /// One of `"fitsAtMaxQuality"`, `"converged"` or `"unreachable"`.
    #[wasm_bindgen(getter)]
    pub fn outcome(&self) -> String {
        self.outcome.as_str().to_string()
    }

    /// Every encode as `{ quality, encodedSize }`, in the order it ran.
    pub fn probes(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.probes).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl From<CompressionResult> for JsCompressionResult {
    fn from(result: CompressionResult) -> Self {
        Self {
            bytes: result.bytes,
            quality: result.quality,
            iterations: result.iterations,
            outcome: result.outcome,
            probes: result.probes,
        }
    }
}

/// Compress an image to fit within `target_kb` kilobytes (1 KB = 1024 bytes).
///
/// The image keeps its natural resolution; only the JPEG quality changes.
/// If the budget cannot be met even at the lowest quality, the smallest
/// possible JPEG is returned and `reached_target` is `false`.
///
/// # Errors
///
/// Returns an error if `target_kb` is zero, the image is empty, or the
/// encoder fails.
#[wasm_bindgen]
pub fn compress_to_target(
    image: &JsRasterImage,
    target_kb: u32,
) -> Result<JsCompressionResult, JsValue> {
    run(CompressionRequest::new(
        image.raster(),
        target_bytes_from_kb(target_kb as u64),
    ))
}

/// Compress an image to fit within `target_bytes` bytes.
///
/// `options` may be `undefined` or an object such as `{ maxIterations: 12 }`.
/// `maxIterations` must be between 1 and 32.
#[wasm_bindgen]
pub fn compress_to_target_bytes(
    image: &JsRasterImage,
    target_bytes: u32,
    options: JsValue,
) -> Result<JsCompressionResult, JsValue> {
    let options = parse_options(options)?;
    run(CompressionRequest::new(image.raster(), target_bytes as u64).with_options(options))
}

fn parse_options(value: JsValue) -> Result<CompressionOptions, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(CompressionOptions::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| js_error("Invalid compression options", e))
}

/// An unreachable target is reported by the core's `warn!` event.
fn run(request: CompressionRequest<'_>) -> Result<JsCompressionResult, JsValue> {
    let result = request
        .run()
        .map_err(|e| js_error("Compression failed", e))?;
    Ok(result.into())
}

/// Tests for compress bindings.
///
/// Functions returning `Result<T, JsValue>` only work on wasm32 targets; the
/// search itself is covered in `shrinkray_core::compress`.
#[cfg(test)]
mod tests {
    use super::*;
    use shrinkray_core::compress::compress;
    use shrinkray_core::decode::RasterImage;

    #[test]
    fn test_result_conversion() {
        let image = RasterImage::from_rgba(16, 16, vec![200u8; 16 * 16 * 4]).unwrap();
        let core = compress(&image, 1024 * 1024).unwrap();
        let size = core.size();

        let js: JsCompressionResult = core.into();
        assert_eq!(js.size(), size);
        assert_eq!(js.quality(), 1.0);
        assert_eq!(js.iterations(), 0);
        assert!(js.reached_target());
        assert_eq!(js.outcome(), "fitsAtMaxQuality");
    }

    #[test]
    fn test_unreachable_result_flags() {
        let image = RasterImage::from_rgba(16, 16, vec![200u8; 16 * 16 * 4]).unwrap();
        let js: JsCompressionResult = compress(&image, 1).unwrap().into();

        assert!(!js.reached_target());
        assert_eq!(js.outcome(), "unreachable");
        assert_eq!(js.quality(), 0.0);
    }
}
