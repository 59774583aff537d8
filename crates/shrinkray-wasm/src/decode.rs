//! Image decoding WASM bindings.
//!
//! This module exposes the shrinkray-core decoder to JavaScript so the size
//! changer can read an uploaded file without going through an `<img>` element.
//!
//! # Functions
//!
//! - [`decode_image`] - Decode a JPEG, PNG or WebP file from bytes
//! - [`get_orientation`] - Read the EXIF orientation tag (1-8)
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@shrinkray/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use crate::types::{js_error, JsRasterImage};
use shrinkray_core::decode;
use wasm_bindgen::prelude::*;

/// Decode an image file from bytes.
///
/// EXIF orientation is applied, so the returned dimensions match what a
/// browser displays for the same file.
///
/// # Errors
///
/// Returns an error if:
/// - The bytes are not a supported image format
/// - The file is corrupted or truncated
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRasterImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsRasterImage::from_raster)
        .map_err(|e| js_error("Decode failed", e))
}

/// Read the EXIF orientation value (1-8) from file bytes.
///
/// Returns 1 (normal) when there is no EXIF data.
#[wasm_bindgen]
pub fn get_orientation(bytes: &[u8]) -> u8 {
    decode::get_orientation(bytes) as u8
}
