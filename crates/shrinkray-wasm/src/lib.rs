//! Shrinkray WASM - WebAssembly bindings for the image size changer
//!
//! This crate provides WASM bindings to expose the shrinkray-core functionality
//! to the browser tool page.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Image decoding bindings (JPEG, PNG, WebP)
//! - `compress` - Target-size JPEG compression
//! - `tool` - Slider range, default target, file naming and size formatting
//! - `logging` - Forwards the core's `tracing` events to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, compress_to_target } from '@shrinkray/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const image = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const result = compress_to_target(image, 100);
//! console.log(`${result.size} bytes at quality ${result.quality}`);
//! ```

use wasm_bindgen::prelude::*;

mod compress;
mod decode;
mod logging;
mod tool;
mod types;

// Re-export public types
pub use compress::{compress_to_target, compress_to_target_bytes, JsCompressionResult};
pub use decode::{decode_image, get_orientation};
pub use tool::{default_target_kb, format_bytes, output_file_name, target_range_kb, JsTargetRange};
pub use types::JsRasterImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logging::init_logging();
    tracing::debug!(version = %version(), "shrinkray-wasm loaded");
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
