//! Image decoding for the size changer.
//!
//! This module turns uploaded file bytes (or a canvas `ImageData` buffer) into
//! a [`RasterImage`], the immutable bitmap the compressor reads from.
//!
//! # Architecture
//!
//! Decoding is designed to be used from Web Workers via WASM bindings.
//! All operations are synchronous and single-threaded within WASM.
//!
//! # Examples
//!
//! ```ignore
//! use shrinkray_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.natural_width(), image.natural_height());
//! ```

mod reader;
mod types;

pub use reader::{decode_image, get_orientation};
pub use types::{DecodeError, Orientation, RasterImage};
