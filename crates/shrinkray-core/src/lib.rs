//! Shrinkray Core - target-size image compression
//!
//! This crate provides the core of the image size changer: decoding an
//! uploaded image, drawing it onto an off-screen surface and searching for the
//! JPEG quality that lands just under a requested byte budget.

pub mod compress;
pub mod decode;
pub mod encode;
pub mod tool;

pub use compress::{
    compress, compress_with, CompressionOptions, CompressionOutcome, CompressionRequest,
    CompressionResult, DrawingSurface, QualityEncoder, QualityProbe,
};
pub use decode::{decode_image, DecodeError, RasterImage};
pub use encode::EncodingError;
