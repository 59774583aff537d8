//! JPEG encoding for the size changer.
//!
//! Quality is expressed on the normalized `[0, 1]` scale a canvas `toBlob`
//! call uses, and mapped onto the encoder's integer scale internally.
//!
//! # Examples
//!
//! ```ignore
//! use shrinkray_core::encode::encode_jpeg;
//!
//! let pixels = vec![128u8; 100 * 100 * 3]; // Gray image
//! let jpeg_bytes = encode_jpeg(&pixels, 100, 100, 0.9).unwrap();
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod jpeg;

pub use jpeg::{encode_jpeg, jpeg_quality, EncodingError};
