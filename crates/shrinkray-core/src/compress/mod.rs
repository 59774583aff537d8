//! Target-size JPEG compression.
//!
//! Given a decoded image and a byte budget, finds the highest JPEG quality
//! whose output still fits the budget. The image is never rescaled: only the
//! quality factor changes.
//!
//! # Algorithm
//!
//! 1. Draw the image onto a [`DrawingSurface`] at its natural size.
//! 2. Encode at quality 1.0 and return immediately if it already fits.
//! 3. Otherwise bisect over `[0, 1]` for a fixed number of iterations,
//!    keeping the best encode that fit.
//! 4. If nothing fit, return the quality 0 encode as a best effort.
//!
//! # Examples
//!
//! ```ignore
//! use shrinkray_core::compress::compress;
//! use shrinkray_core::decode::decode_image;
//!
//! let image = decode_image(&std::fs::read("photo.jpg").unwrap()).unwrap();
//! let result = compress(&image, 100 * 1024).unwrap();
//! println!("{} bytes at quality {:.3}", result.size(), result.quality);
//! ```

mod search;
mod surface;
mod types;

pub use search::{compress, compress_with};
pub use surface::{DrawingSurface, QualityEncoder};
pub use types::{
    CompressionOptions, CompressionOutcome, CompressionRequest, CompressionResult, QualityProbe,
    DEFAULT_MAX_ITERATIONS, MAX_ITERATIONS_LIMIT,
};
