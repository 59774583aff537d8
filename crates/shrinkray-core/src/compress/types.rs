//! Request, options and result types for target-size compression.

use serde::{Deserialize, Serialize};

use crate::decode::RasterImage;
use crate::encode::EncodingError;

/// Number of bisection steps; gives a quality resolution of about 1/1024.
pub const DEFAULT_MAX_ITERATIONS: u32 = 10;

/// Upper bound on `max_iterations`. An `f32` midpoint stops moving after
/// about 24 halvings, so anything beyond this only repeats encodes.
pub const MAX_ITERATIONS_LIMIT: u32 = 32;

/// Tunables for the quality search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompressionOptions {
    /// Bisection iterations to run when the maximum-quality encode is too big.
    pub max_iterations: u32,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl CompressionOptions {
    /// Check that the options describe a search that can run.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::InvalidOptions` if `max_iterations` is outside
    /// `1..=MAX_ITERATIONS_LIMIT`.
    pub fn validate(&self) -> Result<(), EncodingError> {
        if !(1..=MAX_ITERATIONS_LIMIT).contains(&self.max_iterations) {
            return Err(EncodingError::InvalidOptions(format!(
                "maxIterations must be between 1 and {MAX_ITERATIONS_LIMIT}, got {}",
                self.max_iterations
            )));
        }
        Ok(())
    }
}

/// One compression invocation: an image and the byte budget it must fit.
#[derive(Debug, Clone, Copy)]
pub struct CompressionRequest<'a> {
    pub image: &'a RasterImage,
    pub target_bytes: u64,
    pub options: CompressionOptions,
}

impl<'a> CompressionRequest<'a> {
    pub fn new(image: &'a RasterImage, target_bytes: u64) -> Self {
        Self {
            image,
            target_bytes,
            options: CompressionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CompressionOptions) -> Self {
        self.options = options;
        self
    }
}

/// A single encode performed during the search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityProbe {
    pub quality: f32,
    pub encoded_size: usize,
}

/// How the search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompressionOutcome {
    /// The maximum-quality encode already fit; no search was needed.
    FitsAtMaxQuality,
    /// The search found the highest tested quality that fits.
    Converged,
    /// Even the lowest quality exceeds the budget; the smallest artifact is returned.
    Unreachable,
}

impl CompressionOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            CompressionOutcome::FitsAtMaxQuality => "fitsAtMaxQuality",
            CompressionOutcome::Converged => "converged",
            CompressionOutcome::Unreachable => "unreachable",
        }
    }
}

/// The chosen JPEG artifact. Ownership of the bytes passes to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionResult {
    pub bytes: Vec<u8>,
    /// Quality that produced `bytes`.
    pub quality: f32,
    /// Bisection iterations performed (0 when the first encode fit).
    pub iterations: u32,
    /// Every encode in the order it ran.
    pub probes: Vec<QualityProbe>,
    pub outcome: CompressionOutcome,
}

impl CompressionResult {
    /// Encoded size in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the artifact fits the requested budget.
    pub fn reached_target(&self) -> bool {
        self.outcome != CompressionOutcome::Unreachable
    }
}
