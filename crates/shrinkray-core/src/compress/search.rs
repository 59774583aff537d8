//! Bisection search for the highest JPEG quality that fits a byte budget.
//!
//! Encoded size grows monotonically with quality, but there is no closed form
//! from a byte count back to a quality factor, so the search halves the
//! `[0, 1]` interval a fixed number of times. Each encode depends on the
//! previous one's result, so probes always run one after another.

use tracing::{debug, debug_span, info, warn};

use super::surface::{DrawingSurface, QualityEncoder};
use super::types::{
    CompressionOptions, CompressionOutcome, CompressionRequest, CompressionResult, QualityProbe,
};
use crate::decode::RasterImage;
use crate::encode::EncodingError;

const MAX_QUALITY: f32 = 1.0;
const MIN_QUALITY: f32 = 0.0;

/// Compress `image` to the largest JPEG that fits in `target_bytes`.
///
/// Uses the default options (10 bisection iterations). If the image cannot
/// get under the budget even at quality 0, the quality 0 encode is returned
/// with [`CompressionOutcome::Unreachable`]; that is not an error.
///
/// # Errors
///
/// Returns an `EncodingError` if `target_bytes` is zero, the image has a zero
/// dimension, or the encoder fails. Failures are not retried.
/// `EncodingError::InvalidOptions` is returned before any encode when
/// `max_iterations` is outside `1..=MAX_ITERATIONS_LIMIT`.
pub fn compress(image: &RasterImage, target_bytes: u64) -> Result<CompressionResult, EncodingError> {
    CompressionRequest::new(image, target_bytes).run()
}

impl CompressionRequest<'_> {
    /// Render the image onto a surface owned by this call and run the search.
    pub fn run(&self) -> Result<CompressionResult, EncodingError> {
        if self.target_bytes == 0 {
            return Err(EncodingError::InvalidTarget(self.target_bytes));
        }
        self.options.validate()?;
        let mut surface = DrawingSurface::for_image(self.image)?;
        compress_with(&mut surface, self.target_bytes, &self.options)
    }
}

/// Run the target-size search against any [`QualityEncoder`].
pub fn compress_with<E>(
    encoder: &mut E,
    target_bytes: u64,
    options: &CompressionOptions,
) -> Result<CompressionResult, EncodingError>
where
    E: QualityEncoder + ?Sized,
{
    if target_bytes == 0 {
        return Err(EncodingError::InvalidTarget(target_bytes));
    }
    options.validate()?;

    let span = debug_span!(
        "compress",
        target_bytes,
        max_iterations = options.max_iterations
    );
    let _enter = span.enter();

    let mut probes = Vec::with_capacity(options.max_iterations as usize + 2);

    let initial = probe(encoder, MAX_QUALITY, &mut probes)?;
    if fits(&initial, target_bytes) {
        info!(size = initial.len(), "maximum quality already fits");
        return Ok(CompressionResult {
            bytes: initial,
            quality: MAX_QUALITY,
            iterations: 0,
            probes,
            outcome: CompressionOutcome::FitsAtMaxQuality,
        });
    }
    drop(initial);

    let (mut lo, mut hi) = (MIN_QUALITY, MAX_QUALITY);
    let mut best: Option<(f32, Vec<u8>)> = None;

    for _ in 0..options.max_iterations {
        let mid = (lo + hi) / 2.0;
        let bytes = probe(encoder, mid, &mut probes)?;
        if fits(&bytes, target_bytes) {
            lo = mid;
            best = Some((mid, bytes));
        } else {
            hi = mid;
        }
    }

    if let Some((quality, bytes)) = best {
        info!(quality, size = bytes.len(), "converged");
        return Ok(CompressionResult {
            bytes,
            quality,
            iterations: options.max_iterations,
            probes,
            outcome: CompressionOutcome::Converged,
        });
    }

    // No probe fit: fall back to the smallest artifact the encoder can make.
    let floor = probe(encoder, MIN_QUALITY, &mut probes)?;
    let outcome = if fits(&floor, target_bytes) {
        info!(size = floor.len(), "only the minimum quality fits");
        CompressionOutcome::Converged
    } else {
        warn!(
            size = floor.len(),
            target_bytes, "target unreachable, returning minimum quality"
        );
        CompressionOutcome::Unreachable
    };

    Ok(CompressionResult {
        bytes: floor,
        quality: MIN_QUALITY,
        iterations: options.max_iterations,
        probes,
        outcome,
    })
}

fn probe<E>(
    encoder: &mut E,
    quality: f32,
    probes: &mut Vec<QualityProbe>,
) -> Result<Vec<u8>, EncodingError>
where
    E: QualityEncoder + ?Sized,
{
    let bytes = encoder.encode(quality)?;
    debug!(quality, size = bytes.len(), "probe");
    probes.push(QualityProbe {
        quality,
        encoded_size: bytes.len(),
    });
    Ok(bytes)
}

#[inline]
fn fits(bytes: &[u8], target_bytes: u64) -> bool {
    bytes.len() as u64 <= target_bytes
}


// ============================================================================
// Property-Based Tests
// ============================================================================
