//! Helpers for the image size changer page.
//!
//! Slider bounds, default budget, download naming and human-readable sizes.
//! These sit around the compressor; none of them touch pixel data.

use serde::Serialize;

/// Smallest target the slider offers.
pub const MIN_TARGET_KB: u64 = 10;
/// Slider step.
pub const TARGET_STEP_KB: u64 = 10;
/// Preferred starting target for large files.
pub const DEFAULT_TARGET_KB: u64 = 100;
/// Slider maximum before any file has been loaded.
pub const NO_FILE_MAX_TARGET_KB: u64 = 2000;

/// Most fractional digits `format_bytes` will render, as with `toFixed`.
pub const MAX_DECIMALS: usize = 100;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Convert a target in kilobytes to a byte budget (1 KB = 1024 bytes).
pub fn target_bytes_from_kb(kb: u64) -> u64 {
    kb.saturating_mul(1024)
}

/// Starting target for a freshly loaded file: 100 KB, or the file's own size
/// in whole KB if that is smaller.
pub fn default_target_kb(file_size: u64) -> u64 {
    DEFAULT_TARGET_KB.min(file_size / 1024)
}

/// Bounds of the target-size slider.
///
/// Only built through `Default` and `for_file_size`, so `min_kb <= max_kb`
/// and `step_kb > 0` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetRange {
    min_kb: u64,
    max_kb: u64,
    step_kb: u64,
}

impl Default for TargetRange {
    fn default() -> Self {
        Self {
            min_kb: MIN_TARGET_KB,
            max_kb: NO_FILE_MAX_TARGET_KB,
            step_kb: TARGET_STEP_KB,
        }
    }
}

impl TargetRange {
    /// Range for a file of `file_size` bytes: up to the file's size in KB,
    /// never below the minimum.
    pub fn for_file_size(file_size: u64) -> Self {
        Self {
            max_kb: MIN_TARGET_KB.max(file_size / 1024),
            ..Self::default()
        }
    }

    pub fn min_kb(&self) -> u64 {
        self.min_kb
    }

    pub fn max_kb(&self) -> u64 {
        self.max_kb
    }

    pub fn step_kb(&self) -> u64 {
        self.step_kb
    }

    /// Snap `kb` to the nearest slider position inside the range.
    pub fn clamp(&self, kb: u64) -> u64 {
        let kb = kb.clamp(self.min_kb, self.max_kb);
        let offset = kb - self.min_kb;
        let snapped = self.min_kb + (offset + self.step_kb / 2) / self.step_kb * self.step_kb;
        if snapped > self.max_kb {
            snapped - self.step_kb
        } else {
            snapped
        }
    }
}

/// Download name for a compressed file: the original name without its last
/// extension, followed by `-{kb}kb.jpg`.
///
/// A name with no extension contributes an empty stem.
pub fn output_file_name(original: &str, target_kb: u64) -> String {
    let stem = original.rfind('.').map_or("", |i| &original[..i]);
    format!("{stem}-{target_kb}kb.jpg")
}

/// Format a byte count with 1024-based units, trimming trailing zeros.
///
/// `format_bytes(1536, 2)` gives `"1.5 KB"`. `decimals` is capped at
/// [`MAX_DECIMALS`].
pub fn format_bytes(bytes: u64, decimals: usize) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let mut text = format!("{value:.decimals$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    format!("{} {}", text, SIZE_UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_bytes_from_kb() {
        assert_eq!(target_bytes_from_kb(100), 102_400);
        assert_eq!(target_bytes_from_kb(0), 0);
        assert_eq!(target_bytes_from_kb(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_default_target_kb() {
        assert_eq!(default_target_kb(5 * 1024 * 1024), 100);
        assert_eq!(default_target_kb(60 * 1024 + 512), 60);
        assert_eq!(default_target_kb(500), 0);
    }

    #[test]
    fn test_target_range_for_file() {
        let range = TargetRange::for_file_size(800 * 1024);
        assert_eq!(range.min_kb(), 10);
        assert_eq!(range.max_kb(), 800);
        assert_eq!(range.step_kb(), 10);

        // Tiny files still get a usable slider
        assert_eq!(TargetRange::for_file_size(2048).max_kb(), 10);
    }

    #[test]
    fn test_target_range_default() {
        assert_eq!(TargetRange::default().max_kb(), 2000);
    }

    #[test]
    fn test_target_range_clamp() {
        let range = TargetRange::for_file_size(805 * 1024);
        assert_eq!(range.clamp(0), 10);
        assert_eq!(range.clamp(14), 10);
        assert_eq!(range.clamp(15), 20);
        assert_eq!(range.clamp(100), 100);
        // 805 snaps to 810, which is past the max, so it steps back
        assert_eq!(range.clamp(5000), 800);
    }

    #[test]
    fn test_target_range_clamp_extremes() {
        for file_size in [0, 1, 1023, 10 * 1024, u64::MAX] {
            let range = TargetRange::for_file_size(file_size);
            assert!(range.min_kb() <= range.max_kb());
            for kb in [0, 10, 11, u64::MAX] {
                let snapped = range.clamp(kb);
                assert!((range.min_kb()..=range.max_kb()).contains(&snapped));
            }
        }
        assert_eq!(TargetRange::for_file_size(0).clamp(u64::MAX), 10);
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name("photo.png", 100), "photo-100kb.jpg");
        assert_eq!(output_file_name("holiday.final.jpeg", 50), "holiday.final-50kb.jpg");
        assert_eq!(output_file_name("noext", 10), "-10kb.jpg");
        assert_eq!(output_file_name(".hidden", 10), "-10kb.jpg");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0, 2), "0 Bytes");
        assert_eq!(format_bytes(500, 2), "500 Bytes");
        assert_eq!(format_bytes(1024, 2), "1 KB");
        assert_eq!(format_bytes(1536, 2), "1.5 KB");
        assert_eq!(format_bytes(1_048_576, 2), "1 MB");
        assert_eq!(format_bytes(123_456_789, 2), "117.74 MB");
        assert_eq!(format_bytes(1536, 0), "2 KB");
    }

    #[test]
    fn test_format_bytes_caps_at_gigabytes() {
        assert_eq!(format_bytes(2 * 1024 * 1024 * 1024 * 1024, 2), "2048 GB");
    }

    #[test]
    fn test_format_bytes_caps_decimals() {
        assert_eq!(format_bytes(1536, usize::MAX), "1.5 KB");
        assert_eq!(
            format_bytes(123_456_789, 10_000),
            format_bytes(123_456_789, MAX_DECIMALS)
        );
    }
}
