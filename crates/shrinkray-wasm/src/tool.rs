//! Size changer page helpers exposed to JavaScript.
//!
//! File sizes arrive from `File.size` as JS numbers, so they are taken as
//! `f64` and truncated to whole bytes.

use shrinkray_core::tool::{self, TargetRange};
use wasm_bindgen::prelude::*;

/// Slider bounds for the target size, in KB.
#[wasm_bindgen]
pub struct JsTargetRange {
    inner: TargetRange,
}

#[wasm_bindgen]
impl JsTargetRange {
    #[wasm_bindgen(getter)]
    pub fn min(&self) -> u32 {
        self.inner.min_kb() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn max(&self) -> u32 {
        self.inner.max_kb().min(u32::MAX as u64) as u32
    }

    #[wasm_bindgen(getter)]
    pub fn step(&self) -> u32 {
        self.inner.step_kb() as u32
    }

    /// Snap a requested value onto the slider.
    pub fn clamp(&self, kb: u32) -> u32 {
        self.inner.clamp(kb as u64) as u32
    }
}

/// Slider range for a file of `file_size` bytes, or the no-file default when
/// `file_size` is `undefined`.
#[wasm_bindgen]
pub fn target_range_kb(file_size: Option<f64>) -> JsTargetRange {
    let inner = match file_size {
        Some(size) => TargetRange::for_file_size(to_bytes(size)),
        None => TargetRange::default(),
    };
    JsTargetRange { inner }
}

/// Starting slider value for a newly loaded file.
#[wasm_bindgen]
pub fn default_target_kb(file_size: f64) -> u32 {
    tool::default_target_kb(to_bytes(file_size)) as u32
}

/// Download name for the compressed file, e.g. `photo-100kb.jpg`.
#[wasm_bindgen]
pub fn output_file_name(original: &str, target_kb: u32) -> String {
    tool::output_file_name(original, target_kb as u64)
}

/// Human-readable size such as `"1.5 KB"`. `decimals` defaults to 2 and is
/// capped at 100.
#[wasm_bindgen]
pub fn format_bytes(bytes: f64, decimals: Option<u32>) -> String {
    tool::format_bytes(to_bytes(bytes), decimals.unwrap_or(2) as usize)
}

fn to_bytes(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value as u64
    } else {
        0
    }
}
