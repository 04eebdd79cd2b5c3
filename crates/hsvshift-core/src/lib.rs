//! hsvshift core — HSV hue/value adjustment and HSV → RGB reconstruction.
//!
//! This crate contains the color model, the two HSV → RGB converters
//! (per-pixel scalar and whole-image vector), the adjustment pipeline, and
//! the timing harness that compares the converters. No file I/O and no
//! rendering dependencies.

pub mod benchmark;
pub mod color_model;
pub mod convert;
pub mod error;
pub mod image;
pub mod params;
pub mod pipeline;
pub mod report;

// Re-exports for convenience.
pub use benchmark::{
    BenchmarkConfig, BenchmarkImage, BenchmarkResult, Comparison, run_comparison, summarize,
};
pub use color_model::{apply_hue_shift, apply_saturation_scale, apply_value_gamma, rgb_to_hsv};
pub use convert::{Method, hsv_to_rgb_scalar, hsv_to_rgb_vector, max_channel_delta};
pub use error::CoreError;
pub use image::{HsvImage, RgbImage};
pub use params::AdjustParams;
pub use pipeline::{Modified, modify, prepare};
pub use report::AdjustmentReport;
