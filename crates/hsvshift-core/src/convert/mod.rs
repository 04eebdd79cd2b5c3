//! HSV → RGB reconstruction, implemented twice.
//!
//! [`scalar`] walks the image one pixel at a time and is the reference.
//! [`vector`] computes each intermediate quantity as a whole-image plane and
//! selects channels with per-sector masks. Both read the sector table in
//! [`crate::color_model::sector`] and quantize the same way, so their outputs
//! agree to within one 8-bit step.

pub mod scalar;
pub mod vector;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result};
use crate::image::{HsvImage, RgbImage};

pub use scalar::hsv_to_rgb_scalar;
pub use vector::hsv_to_rgb_vector;

/// Largest per-channel difference the two converters may show.
pub const CHANNEL_TOLERANCE: u8 = 1;

/// Map a normalized channel to 8 bits: round to nearest, clamp to `[0, 255]`.
#[inline]
pub fn quantize(channel: f32) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Which converter to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Per-pixel iteration ([`hsv_to_rgb_scalar`]).
    Scalar,
    /// Whole-image planes ([`hsv_to_rgb_vector`]).
    Vector,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::Scalar, Method::Vector];

    /// Stable lowercase label for tables and file names.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Vector => "vector",
        }
    }

    pub fn convert(self, image: &HsvImage) -> RgbImage {
        match self {
            Self::Scalar => hsv_to_rgb_scalar(image),
            Self::Vector => hsv_to_rgb_vector(image),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scalar" | "loop" => Ok(Self::Scalar),
            "vector" | "matrix" => Ok(Self::Vector),
            other => Err(format!("unknown method `{other}` (expected scalar or vector)")),
        }
    }
}

/// Largest absolute difference between corresponding channels of two images.
pub fn max_channel_delta(a: &RgbImage, b: &RgbImage) -> Result<u8> {
    if (a.width, a.height) != (b.width, b.height) || a.pixels.len() != b.pixels.len() {
        return Err(CoreError::invalid_image(format!(
            "cannot compare {}x{} with {}x{}",
            a.width, a.height, b.width, b.height
        )));
    }

    Ok(a
        .as_bytes()
        .iter()
        .zip(b.as_bytes())
        .map(|(&x, &y)| x.abs_diff(y))
        .max()
        .unwrap_or(0))
}
