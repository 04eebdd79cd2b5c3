//! Adjustment parameters accepted from the caller.
//!
//! `AdjustParams` is the single description of what the pipeline does to an
//! image. The color-model functions trust their arguments; range checks for
//! values coming from a user live in [`AdjustParams::validate`].

use serde::{Deserialize, Serialize};

use crate::color_model::wrap_degrees;
use crate::error::{CoreError, Result};

/// Accepted range for [`AdjustParams::value_exponent`].
pub const VALUE_EXPONENT_RANGE: (f32, f32) = (0.5, 4.0);
/// Accepted range for [`AdjustParams::saturation`].
pub const SATURATION_RANGE: (f32, f32) = (0.0, 2.0);

/// Hue, saturation and value adjustments applied before reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustParams {
    /// Hue rotation in degrees. Any finite value; wrapped modulo 360.
    pub hue_shift: f32,
    /// Saturation multiplier. 1.0 = neutral.
    pub saturation: f32,
    /// Power-law exponent on the normalized value channel. 1.0 = neutral.
    pub value_exponent: f32,
}

impl Default for AdjustParams {
    /// Produces an identity adjustment — the image passes through unchanged.
    fn default() -> Self {
        Self {
            hue_shift: 0.0,
            saturation: 1.0,
            value_exponent: 1.0,
        }
    }
}

fn check_range(name: &'static str, value: f32, (lo, hi): (f32, f32)) -> Result<()> {
    if !(lo..=hi).contains(&value) {
        return Err(CoreError::invalid_parameter(
            name,
            value,
            "outside the accepted range",
        ));
    }
    Ok(())
}

impl AdjustParams {
    pub fn new(hue_shift: f32, value_exponent: f32) -> Self {
        Self {
            hue_shift,
            value_exponent,
            ..Self::default()
        }
    }

    pub fn with_saturation(mut self, saturation: f32) -> Self {
        self.saturation = saturation;
        self
    }

    /// Whether these parameters leave every pixel unchanged.
    pub fn is_identity(&self) -> bool {
        wrap_degrees(self.hue_shift) == 0.0
            && self.saturation == 1.0
            && self.value_exponent == 1.0
    }

    /// Check the caller-facing domain: finite hue shift, saturation in
    /// `[0, 2]`, value exponent in `[0.5, 4]`.
    pub fn validate(&self) -> Result<()> {
        if !self.hue_shift.is_finite() {
            return Err(CoreError::invalid_parameter(
                "hue_shift",
                self.hue_shift,
                "hue shift must be finite",
            ));
        }
        check_range("saturation", self.saturation, SATURATION_RANGE)?;
        check_range("value_exponent", self.value_exponent, VALUE_EXPONENT_RANGE)?;
        Ok(())
    }
}
