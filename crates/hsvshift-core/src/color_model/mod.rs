//! Color model — the HSV ⇄ RGB math and the hue/saturation/value adjustments.
//!
//! Everything here is a pure function of its inputs. The sector table in
//! [`sector`] is the single definition of HSV → RGB reconstruction that both
//! converters are built on.

pub mod adjust;
pub mod hsv;
pub mod sector;

pub use adjust::{apply_hue_shift, apply_saturation_scale, apply_value_gamma, wrap_degrees};
pub use hsv::{rgb_to_hsv, rgb_to_hsv_pixel};
pub use sector::{Component, Sector};
