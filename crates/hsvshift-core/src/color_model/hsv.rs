//! RGB → HSV forward transform.
//!
//! ```text
//! V = max(R, G, B)
//! S = (max − min) / max          (0 when max = 0)
//! H = 60° × (G − B) / Δ  mod 360  when max = R
//!     60° × ((B − R) / Δ + 2)     when max = G
//!     60° × ((R − G) / Δ + 4)     when max = B
//!     0                           when Δ = 0
//! ```

use crate::color_model::adjust::wrap_degrees;
use crate::image::{HsvImage, RgbImage};

/// Convert one 8-bit RGB pixel to `[H°, S, V]`.
///
/// Channel comparisons are done on the integer samples so ties between
/// channels resolve exactly, and gray pixels never divide by zero.
pub fn rgb_to_hsv_pixel(rgb: [u8; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let value = f32::from(max) / 255.0;

    if max == min {
        return [0.0, 0.0, value];
    }

    let delta = f32::from(max - min);
    let saturation = delta / f32::from(max);

    let (r, g, b) = (f32::from(r), f32::from(g), f32::from(b));
    let sextant = if max == rgb[0] {
        (g - b) / delta
    } else if max == rgb[1] {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    [wrap_degrees(60.0 * sextant), saturation, value]
}

/// Convert an RGB image to HSV. The input is not modified.
pub fn rgb_to_hsv(image: &RgbImage) -> HsvImage {
    HsvImage {
        width: image.width,
        height: image.height,
        pixels: image.pixels.iter().map(|&px| rgb_to_hsv_pixel(px)).collect(),
    }
}
