//! Per-pixel HSV → RGB conversion.

use crate::color_model::sector::{Sector, components};
use crate::convert::quantize;
use crate::image::{HsvImage, RgbImage};

/// Convert one `[H°, S, V]` pixel to 8-bit RGB.
pub fn hsv_to_rgb_pixel(hsv: [f32; 3]) -> [u8; 3] {
    let [hue, saturation, value] = hsv;
    let (sector, fraction) = Sector::locate(hue);
    let values = components(saturation, value, fraction);
    sector.layout().map(|component| quantize(component.pick(&values)))
}

/// Convert an HSV image to RGB by visiting every pixel independently.
///
/// This is the reference implementation the vector path is checked against.
pub fn hsv_to_rgb_scalar(image: &HsvImage) -> RgbImage {
    let mut pixels = Vec::with_capacity(image.pixel_count());
    for &hsv in &image.pixels {
        pixels.push(hsv_to_rgb_pixel(hsv));
    }

    RgbImage {
        width: image.width,
        height: image.height,
        pixels,
    }
}
