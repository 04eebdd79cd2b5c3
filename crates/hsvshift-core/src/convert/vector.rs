//! Whole-image HSV → RGB conversion.
//!
//! Each step is one elementwise pass over equal-length planes:
//!
//! 1. split the image into `H`, `S`, `V` planes
//! 2. sextant, sector index and in-sector fraction planes
//! 3. `p`, `q`, `t` planes
//! 4. for every output channel, start from zeros and blend in the source
//!    plane of each sector wherever the sector mask is set
//! 5. quantize and interleave
//!
//! No step branches on an individual pixel's sector, so the passes are
//! straight-line loops the compiler can vectorize.

use crate::color_model::sector::{Component, Sector};
use crate::convert::quantize;
use crate::image::{HUE, HsvImage, RgbImage, SATURATION, VALUE};

fn map1(a: &[f32], f: impl Fn(f32) -> f32) -> Vec<f32> {
    a.iter().map(|&x| f(x)).collect()
}

fn map2(a: &[f32], b: &[f32], f: impl Fn(f32, f32) -> f32) -> Vec<f32> {
    a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect()
}

fn map3(a: &[f32], b: &[f32], c: &[f32], f: impl Fn(f32, f32, f32) -> f32) -> Vec<f32> {
    a.iter()
        .zip(b)
        .zip(c)
        .map(|((&x, &y), &z)| f(x, y, z))
        .collect()
}

/// `out[i] = if mask[i] { src[i] } else { out[i] }`.
fn blend(mask: &[bool], src: &[f32], out: &mut [f32]) {
    for ((o, &s), &m) in out.iter_mut().zip(src).zip(mask) {
        *o = if m { s } else { *o };
    }
}

/// Convert an HSV image to RGB using plane-wide operations.
///
/// Produces the same function as
/// [`hsv_to_rgb_scalar`](crate::convert::hsv_to_rgb_scalar).
pub fn hsv_to_rgb_vector(image: &HsvImage) -> RgbImage {
    let n = image.pixel_count();
    let hue = image.channel(HUE);
    let saturation = image.channel(SATURATION);
    let value = image.channel(VALUE);

    let sextant = map1(&hue, Sector::sextant);
    let index = map1(&sextant, Sector::index_of_sextant);
    let fraction = map2(&sextant, &index, |x, i| x - i);

    let floor = map2(&value, &saturation, |v, s| v * (1.0 - s));
    let falling = map3(&value, &saturation, &fraction, |v, s, f| v * (1.0 - s * f));
    let rising = map3(&value, &saturation, &fraction, |v, s, f| {
        v * (1.0 - s * (1.0 - f))
    });
    let planes: [&[f32]; 4] = [&value, &floor, &falling, &rising];

    let masks: Vec<Vec<bool>> = Sector::ALL
        .iter()
        .map(|sector| {
            let k = sector.index() as f32;
            index.iter().map(|&i| i == k).collect()
        })
        .collect();

    let mut channels = [vec![0.0_f32; n], vec![0.0_f32; n], vec![0.0_f32; n]];
    for (sector, mask) in Sector::ALL.iter().zip(&masks) {
        let layout: [Component; 3] = sector.layout();
        for (out, component) in channels.iter_mut().zip(layout) {
            blend(mask, component.pick(&planes), out);
        }
    }

    let [red, green, blue] = channels;
    let pixels = red
        .iter()
        .zip(&green)
        .zip(&blue)
        .map(|((&r, &g), &b)| [quantize(r), quantize(g), quantize(b)])
        .collect();

    RgbImage {
        width: image.width,
        height: image.height,
        pixels,
    }
}
