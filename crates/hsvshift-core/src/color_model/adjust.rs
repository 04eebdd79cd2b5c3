//! Hue rotation, saturation scaling and value gamma on HSV images.

use crate::error::{CoreError, Result};
use crate::image::{HUE, HsvImage, SATURATION, VALUE};

/// Reduce an angle in degrees to `[0, 360)`.
///
/// `rem_euclid` can round up to exactly 360 for tiny negative inputs, which
/// is folded back to 0.
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Rotate every pixel's hue by `shift_degrees`.
///
/// Any real shift is accepted and wrapped modulo 360; saturation and value
/// are left untouched. The shift is reduced before it is added so that
/// `shift` and `shift + 360` land on the same hue.
pub fn apply_hue_shift(image: &HsvImage, shift_degrees: f32) -> HsvImage {
    let shift = wrap_degrees(shift_degrees);
    image.map_pixels(|mut px| {
        px[HUE] = wrap_degrees(px[HUE] + shift);
        px
    })
}

/// Multiply every pixel's saturation by `factor`, clamped to `[0, 1]`.
///
/// `factor = 1.0` is the identity.
pub fn apply_saturation_scale(image: &HsvImage, factor: f32) -> HsvImage {
    image.map_pixels(|mut px| {
        px[SATURATION] = (px[SATURATION] * factor).clamp(0.0, 1.0);
        px
    })
}

/// Apply a power-law curve to the value channel.
///
/// ```text
/// V' = clamp(V, 0, 1) ^ exponent
/// ```
///
/// Monotonic and range-preserving for any positive exponent;
/// `exponent = 1.0` leaves the channel unchanged. Non-finite or non-positive
/// exponents are rejected rather than producing NaN or a discontinuous curve.
pub fn apply_value_gamma(image: &HsvImage, exponent: f32) -> Result<HsvImage> {
    if !exponent.is_finite() || exponent <= 0.0 {
        return Err(CoreError::invalid_parameter(
            "value_exponent",
            exponent,
            "power-law exponent must be finite and positive",
        ));
    }

    Ok(image.map_pixels(|mut px| {
        px[VALUE] = px[VALUE].clamp(0.0, 1.0).powf(exponent);
        px
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn sample() -> HsvImage {
        HsvImage::new(
            4,
            1,
            vec![
                [0.0, 1.0, 1.0],
                [90.0, 0.5, 0.25],
                [359.5, 0.2, 0.8],
                [200.0, 0.0, 0.5],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(370.0), 10.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert_eq!(wrap_degrees(-720.0), 0.0);
        let tiny = wrap_degrees(-1e-9);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_hue_shift_wraps() {
        let shifted = apply_hue_shift(&sample(), 120.0);
        assert_eq!(shifted.pixels[0][HUE], 120.0);
        assert_eq!(shifted.pixels[1][HUE], 210.0);
        assert!((shifted.pixels[2][HUE] - 119.5).abs() < EPSILON);
        assert_eq!(shifted.pixels[3][HUE], 320.0);
    }

    #[test]
    fn test_hue_shift_leaves_saturation_and_value() {
        let image = sample();
        let shifted = apply_hue_shift(&image, -75.0);
        for (a, b) in image.pixels.iter().zip(&shifted.pixels) {
            assert_eq!(a[SATURATION], b[SATURATION]);
            assert_eq!(a[VALUE], b[VALUE]);
        }
    }

    #[test]
    fn test_hue_shift_full_turn_is_equivalent() {
        let image = sample();
        for shift in [0.0, 45.0, 120.0, -30.0, 359.0] {
            let a = apply_hue_shift(&image, shift);
            let b = apply_hue_shift(&image, shift + 360.0);
            assert_eq!(a, b, "shift {shift}");
        }
    }

    #[test]
    fn test_hue_shift_does_not_mutate_input() {
        let image = sample();
        let before = image.clone();
        let _ = apply_hue_shift(&image, 90.0);
        assert_eq!(image, before);
    }

    #[test]
    fn test_saturation_scale_clamps() {
        let doubled = apply_saturation_scale(&sample(), 2.0);
        assert_eq!(doubled.pixels[0][SATURATION], 1.0);
        assert_eq!(doubled.pixels[1][SATURATION], 1.0);
        assert!((doubled.pixels[2][SATURATION] - 0.4).abs() < EPSILON);
        assert_eq!(doubled.pixels[3][SATURATION], 0.0);

        let none = apply_saturation_scale(&sample(), 0.0);
        assert!(none.pixels.iter().all(|px| px[SATURATION] == 0.0));
    }

    #[test]
    fn test_saturation_scale_one_is_identity() {
        let image = sample();
        assert_eq!(apply_saturation_scale(&image, 1.0), image);
    }

    #[test]
    fn test_gamma_one_is_identity() {
        let image = sample();
        let result = apply_value_gamma(&image, 1.0).unwrap();
        for (a, b) in image.pixels.iter().zip(&result.pixels) {
            assert!((a[VALUE] - b[VALUE]).abs() < EPSILON);
        }
    }

    #[test]
    fn test_gamma_preserves_range_endpoints() {
        let image = HsvImage::new(2, 1, vec![[0.0, 0.0, 0.0], [0.0, 0.0, 1.0]]).unwrap();
        for exponent in [0.5, 1.5, 4.0] {
            let result = apply_value_gamma(&image, exponent).unwrap();
            assert_eq!(result.pixels[0][VALUE], 0.0);
            assert_eq!(result.pixels[1][VALUE], 1.0);
        }
    }

    #[test]
    fn test_gamma_is_monotonic() {
        let values: Vec<[f32; 3]> = (0..=255).map(|i| [0.0, 0.0, i as f32 / 255.0]).collect();
        let image = HsvImage::new(256, 1, values).unwrap();
        for exponent in [0.5, 1.0, 1.5, 2.2, 4.0] {
            let result = apply_value_gamma(&image, exponent).unwrap();
            for pair in result.pixels.windows(2) {
                assert!(
                    pair[1][VALUE] >= pair[0][VALUE],
                    "exponent {exponent}: {} then {}",
                    pair[0][VALUE],
                    pair[1][VALUE]
                );
            }
        }
    }

    #[test]
    fn test_gamma_darkens_above_one() {
        let result = apply_value_gamma(&sample(), 2.0).unwrap();
        assert!((result.pixels[1][VALUE] - 0.0625).abs() < EPSILON);
    }

    #[test]
    fn test_gamma_rejects_bad_exponent() {
        for exponent in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = apply_value_gamma(&sample(), exponent).unwrap_err();
            assert!(matches!(
                err,
                CoreError::InvalidParameter {
                    name: "value_exponent",
                    ..
                }
            ));
        }
    }
}
