//! Intermediate values of an adjustment, for callers that want to show them.
//!
//! Computing a report never changes the images it reads; the presentation
//! layer decides whether to build one and how to print it.

use serde::Serialize;

use crate::error::{CoreError, Result};
use crate::image::{HUE, HsvImage, VALUE};
use crate::params::AdjustParams;

/// Closed `[min, max]` range of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelRange {
    pub min: f32,
    pub max: f32,
}

impl ChannelRange {
    fn of(values: impl Iterator<Item = f32>) -> Self {
        values.fold(
            Self {
                min: f32::INFINITY,
                max: f32::NEG_INFINITY,
            },
            |acc, v| Self {
                min: acc.min.min(v),
                max: acc.max.max(v),
            },
        )
    }
}

/// Before/after values at one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PixelSample {
    pub x: u32,
    pub y: u32,
    /// Hue in degrees before adjustment.
    pub hue_before: f32,
    /// Hue in degrees after adjustment.
    pub hue_after: f32,
    /// Value on the 0–255 scale before adjustment.
    pub value_before: f32,
    /// Value on the 0–255 scale after adjustment.
    pub value_after: f32,
    /// Normalized value before the power law.
    pub normalized_before: f32,
    /// Normalized value after the power law.
    pub normalized_after: f32,
}

/// Summary of how an adjustment moved the hue and value channels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjustmentReport {
    pub params: AdjustParams,
    /// Hue range in degrees.
    pub hue_before: ChannelRange,
    pub hue_after: ChannelRange,
    /// Value range on the 0–255 scale.
    pub value_before: ChannelRange,
    pub value_after: ChannelRange,
    pub samples: Vec<PixelSample>,
}

impl AdjustmentReport {
    /// Compare the HSV image before and after adjustment.
    ///
    /// `sample_count` pixels are taken at evenly spaced positions through the
    /// buffer, so the same inputs always produce the same report.
    pub fn compute(
        before: &HsvImage,
        after: &HsvImage,
        params: &AdjustParams,
        sample_count: usize,
    ) -> Result<Self> {
        if (before.width, before.height) != (after.width, after.height)
            || before.pixels.len() != after.pixels.len()
        {
            return Err(CoreError::invalid_image(
                "report needs the same image before and after adjustment",
            ));
        }

        let n = before.pixel_count();
        let count = sample_count.min(n);
        let samples = (0..count)
            .map(|i| {
                // Centre of the i-th of `count` equal slices.
                let idx = (2 * i + 1) * n / (2 * count);
                let b = before.pixels[idx];
                let a = after.pixels[idx];
                PixelSample {
                    x: (idx % before.width as usize) as u32,
                    y: (idx / before.width as usize) as u32,
                    hue_before: b[HUE],
                    hue_after: a[HUE],
                    value_before: b[VALUE] * 255.0,
                    value_after: a[VALUE] * 255.0,
                    normalized_before: b[VALUE],
                    normalized_after: a[VALUE],
                }
            })
            .collect();

        Ok(Self {
            params: *params,
            hue_before: ChannelRange::of(before.pixels.iter().map(|px| px[HUE])),
            hue_after: ChannelRange::of(after.pixels.iter().map(|px| px[HUE])),
            value_before: ChannelRange::of(before.pixels.iter().map(|px| px[VALUE] * 255.0)),
            value_after: ChannelRange::of(after.pixels.iter().map(|px| px[VALUE] * 255.0)),
            samples,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_model::{apply_hue_shift, apply_value_gamma};

    const EPSILON: f32 = 1e-4;

    fn ramp() -> HsvImage {
        let pixels = (0..10)
            .map(|i| [i as f32 * 30.0, 1.0, i as f32 / 9.0])
            .collect();
        HsvImage::new(5, 2, pixels).unwrap()
    }

    #[test]
    fn test_ranges() {
        let before = ramp();
        let after = apply_value_gamma(&apply_hue_shift(&before, 90.0), 2.0).unwrap();
        let report = AdjustmentReport::compute(&before, &after, &AdjustParams::new(90.0, 2.0), 3)
            .unwrap();

        assert_eq!(report.hue_before.min, 0.0);
        assert_eq!(report.hue_before.max, 270.0);
        assert_eq!(report.hue_after.min, 0.0);
        assert_eq!(report.hue_after.max, 330.0);
        assert!((report.value_before.max - 255.0).abs() < EPSILON);
        assert!((report.value_after.max - 255.0).abs() < EPSILON);
        assert_eq!(report.value_after.min, 0.0);
    }

    #[test]
    fn test_samples_are_deterministic_and_in_bounds() {
        let before = ramp();
        let after = apply_value_gamma(&before, 1.5).unwrap();
        let params = AdjustParams::new(0.0, 1.5);
        let a = AdjustmentReport::compute(&before, &after, &params, 5).unwrap();
        let b = AdjustmentReport::compute(&before, &after, &params, 5).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.samples.len(), 5);
        for s in &a.samples {
            assert!(s.x < 5 && s.y < 2);
            let expected = s.normalized_before.powf(1.5);
            assert!((s.normalized_after - expected).abs() < EPSILON);
        }
    }

    #[test]
    fn test_sample_count_capped_by_pixels() {
        let before = ramp();
        let report =
            AdjustmentReport::compute(&before, &before, &AdjustParams::default(), 50).unwrap();
        assert_eq!(report.samples.len(), 10);
    }

    #[test]
    fn test_rejects_mismatched_images() {
        let before = ramp();
        let other = HsvImage::new(10, 1, before.pixels.clone()).unwrap();
        assert!(AdjustmentReport::compute(&before, &other, &AdjustParams::default(), 1).is_err());
    }
}
