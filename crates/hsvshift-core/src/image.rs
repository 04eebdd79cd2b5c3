//! Image representations for the adjustment pipeline.
//!
//! Both image types are value-like: every stage of the pipeline produces a new
//! image and leaves its input untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, Result};

/// Index of the hue channel in an HSV pixel.
pub const HUE: usize = 0;
/// Index of the saturation channel in an HSV pixel.
pub const SATURATION: usize = 1;
/// Index of the value channel in an HSV pixel.
pub const VALUE: usize = 2;

/// 8-bit RGB image, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawImage<[u8; 3]>")]
pub struct RgbImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel data as `[R, G, B]` in 0–255.
    pub pixels: Vec<[u8; 3]>,
}

/// HSV image, row-major, same layout as [`RgbImage`].
///
/// Each pixel is `[H, S, V]` with hue in degrees `[0, 360)` and saturation
/// and value normalized to `[0, 1]`. Both converters read this exact
/// representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawImage<[f32; 3]>")]
pub struct HsvImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel data as `[H, S, V]`.
    pub pixels: Vec<[f32; 3]>,
}

/// Unchecked wire form; deserialization goes through the validating
/// constructors.
#[derive(Deserialize)]
struct RawImage<P> {
    width: u32,
    height: u32,
    pixels: Vec<P>,
}

impl TryFrom<RawImage<[u8; 3]>> for RgbImage {
    type Error = CoreError;

    fn try_from(raw: RawImage<[u8; 3]>) -> Result<Self> {
        Self::new(raw.width, raw.height, raw.pixels)
    }
}

impl TryFrom<RawImage<[f32; 3]>> for HsvImage {
    type Error = CoreError;

    fn try_from(raw: RawImage<[f32; 3]>) -> Result<Self> {
        Self::new(raw.width, raw.height, raw.pixels)
    }
}

fn check_shape(width: u32, height: u32, len: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(CoreError::invalid_image(format!(
            "empty image ({width}x{height})"
        )));
    }
    let expected = width as usize * height as usize;
    if len != expected {
        return Err(CoreError::invalid_image(format!(
            "{width}x{height} image needs {expected} pixels, got {len}"
        )));
    }
    Ok(())
}

impl RgbImage {
    /// Build an image, rejecting empty grids and buffers of the wrong length.
    pub fn new(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Result<Self> {
        check_shape(width, height, pixels.len())?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build an image from interleaved `RGBRGB...` bytes.
    pub fn from_raw(width: u32, height: u32, bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() % 3 != 0 {
            return Err(CoreError::invalid_image(format!(
                "raw buffer of {} bytes is not a whole number of RGB pixels",
                bytes.len()
            )));
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        Self::new(width, height, pixels)
    }

    /// Single-color image, mostly useful for tests and synthetic benchmarks.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Result<Self> {
        Self::new(width, height, vec![rgb; width as usize * height as usize])
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Interleaved `RGBRGB...` view of the pixel buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Nearest-neighbour rescale to `width` × `height`.
    ///
    /// Fails if the target is empty or if this image's buffer does not match
    /// its dimensions.
    pub fn resize_nearest(&self, width: u32, height: u32) -> Result<Self> {
        check_shape(self.width, self.height, self.pixels.len())?;
        check_shape(width, height, width as usize * height as usize)?;

        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            let src_y = (u64::from(y) * u64::from(self.height) / u64::from(height)) as usize;
            for x in 0..width {
                let src_x = (u64::from(x) * u64::from(self.width) / u64::from(width)) as usize;
                pixels.push(self.pixels[src_y * self.width as usize + src_x]);
            }
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }
}

impl HsvImage {
    /// Build an HSV image, rejecting empty grids and buffers of the wrong length.
    pub fn new(width: u32, height: u32, pixels: Vec<[f32; 3]>) -> Result<Self> {
        check_shape(width, height, pixels.len())?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Copy of this image with `f` applied to every pixel.
    pub(crate) fn map_pixels(&self, f: impl Fn([f32; 3]) -> [f32; 3]) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&px| f(px)).collect(),
        }
    }

    /// Copy of one channel as a planar buffer.
    pub fn channel(&self, index: usize) -> Vec<f32> {
        self.pixels.iter().map(|px| px[index]).collect()
    }
}

impl fmt::Display for RgbImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} ({} pixels)",
            self.width,
            self.height,
            self.pixel_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        let err = RgbImage::new(0, 4, vec![]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidImage { .. }));
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        let err = RgbImage::new(2, 2, vec![[0, 0, 0]; 3]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidImage { .. }));
        let err = HsvImage::new(2, 2, vec![[0.0; 3]; 5]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidImage { .. }));
    }

    #[test]
    fn test_from_raw_and_as_bytes_agree() {
        let bytes = vec![1, 2, 3, 4, 5, 6];
        let image = RgbImage::from_raw(2, 1, bytes.clone()).unwrap();
        assert_eq!(image.pixels, vec![[1, 2, 3], [4, 5, 6]]);
        assert_eq!(image.as_bytes(), bytes.as_slice());
    }

    #[test]
    fn test_from_raw_rejects_partial_pixel() {
        assert!(RgbImage::from_raw(1, 1, vec![1, 2]).is_err());
    }

    #[test]
    fn test_resize_nearest_upscale_repeats_pixels() {
        let image = RgbImage::new(2, 1, vec![[255, 0, 0], [0, 0, 255]]).unwrap();
        let big = image.resize_nearest(4, 2).unwrap();
        assert_eq!(big.pixel_count(), 8);
        assert_eq!(big.pixels[0], [255, 0, 0]);
        assert_eq!(big.pixels[1], [255, 0, 0]);
        assert_eq!(big.pixels[2], [0, 0, 255]);
        assert_eq!(big.pixels[7], [0, 0, 255]);
    }

    #[test]
    fn test_resize_nearest_rejects_zero() {
        let image = RgbImage::filled(3, 3, [9, 9, 9]).unwrap();
        assert!(image.resize_nearest(0, 3).is_err());
    }

    #[test]
    fn test_resize_nearest_rejects_inconsistent_source() {
        let image = RgbImage {
            width: 4,
            height: 4,
            pixels: vec![[1, 2, 3]; 3],
        };
        let err = image.resize_nearest(2, 2).unwrap_err();
        assert!(matches!(err, CoreError::InvalidImage { .. }));
    }

    #[test]
    fn test_deserialize_validates_shape() {
        let json = r#"{"width":4,"height":4,"pixels":[[1,2,3],[4,5,6],[7,8,9]]}"#;
        assert!(serde_json::from_str::<RgbImage>(json).is_err());
        let json = r#"{"width":0,"height":1,"pixels":[]}"#;
        assert!(serde_json::from_str::<HsvImage>(json).is_err());

        let json = r#"{"width":2,"height":1,"pixels":[[1,2,3],[4,5,6]]}"#;
        let image: RgbImage = serde_json::from_str(json).unwrap();
        assert_eq!(image.pixels, vec![[1, 2, 3], [4, 5, 6]]);
        let back = serde_json::to_string(&image).unwrap();
        assert_eq!(serde_json::from_str::<RgbImage>(&back).unwrap(), image);
    }

    #[test]
    fn test_channel_extracts_plane() {
        let hsv = HsvImage::new(2, 1, vec![[10.0, 0.5, 0.25], [20.0, 0.75, 1.0]]).unwrap();
        assert_eq!(hsv.channel(HUE), vec![10.0, 20.0]);
        assert_eq!(hsv.channel(SATURATION), vec![0.5, 0.75]);
        assert_eq!(hsv.channel(VALUE), vec![0.25, 1.0]);
    }
}
