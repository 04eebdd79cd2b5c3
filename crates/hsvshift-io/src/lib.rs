//! Image file I/O for hsvshift.
//!
//! Loads any format the `image` crate decodes into an 8-bit [`RgbImage`] and
//! writes results back out. Alpha is dropped on load; the core works on RGB.

mod error;

use std::path::Path;

use hsvshift_core::RgbImage;

pub use error::IoError;

/// Load an image from disk as 8-bit RGB.
///
/// Higher bit depths are reduced to 8 bits and alpha is discarded.
pub fn load_image(path: &Path) -> Result<RgbImage, IoError> {
    let img = image::open(path).map_err(IoError::Decode)?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    tracing::debug!(
        "loaded {} ({width}x{height}, source {:?})",
        path.display(),
        img.color()
    );
    Ok(RgbImage::from_raw(width, height, rgb.into_raw())?)
}

/// Save an RGB image. The format is picked from the file extension.
pub fn save_image(path: &Path, image: &RgbImage) -> Result<(), IoError> {
    let buffer = image::RgbImage::from_raw(image.width, image.height, image.as_bytes().to_vec())
        .ok_or(IoError::BufferSize {
            width: image.width,
            height: image.height,
            len: image.as_bytes().len(),
        })?;
    buffer.save(path).map_err(IoError::Encode)?;
    tracing::info!("saved {} ({image})", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file() {
        let err = load_image(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, IoError::Decode(_)));
    }

    #[test]
    fn test_save_rejects_inconsistent_buffer() {
        let image = RgbImage {
            width: 4,
            height: 4,
            pixels: vec![[0, 0, 0]; 3],
        };
        let dir = tempfile::tempdir().unwrap();
        let err = save_image(&dir.path().join("bad.png"), &image).unwrap_err();
        assert!(matches!(err, IoError::BufferSize { .. }));
    }
}
