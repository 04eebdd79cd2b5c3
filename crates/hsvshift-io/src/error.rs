use hsvshift_core::CoreError;

/// Errors that can occur while loading or saving images.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),
    #[error("pixel buffer of {len} bytes does not fit {width}x{height}")]
    BufferSize { width: u32, height: u32, len: usize },
    #[error(transparent)]
    Core(#[from] CoreError),
}
