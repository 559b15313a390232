use crate::error::ErrorKind;
use crate::types::TextureFormat;
use ::image::error::ImageError;
use thiserror::Error;

/// Errors that can occur while converting between payloads and pixels
#[derive(Debug, Error)]
pub enum Error {
    /// The block decompressor was asked to decode a format that is not DXT
    #[error("The texture format {0} is not a DXT format")]
    UnsupportedFormat(TextureFormat),
    /// The compressed payload is shorter than the block grid requires
    #[error("Compressed data for {width}x{height} needs {required} bytes, got {actual}")]
    TruncatedData {
        /// Image width in pixels
        width: u32,
        /// Image height in pixels
        height: u32,
        /// Bytes needed for the full block grid
        required: usize,
        /// Bytes available
        actual: usize,
    },
    /// The image library failed to decode or encode
    #[error("Image error: {0}")]
    Image(#[from] ImageError),
    /// Decompressed bytes did not match the image dimensions
    #[error("Failed to process bytes from DXT decompression")]
    RawConvertFail,
}

impl Error {
    /// Error category
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            Error::TruncatedData { .. } => ErrorKind::TruncatedData,
            Error::Image(ImageError::IoError(_)) => ErrorKind::IoFailure,
            Error::Image(_) | Error::RawConvertFail => ErrorKind::UnreadableImage,
        }
    }
}
