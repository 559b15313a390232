use crate::error::ErrorKind;
use thiserror::Error;

/// Errors that can occur during container encoding and output writing
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel conversion for the payload failed
    #[error("Payload conversion failed: {0}")]
    Convert(#[from] crate::convert::Error),
    /// A dimension does not fit the signed 32-bit header field
    #[error("Dimensions {0}x{1} do not fit the container header")]
    DimensionsTooLarge(u32, u32),
    /// A count or length does not fit its 32-bit field
    #[error("Length {0} does not fit the container header")]
    LengthTooLarge(usize),
    /// Writing to the output stream failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Filesystem operation failed
    #[error("Failed to proceed {0}, due: {1}")]
    FileSystem(std::path::PathBuf, std::io::Error),
    /// The output path has no usable file name
    #[error("Name of output file is malformed: {0}")]
    FileNameInvalid(std::path::PathBuf),
}

impl Error {
    /// Error category
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Convert(e) => e.kind(),
            Error::DimensionsTooLarge(..) | Error::LengthTooLarge(_) => ErrorKind::InvalidHeader,
            Error::Io(_) | Error::FileSystem(..) | Error::FileNameInvalid(_) => {
                ErrorKind::IoFailure
            }
        }
    }
}
