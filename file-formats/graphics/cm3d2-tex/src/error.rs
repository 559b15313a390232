//! Error handling for texture conversion

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Category of a failure, independent of the layer that raised it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input path does not exist or is not a file
    NotFound,
    /// The tag string does not match `CM3D2_TEX`
    BadMagic,
    /// A format tag outside the known set, or a non-DXT format given to
    /// the block decompressor
    UnsupportedFormat,
    /// A declared length runs past the available bytes
    TruncatedData,
    /// A header value that cannot be represented (negative count,
    /// malformed string, oversized dimensions)
    InvalidHeader,
    /// The image library cannot decode or encode the pixels
    UnreadableImage,
    /// Creating, writing or renaming a file failed
    IoFailure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorKind::NotFound => "not found",
            ErrorKind::BadMagic => "bad magic",
            ErrorKind::UnsupportedFormat => "unsupported format",
            ErrorKind::TruncatedData => "truncated data",
            ErrorKind::InvalidHeader => "invalid header",
            ErrorKind::UnreadableImage => "unreadable image",
            ErrorKind::IoFailure => "i/o failure",
        };
        f.write_str(text)
    }
}

/// Errors raised by the conversion entry points
#[derive(Debug, Error)]
pub enum TexError {
    /// The input path is missing
    #[error("The path {0} is not a valid file")]
    NotFound(PathBuf),

    /// Container structure is invalid
    #[error("Invalid container: {0}")]
    Parse(#[from] crate::parser::Error),

    /// Pixel payload could not be decoded
    #[error("Cannot decode pixels: {0}")]
    Convert(#[from] crate::convert::Error),

    /// Output could not be encoded or written
    #[error("Cannot write output: {0}")]
    Encode(#[from] crate::encode::Error),

    /// Reading an input file failed
    #[error("File system error with file {0}, due: {1}")]
    FileSystem(PathBuf, io::Error),
}

impl TexError {
    /// Wrap a read failure, reporting a missing file as [`TexError::NotFound`]
    pub fn from_io(path: &Path, error: io::Error) -> Self {
        if error.kind() == io::ErrorKind::NotFound {
            TexError::NotFound(path.to_owned())
        } else {
            TexError::FileSystem(path.to_owned(), error)
        }
    }

    /// Error category
    pub fn kind(&self) -> ErrorKind {
        match self {
            TexError::NotFound(_) => ErrorKind::NotFound,
            TexError::Parse(e) => e.kind(),
            TexError::Convert(e) => e.kind(),
            TexError::Encode(e) => e.kind(),
            TexError::FileSystem(..) => ErrorKind::IoFailure,
        }
    }
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, TexError>;
