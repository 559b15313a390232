use crate::error::ErrorKind;
use thiserror::Error;

/// Errors that the container parser can produce
#[derive(Debug, Error)]
pub enum Error {
    /// The leading tag string is missing or is not `CM3D2_TEX`
    #[error("Unexpected tag {0:?}. The file is not a CM3D2_TEX texture.")]
    WrongMagic(String),
    /// The `format` header field holds a value outside the known tags
    #[error("Unsupported texture format tag {0}")]
    UnsupportedFormat(i32),
    /// The declared payload is longer than the bytes left in the file
    #[error("Payload declares {declared} bytes but only {available} are present")]
    TruncatedPayload {
        /// Length from the `payloadSize` field
        declared: usize,
        /// Bytes remaining after the header
        available: usize,
    },
    /// A version 1000 payload is too short to hold the embedded dimensions
    #[error("Legacy payload of {0} bytes is too short to hold its dimensions")]
    TruncatedLegacyPayload(usize),
    /// A count or dimension field holds a negative value
    #[error("Field holds negative value {0}")]
    NegativeValue(i32),
    /// A length-prefixed string has a malformed length prefix
    #[error("String length prefix is longer than 5 bytes")]
    BadStringLength,
    /// A length-prefixed string is not valid UTF-8
    #[error("String is not valid UTF-8: {0}")]
    InvalidString(#[from] std::string::FromUtf8Error),
    /// Unexpected end of file while parsing
    #[error("Unexpected end of file")]
    UnexpectedEof,
    /// Parser error with context information
    #[error("Context: {0}. Error: {1}")]
    Context(String, Box<Self>),
}

impl Error {
    /// Add context information to an error
    pub fn with_context(self, context: &str) -> Self {
        Error::Context(context.to_owned(), Box::new(self))
    }

    /// Error category, looking through any context wrappers
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::WrongMagic(_) => ErrorKind::BadMagic,
            Error::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            Error::TruncatedPayload { .. }
            | Error::TruncatedLegacyPayload(_)
            | Error::UnexpectedEof => ErrorKind::TruncatedData,
            Error::NegativeValue(_) | Error::BadStringLength | Error::InvalidString(_) => {
                ErrorKind::InvalidHeader
            }
            Error::Context(_, inner) => inner.kind(),
        }
    }
}
