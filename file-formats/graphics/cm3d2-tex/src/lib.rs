#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Conversion between container payloads and pixels
pub mod convert;
/// `Debug` helpers
pub mod debug;
/// Container serialization and output placement
pub mod encode;
/// Crate-level error type and error categories
pub mod error;
/// Single-file conversion entry points
pub mod facade;
/// Container parsing
pub mod parser;
/// Container and texture types
pub mod types;
/// UV rectangle sidecar tables
pub mod uv;

pub use error::{ErrorKind, Result, TexError};
pub use facade::{Conversion, Converter, Direction, convert, is_tex_path, open, save};
pub use types::{DecodedTexture, Rect, TexContainer, TexHeader, TextureFormat};
