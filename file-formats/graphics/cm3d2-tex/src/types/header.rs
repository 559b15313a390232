use super::format::TextureFormat;
use super::rect::Rect;
use super::version::TexVersion;
use crate::debug;
use custom_debug::Debug;

/// Tag string every container starts with
pub const TEX_TAG: &str = "CM3D2_TEX";

/// Header fields of a container, as they are stored on disk. Fields that
/// the version does not carry hold their defaults (no rectangles,
/// `ARGB32`) and the dimensions that were derived for them.
#[derive(Debug, Clone, PartialEq)]
pub struct TexHeader {
    /// Raw container version
    pub version: i32,
    /// Source path recorded when the texture was first created
    pub original_path: String,
    /// UV rectangles, only stored from version 1011
    pub uv_rects: Vec<Rect>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Payload interpretation
    pub format: TextureFormat,
}

impl TexHeader {
    /// Whether the rectangle section is present on disk for this header
    pub fn has_uv_rects(&self) -> bool {
        self.version.has_uv_rects()
    }

    /// Whether the dimension and format fields are present on disk
    pub fn has_dimensions(&self) -> bool {
        self.version.has_dimensions()
    }
}

/// Parsed container: header plus the opaque payload whose meaning
/// depends on [`TexHeader::format`].
#[derive(Debug, Clone, PartialEq)]
pub struct TexContainer {
    /// Header fields
    pub header: TexHeader,
    /// Length-prefixed payload bytes
    #[debug(with = debug::trimmed_bytes_fmt)]
    pub payload: Vec<u8>,
}

impl TexContainer {
    /// Size of the payload in bytes
    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }
}
