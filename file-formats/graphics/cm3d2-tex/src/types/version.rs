//! Container version numbers and the fields each one carries

/// Oldest known container version. No dimension or format fields in the
/// header, the size is recovered from the embedded PNG header instead.
pub const TEX_VERSION_LEGACY: i32 = 1000;
/// Adds explicit `width`, `height` and `format` header fields.
pub const TEX_VERSION_DIMENSIONS: i32 = 1010;
/// Adds the UV rectangle list.
pub const TEX_VERSION_UV_RECTS: i32 = 1011;

/// Version gating helpers for a raw container version number
pub trait TexVersion {
    /// The header carries a rectangle count and rectangle list
    fn has_uv_rects(&self) -> bool;
    /// The header carries `width`, `height` and `format`
    fn has_dimensions(&self) -> bool;
    /// Dimensions must be recovered from bytes 16..24 of the payload
    fn has_legacy_dimensions(&self) -> bool;
    /// The version is one of the three that were ever produced
    fn is_known(&self) -> bool;
}

impl TexVersion for i32 {
    fn has_uv_rects(&self) -> bool {
        *self >= TEX_VERSION_UV_RECTS
    }

    fn has_dimensions(&self) -> bool {
        *self >= TEX_VERSION_DIMENSIONS
    }

    fn has_legacy_dimensions(&self) -> bool {
        *self == TEX_VERSION_LEGACY
    }

    fn is_known(&self) -> bool {
        matches!(
            *self,
            TEX_VERSION_LEGACY | TEX_VERSION_DIMENSIONS | TEX_VERSION_UV_RECTS
        )
    }
}

/// Version the canonical writer emits for a texture with `rect_count` rectangles
pub fn canonical_version(rect_count: usize) -> i32 {
    if rect_count > 0 {
        TEX_VERSION_UV_RECTS
    } else {
        TEX_VERSION_DIMENSIONS
    }
}
