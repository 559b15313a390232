use std::fmt;

/// Pixel format tag stored in the container header
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextureFormat {
    /// 32-bit color with alpha, payload is an image-library stream (PNG)
    Argb32,
    /// 24-bit color, payload is an image-library stream
    Rgb24,
    /// DXT1 block compression (BC1)
    Dxt1,
    /// DXT5 block compression (BC3)
    Dxt5,
}

impl TextureFormat {
    /// Numeric tag written to the `format` header field
    pub fn tag(&self) -> i32 {
        match self {
            TextureFormat::Argb32 => 5,
            TextureFormat::Rgb24 => 3,
            TextureFormat::Dxt1 => 10,
            TextureFormat::Dxt5 => 12,
        }
    }

    /// Returns the block compression variant, if the format is block compressed
    pub fn dxtn(&self) -> Option<DxtnFormat> {
        match self {
            TextureFormat::Dxt1 => Some(DxtnFormat::Dxt1),
            TextureFormat::Dxt5 => Some(DxtnFormat::Dxt5),
            TextureFormat::Argb32 | TextureFormat::Rgb24 => None,
        }
    }
}

impl TryFrom<i32> for TextureFormat {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(TextureFormat::Argb32),
            3 => Ok(TextureFormat::Rgb24),
            10 => Ok(TextureFormat::Dxt1),
            12 => Ok(TextureFormat::Dxt5),
            other => Err(other),
        }
    }
}

impl fmt::Display for TextureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextureFormat::Argb32 => "ARGB32",
            TextureFormat::Rgb24 => "RGB24",
            TextureFormat::Dxt1 => "DXT1",
            TextureFormat::Dxt5 => "DXT5",
        };
        write!(f, "{name} ({})", self.tag())
    }
}

/// Which block compression algorithm the payload uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DxtnFormat {
    /// DXT1 compression (BC1)
    Dxt1,
    /// DXT5 compression (BC3)
    Dxt5,
}

impl From<DxtnFormat> for texpresso::Format {
    fn from(v: DxtnFormat) -> texpresso::Format {
        match v {
            DxtnFormat::Dxt1 => texpresso::Format::Bc1,
            DxtnFormat::Dxt5 => texpresso::Format::Bc3,
        }
    }
}

impl From<DxtnFormat> for TextureFormat {
    fn from(v: DxtnFormat) -> TextureFormat {
        match v {
            DxtnFormat::Dxt1 => TextureFormat::Dxt1,
            DxtnFormat::Dxt5 => TextureFormat::Dxt5,
        }
    }
}

impl DxtnFormat {
    /// Returns the block size in bytes for this DXT format
    pub fn block_size(&self) -> usize {
        match self {
            DxtnFormat::Dxt1 => 8,
            DxtnFormat::Dxt5 => 16,
        }
    }

    /// Number of bytes needed to hold a `width` x `height` image,
    /// counting partially covered edge blocks as whole blocks.
    pub fn compressed_size(&self, width: u32, height: u32) -> usize {
        texpresso::Format::from(*self).compressed_size(width as usize, height as usize)
    }
}
