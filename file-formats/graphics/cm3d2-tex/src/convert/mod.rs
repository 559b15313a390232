mod dxtn;
/// Error types for pixel conversion
pub mod error;

pub use dxtn::{decompress, dxtn_to_image};
pub use error::Error;

use crate::types::*;
use ::image::{DynamicImage, ImageFormat, RgbaImage};
use log::*;
use std::io::Cursor;

/// How a container payload turns into pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelSource {
    /// Payload is a stream the image library can decode (PNG in practice)
    Generic,
    /// Payload is a DXT block grid
    BlockCompressed(DxtnFormat),
}

impl From<TextureFormat> for PixelSource {
    fn from(format: TextureFormat) -> Self {
        match format.dxtn() {
            Some(dxtn) => PixelSource::BlockCompressed(dxtn),
            None => PixelSource::Generic,
        }
    }
}

impl PixelSource {
    /// Decode `payload` into top-down RGBA pixels. `width` and `height` are
    /// only used by block compressed payloads; generic payloads carry their
    /// own dimensions.
    pub fn decode(&self, payload: &[u8], width: u32, height: u32) -> Result<RgbaImage, Error> {
        match self {
            PixelSource::Generic => decode_image(payload),
            PixelSource::BlockCompressed(format) => dxtn_to_image(payload, width, height, *format),
        }
    }
}

/// Decode the pixels of a parsed container
pub fn tex_to_texture(container: &TexContainer) -> Result<DecodedTexture, Error> {
    let header = &container.header;
    let source = PixelSource::from(header.format);
    debug!("Decoding {} payload with {:?}", header.format, source);

    let image = source.decode(&container.payload, header.width, header.height)?;
    if source == PixelSource::Generic
        && header.width != 0
        && (image.width(), image.height()) != (header.width, header.height)
    {
        warn!(
            "Header says {}x{} but payload decodes to {}x{}, using the payload size",
            header.width,
            header.height,
            image.width(),
            image.height()
        );
    }

    Ok(DecodedTexture::new(image)
        .with_original_path(header.original_path.clone())
        .with_uv_rects(header.uv_rects.clone()))
}

/// Build the canonical container for a texture: current version, `ARGB32`
/// format and a PNG payload. Dimensions come from the pixel buffer.
pub fn texture_to_tex(texture: &DecodedTexture) -> Result<TexContainer, Error> {
    let payload = encode_png(texture.image())?;
    let uv_rects = texture.uv_rects().to_vec();

    Ok(TexContainer {
        header: TexHeader {
            version: canonical_version(uv_rects.len()),
            original_path: texture.original_path().to_owned(),
            uv_rects,
            width: texture.width(),
            height: texture.height(),
            format: TextureFormat::Argb32,
        },
        payload,
    })
}

/// Decode any raster format the image library recognises
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage, Error> {
    Ok(::image::load_from_memory(bytes)?.into_rgba8())
}

/// Encode pixels as a PNG stream
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, Error> {
    encode_image(image, ImageFormat::Png)
}

/// Encode pixels in the given image format. Formats without an alpha
/// channel receive the color channels only.
pub fn encode_image(image: &RgbaImage, format: ImageFormat) -> Result<Vec<u8>, Error> {
    let mut out = Cursor::new(Vec::new());
    match format {
        ImageFormat::Jpeg => {
            DynamicImage::ImageRgba8(image.clone())
                .into_rgb8()
                .write_to(&mut out, format)?;
        }
        _ => image.write_to(&mut out, format)?,
    }
    Ok(out.into_inner())
}
