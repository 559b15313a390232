use super::error::Error;
use crate::types::*;
use ::image::RgbaImage;
use log::*;

/// Decompress a DXT1 or DXT5 payload into 32-bit pixels.
///
/// The returned buffer holds `width * height` pixels of 4 bytes, already
/// fixed up for the container conventions: red and blue are swapped, so
/// each pixel reads B, G, R, A (the engine's ARGB32 word in little-endian
/// memory order), and rows are reflected so row 0 is the top of the image.
///
/// Every call allocates a fresh buffer.
pub fn decompress(
    blocks: &[u8],
    width: u32,
    height: u32,
    format: TextureFormat,
) -> Result<Vec<u8>, Error> {
    let dxtn = format.dxtn().ok_or(Error::UnsupportedFormat(format))?;
    let required = dxtn.compressed_size(width, height);
    if blocks.len() < required {
        return Err(Error::TruncatedData {
            width,
            height,
            required,
            actual: blocks.len(),
        });
    }

    let width = width as usize;
    let height = height as usize;
    let mut output = vec![0; width * height * 4];
    let decoder: texpresso::Format = dxtn.into();
    decoder.decompress(&blocks[..required], width, height, &mut output);
    trace!("Decompressed {required} bytes of {format} into {width}x{height}");

    swap_red_blue(&mut output);
    flip_rows(&mut output, width * 4);
    Ok(output)
}

/// Decode a block compressed payload straight into an RGBA image
pub fn dxtn_to_image(
    blocks: &[u8],
    width: u32,
    height: u32,
    format: DxtnFormat,
) -> Result<RgbaImage, Error> {
    let mut pixels = decompress(blocks, width, height, format.into())?;
    // B, G, R, A back to the image library's R, G, B, A
    swap_red_blue(&mut pixels);
    RgbaImage::from_raw(width, height, pixels).ok_or(Error::RawConvertFail)
}

fn swap_red_blue(pixels: &mut [u8]) {
    for pixel in pixels.chunks_exact_mut(4) {
        pixel.swap(0, 2);
    }
}

fn flip_rows(pixels: &mut [u8], stride: usize) {
    if stride == 0 {
        return;
    }
    let rows = pixels.len() / stride;
    for top in 0..rows / 2 {
        let bottom = rows - 1 - top;
        let (upper, lower) = pixels.split_at_mut(bottom * stride);
        upper[top * stride..(top + 1) * stride].swap_with_slice(&mut lower[..stride]);
    }
}
