/// Error types for container parsing operations
pub mod error;
mod header;
/// Native byte reading utilities
pub mod reader;

use crate::convert::tex_to_texture;
use crate::error::TexError;
use crate::types::*;
pub use error::Error;
use header::parse_header;
use log::*;
use reader::{ByteReader, Cursor, ParseResult, read_non_negative};
use std::path::Path;

/// Offsets of the big-endian width and height inside a version 1000
/// payload. They coincide with the IHDR fields of the embedded PNG.
const LEGACY_WIDTH_OFFSET: usize = 16;
const LEGACY_HEIGHT_OFFSET: usize = 20;

/// Read a container from the file system without decoding its pixels
pub fn load_tex<Q>(path: Q) -> Result<TexContainer, TexError>
where
    Q: AsRef<Path>,
{
    let path = path.as_ref();
    let input = std::fs::read(path).map_err(|e| TexError::from_io(path, e))?;
    Ok(parse_tex(&input)?)
}

/// Parse container structure from a byte slice. The payload is checked for
/// length but not decoded.
pub fn parse_tex(input: &[u8]) -> ParseResult<TexContainer> {
    let mut reader = Cursor::new(input);
    let mut header = parse_header(&mut reader).map_err(|e| e.with_context("header"))?;

    let declared =
        read_non_negative(&mut reader).map_err(|e| e.with_context("payload size field"))? as usize;
    let available = reader.remaining();
    if declared > available {
        return Err(Error::TruncatedPayload {
            declared,
            available,
        });
    }
    let payload = reader.read_slice(declared)?.to_vec();
    if reader.remaining() > 0 {
        debug!("Ignoring {} trailing bytes after payload", reader.remaining());
    }

    if header.version.has_legacy_dimensions() {
        let (width, height) = legacy_dimensions(&payload)?;
        header.width = width;
        header.height = height;
        debug!("Recovered legacy dimensions {width}x{height} from payload");
    }

    Ok(TexContainer { header, payload })
}

/// Parse a container and decode its pixels in one step
pub fn read_texture(input: &[u8]) -> Result<DecodedTexture, TexError> {
    let container = parse_tex(input)?;
    Ok(tex_to_texture(&container)?)
}

fn legacy_dimensions(payload: &[u8]) -> ParseResult<(u32, u32)> {
    let read_be = |offset: usize| -> ParseResult<u32> {
        let bytes = payload
            .get(offset..offset + 4)
            .ok_or(Error::TruncatedLegacyPayload(payload.len()))?;
        let value = i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        u32::try_from(value).map_err(|_| Error::NegativeValue(value))
    };
    Ok((read_be(LEGACY_WIDTH_OFFSET)?, read_be(LEGACY_HEIGHT_OFFSET)?))
}
