use super::error::Error;
use super::reader::{ByteReader, ParseResult, read_non_negative};
use crate::types::*;
use log::*;

/// Parse every header field up to, not including, the payload size.
///
/// For versions below 1010 the dimensions are left at zero and the format
/// defaults to `ARGB32`; the caller fills in legacy dimensions once the
/// payload is known.
pub fn parse_header(reader: &mut impl ByteReader) -> ParseResult<TexHeader> {
    parse_magic(reader)?;

    let version = reader
        .read_i32_le()
        .map_err(|e| e.with_context("version field"))?;
    if !version.is_known() {
        warn!("Unknown container version {version}, reading it with the closest older layout");
    }

    let original_path = reader
        .read_string()
        .map_err(|e| e.with_context("original path field"))?;

    let uv_rects = if version.has_uv_rects() {
        parse_uv_rects(reader).map_err(|e| e.with_context("uv rects"))?
    } else {
        Vec::new()
    };

    let (width, height, format) = if version.has_dimensions() {
        let width = read_non_negative(reader).map_err(|e| e.with_context("width field"))?;
        let height = read_non_negative(reader).map_err(|e| e.with_context("height field"))?;
        let format_field = reader
            .read_i32_le()
            .map_err(|e| e.with_context("format field"))?;
        let format = TextureFormat::try_from(format_field).map_err(|tag| {
            error!("Unexpected value for format {tag}");
            Error::UnsupportedFormat(tag)
        })?;
        (width, height, format)
    } else {
        (0, 0, TextureFormat::Argb32)
    };

    debug!(
        "Parsed header: version {version}, {width}x{height}, {format}, {} uv rects",
        uv_rects.len()
    );

    Ok(TexHeader {
        version,
        original_path,
        uv_rects,
        width,
        height,
        format,
    })
}

fn parse_magic(reader: &mut impl ByteReader) -> ParseResult<()> {
    // Anything that cannot be read as the tag string means this is not a container
    let tag = reader
        .read_string()
        .map_err(|e| Error::WrongMagic(format!("<unreadable: {e}>")))?;
    if tag != TEX_TAG {
        return Err(Error::WrongMagic(tag));
    }
    Ok(())
}

fn parse_uv_rects(reader: &mut impl ByteReader) -> ParseResult<Vec<Rect>> {
    let count = read_non_negative(reader).map_err(|e| e.with_context("rect count field"))?;
    // 16 bytes per rectangle
    if (count as usize).saturating_mul(16) > reader.remaining() {
        return Err(Error::UnexpectedEof);
    }

    let mut rects = Vec::with_capacity(count as usize);
    for i in 0..count {
        trace!("Parsing uv rect {}/{}", i + 1, count);
        rects.push(Rect {
            x: reader.read_f32_le()?,
            y: reader.read_f32_le()?,
            w: reader.read_f32_le()?,
            h: reader.read_f32_le()?,
        });
    }
    Ok(rects)
}
