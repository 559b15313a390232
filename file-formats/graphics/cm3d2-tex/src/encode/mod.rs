/// Error types for encoding operations
pub mod error;
mod output;

pub use error::Error;
pub(crate) use output::parent_dir;
pub use output::{candidate_path, write_new, write_replace};

use crate::convert::texture_to_tex;
use crate::types::*;
use log::*;
use std::io::Write;
use std::path::Path;

/// Encode a texture into canonical container bytes
pub fn encode_tex(texture: &DecodedTexture) -> Result<Vec<u8>, Error> {
    let container = texture_to_tex(texture)?;
    let mut out = Vec::with_capacity(container.payload_len() + 64);
    write_tex(&container, &mut out)?;
    Ok(out)
}

/// Write a container to disk, replacing any existing file atomically
pub fn save_tex<Q>(container: &TexContainer, path: Q) -> Result<(), Error>
where
    Q: AsRef<Path>,
{
    let mut out = Vec::with_capacity(container.payload_len() + 64);
    write_tex(container, &mut out)?;
    write_replace(path.as_ref(), &out)
}

/// Serialize a container field by field. Fields are emitted according to
/// `header.version`, so any version can be produced; the rectangle count
/// is written even when the list is empty if the version carries it.
pub fn write_tex<W: Write>(container: &TexContainer, writer: &mut W) -> Result<(), Error> {
    let header = &container.header;

    write_string(writer, TEX_TAG)?;
    writer.write_all(&header.version.to_le_bytes())?;
    write_string(writer, &header.original_path)?;

    if header.has_uv_rects() {
        writer.write_all(&to_i32(header.uv_rects.len())?.to_le_bytes())?;
        for rect in &header.uv_rects {
            for value in rect.to_array() {
                writer.write_all(&value.to_le_bytes())?;
            }
        }
    } else if !header.uv_rects.is_empty() {
        warn!(
            "Version {} cannot store uv rects, dropping {}",
            header.version,
            header.uv_rects.len()
        );
    }

    if header.has_dimensions() {
        let width = i32::try_from(header.width)
            .map_err(|_| Error::DimensionsTooLarge(header.width, header.height))?;
        let height = i32::try_from(header.height)
            .map_err(|_| Error::DimensionsTooLarge(header.width, header.height))?;
        writer.write_all(&width.to_le_bytes())?;
        writer.write_all(&height.to_le_bytes())?;
        writer.write_all(&header.format.tag().to_le_bytes())?;
    }

    writer.write_all(&to_i32(container.payload.len())?.to_le_bytes())?;
    writer.write_all(&container.payload)?;
    Ok(())
}

/// Write a string with a 7-bit encoded length prefix
fn write_string<W: Write>(writer: &mut W, value: &str) -> Result<(), Error> {
    let mut len = value.len();
    to_i32(len)?;
    while len >= 0x80 {
        writer.write_all(&[(len as u8) | 0x80])?;
        len >>= 7;
    }
    writer.write_all(&[len as u8])?;
    writer.write_all(value.as_bytes())?;
    Ok(())
}

fn to_i32(len: usize) -> Result<i32, Error> {
    i32::try_from(len).map_err(|_| Error::LengthTooLarge(len))
}
