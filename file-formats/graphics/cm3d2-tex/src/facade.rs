//! Single-file conversion entry points.
//!
//! [`open`] and [`save`] pick the container or image path from the file
//! extension. [`convert`] chains them, choosing the opposite extension and
//! a free output name next to the input.

use crate::convert::{decode_image, encode_image};
use crate::encode::{self, encode_tex, parent_dir, write_new, write_replace};
use crate::error::{Result, TexError};
use crate::parser::read_texture;
use crate::types::*;
use crate::uv::{read_sidecar, sidecar_path, write_sidecar};
use ::image::ImageFormat;
use log::*;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Extension of container files, compared case-insensitively
pub const TEX_EXTENSION: &str = "tex";
/// Extension containers are converted to
pub const IMAGE_EXTENSION: &str = "png";

/// Whether `path` names a container by its extension
pub fn is_tex_path(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(TEX_EXTENSION))
}

/// Which way a conversion went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Container in, image out
    TexToImage,
    /// Image in, container out
    ImageToTex,
}

/// Files produced by one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// File that was read
    pub input: PathBuf,
    /// Primary file that was written
    pub output: PathBuf,
    /// UV sidecar that was written, if any
    pub sidecar: Option<PathBuf>,
    /// Conversion direction
    pub direction: Direction,
}

/// Decode a container or an image file.
///
/// Images come back with no original path and no UV rectangles.
pub fn open<Q: AsRef<Path>>(path: Q) -> Result<DecodedTexture> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(TexError::NotFound(path.to_owned()));
    }
    let input = std::fs::read(path).map_err(|e| TexError::from_io(path, e))?;

    if is_tex_path(path) {
        debug!("Opening {} as container", path.display());
        read_texture(&input)
    } else {
        debug!("Opening {} as image", path.display());
        Ok(DecodedTexture::new(decode_image(&input)?))
    }
}

/// Write a texture to `path`, replacing any existing file.
///
/// A `.tex` path gets the canonical container. When a sidecar already
/// exists next to `path` its rectangles are used instead of the texture's
/// own list. Any other path gets an image in the format its extension
/// names (PNG when unknown) plus a sidecar when the texture has rectangles.
pub fn save<Q: AsRef<Path>>(texture: &DecodedTexture, path: Q) -> Result<()> {
    let path = path.as_ref();
    if is_tex_path(path) {
        let mut texture = texture.clone();
        if let Some(rects) = read_sidecar(&sidecar_path(path))? {
            texture.set_uv_rects(rects);
        }
        let bytes = encode_tex(&texture)?;
        write_replace(path, &bytes)?;
    } else {
        let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
        let bytes = encode_image(texture.image(), format)?;
        write_replace(path, &bytes)?;
        if !texture.uv_rects().is_empty() {
            write_sidecar(&sidecar_path(path), texture.uv_rects())?;
        }
    }
    Ok(())
}

/// Converts files, placing outputs in a fixed directory or next to each input
#[derive(Debug, Clone, Default)]
pub struct Converter {
    output_dir: Option<PathBuf>,
}

impl Converter {
    /// Converter that writes next to each input
    pub fn new() -> Self {
        Self::default()
    }

    /// Write every output into `dir` instead
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Convert one file to the opposite kind.
    ///
    /// The output keeps the input's base name; when that name is taken a
    /// numeric suffix is appended (`foo1.tex`, `foo2.tex`, ...). Nothing is
    /// written until the input has been fully decoded and re-encoded.
    pub fn convert<Q: AsRef<Path>>(&self, input: Q) -> Result<Conversion> {
        let input = input.as_ref();
        let mut texture = open(input)?;

        let dir = match &self.output_dir {
            Some(dir) => dir.as_path(),
            None => parent_dir(input),
        };
        let stem = input
            .file_stem()
            .ok_or_else(|| encode::Error::FileNameInvalid(input.to_owned()))?;

        if is_tex_path(input) {
            let bytes = encode_image(texture.image(), ImageFormat::Png)?;
            let output = write_new(dir, stem, IMAGE_EXTENSION, &bytes)?;
            let sidecar = if texture.uv_rects().is_empty() {
                None
            } else {
                let sidecar = sidecar_path(&output);
                if let Err(e) = write_sidecar(&sidecar, texture.uv_rects()) {
                    // Never leave the image without its rectangles
                    if let Err(remove) = std::fs::remove_file(&output) {
                        warn!("Failed to remove {}: {remove}", output.display());
                    }
                    return Err(e.into());
                }
                Some(sidecar)
            };
            Ok(Conversion {
                input: input.to_owned(),
                output,
                sidecar,
                direction: Direction::TexToImage,
            })
        } else {
            // Rectangles exported by an earlier container -> image run sit
            // next to the image, possibly hand-edited since.
            if let Some(rects) = read_sidecar(&sidecar_path(input))? {
                texture.set_uv_rects(rects);
            }
            let bytes = encode_tex(&texture)?;
            let output = write_new(dir, stem, TEX_EXTENSION, &bytes)?;
            Ok(Conversion {
                input: input.to_owned(),
                output,
                sidecar: None,
                direction: Direction::ImageToTex,
            })
        }
    }
}

/// Convert one file, writing the output next to it
pub fn convert<Q: AsRef<Path>>(input: Q) -> Result<Conversion> {
    Converter::new().convert(input)
}
