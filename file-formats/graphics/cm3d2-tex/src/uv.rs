//! UV rectangle sidecar tables.
//!
//! A sidecar sits next to a primary output as `<base>.uv.csv`: one
//! rectangle per line, `x;y;w;h`, period decimals, no header line. Reading
//! is lenient. Rows that do not hold exactly four numbers are skipped.

use crate::encode::{self, write_replace};
use crate::error::TexError;
use crate::types::Rect;
use log::*;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// Suffix that replaces the primary file's extension
pub const SIDECAR_SUFFIX: &str = ".uv.csv";

/// Sidecar location for a primary file: same directory and base name
pub fn sidecar_path(primary: &Path) -> PathBuf {
    let mut name = primary
        .file_stem()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(SIDECAR_SUFFIX);
    primary.with_file_name(name)
}

/// Parse a sidecar table, skipping blank and malformed rows. Each line is
/// judged on its own: quotes carry no meaning and a row that is not UTF-8
/// is dropped without affecting its neighbours.
pub fn parse_uv_table<T: AsRef<[u8]>>(data: T) -> Vec<Rect> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(data.as_ref());

    let mut rects = Vec::new();
    for (line, record) in reader.byte_records().enumerate() {
        let mut record = match record.map(csv::StringRecord::from_byte_record) {
            Ok(Ok(record)) => record,
            Ok(Err(e)) => {
                debug!("Skipping non UTF-8 uv row {}: {}", line + 1, e.utf8_error());
                continue;
            }
            Err(e) => {
                debug!("Skipping unreadable uv row {}: {e}", line + 1);
                continue;
            }
        };
        record.trim();
        match parse_row(&record) {
            Some(rect) => rects.push(rect),
            None => debug!("Skipping malformed uv row {}: {:?}", line + 1, record),
        }
    }
    rects
}

fn parse_row(record: &csv::StringRecord) -> Option<Rect> {
    let fields: Vec<&str> = record.iter().filter(|f| !f.is_empty()).collect();
    if fields.len() != 4 {
        return None;
    }
    let mut values = [0f32; 4];
    for (value, field) in values.iter_mut().zip(fields) {
        *value = field.parse().ok()?;
    }
    let rect = Rect::from(values);
    rect.is_finite().then_some(rect)
}

/// Render rectangles as sidecar text
pub fn format_uv_table(rects: &[Rect]) -> Result<String, encode::Error> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for rect in rects {
        writer
            .write_record(rect.to_array().iter().map(f32::to_string))
            .map_err(|e| encode::Error::Io(e.into()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| encode::Error::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| encode::Error::Io(io::Error::other(e)))
}

/// Read the sidecar at `path`. Returns `None` when no sidecar exists.
pub fn read_sidecar(path: &Path) -> Result<Option<Vec<Rect>>, TexError> {
    match std::fs::read(path) {
        Ok(data) => {
            let rects = parse_uv_table(&data);
            debug!("Read {} uv rects from {}", rects.len(), path.display());
            Ok(Some(rects))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(TexError::FileSystem(path.to_owned(), e)),
    }
}

/// Write rectangles to the sidecar at `path`, replacing it atomically
pub fn write_sidecar(path: &Path, rects: &[Rect]) -> Result<(), encode::Error> {
    let text = format_uv_table(rects)?;
    write_replace(path, text.as_bytes())
}
