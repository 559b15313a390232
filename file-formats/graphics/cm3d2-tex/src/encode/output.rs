//! Output file placement.
//!
//! Bytes are always fully encoded before anything is written, then staged
//! in a temporary file in the target directory and moved into place, so a
//! failed conversion never leaves a partial file at the final path.

use super::error::Error;
use log::*;
use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Path tried on the given attempt when looking for a free output name:
/// `stem.ext` first, then `stem1.ext`, `stem2.ext`, ...
pub fn candidate_path(dir: &Path, stem: &OsStr, ext: &str, attempt: u32) -> PathBuf {
    let mut name = OsString::from(stem);
    if attempt > 0 {
        name.push(attempt.to_string());
    }
    name.push(".");
    name.push(ext);
    dir.join(name)
}

/// Write `bytes` under the first free candidate name in `dir` and return
/// the chosen path. Never overwrites an existing file. Claiming the name is
/// a single no-clobber rename, so concurrent writers into the same
/// directory cannot pick the same name.
pub fn write_new(dir: &Path, stem: &OsStr, ext: &str, bytes: &[u8]) -> Result<PathBuf, Error> {
    let mut staged = stage(dir, bytes)?;
    let mut attempt = 0u32;
    loop {
        let path = candidate_path(dir, stem, ext, attempt);
        match staged.persist_noclobber(&path) {
            Ok(_) => {
                debug!("Wrote {} bytes to {}", bytes.len(), path.display());
                return Ok(path);
            }
            Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
                trace!("{} is taken, trying the next name", path.display());
                staged = e.file;
            }
            Err(e) => return Err(Error::FileSystem(path, e.error)),
        }
        attempt = attempt.checked_add(1).ok_or_else(|| {
            Error::FileSystem(dir.to_owned(), io::Error::other("no free output name left"))
        })?;
    }
}

/// Write `bytes` to `path`, atomically replacing any existing file
pub fn write_replace(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    let dir = parent_dir(path);
    let staged = stage(dir, bytes)?;
    staged
        .persist(path)
        .map_err(|e| Error::FileSystem(path.to_owned(), e.error))?;
    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Directory a path lives in, `.` for bare file names
pub(crate) fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

fn stage(dir: &Path, bytes: &[u8]) -> Result<NamedTempFile, Error> {
    let mut staged =
        NamedTempFile::new_in(dir).map_err(|e| Error::FileSystem(dir.to_owned(), e))?;
    if let Err(e) = staged.write_all(bytes).and_then(|()| staged.flush()) {
        return Err(Error::FileSystem(staged.path().to_owned(), e));
    }
    Ok(staged)
}
