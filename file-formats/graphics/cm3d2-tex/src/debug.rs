//! `Debug` helpers for byte buffers that would otherwise flood log output

use std::fmt;

const FIRST_N_BYTES: usize = 8;

/// Formats a byte buffer as its first few bytes plus a count of the rest.
/// Used with `custom_debug` on payload fields.
pub fn trimmed_bytes_fmt<T: AsRef<[u8]>>(bytes: &T, f: &mut fmt::Formatter) -> fmt::Result {
    let bytes = bytes.as_ref();
    let shown = &bytes[..bytes.len().min(FIRST_N_BYTES)];
    let remaining = bytes.len() - shown.len();

    if remaining == 0 {
        write!(f, "{:02x?}", shown)
    } else {
        write!(f, "{:02x?} + {} bytes", shown, remaining)
    }
}
