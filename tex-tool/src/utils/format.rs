//! Formatting utilities

use humansize::{DECIMAL, format_size};

/// Format file size in human-readable format
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, DECIMAL)
}

/// Format an optional text field, with a placeholder when empty
pub fn format_text(value: &str) -> &str {
    if value.is_empty() { "(none)" } else { value }
}
