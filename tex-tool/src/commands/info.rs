//! Container inspection

use anyhow::{Context, Result};
use cm3d2_tex::parser::load_tex;
use cm3d2_tex::types::TexVersion;
use std::path::Path;

use crate::utils::{format_bytes, format_text};

/// Print the header, UV rectangles and payload size of a container
pub fn execute(file: &Path) -> Result<()> {
    let container = load_tex(file)
        .with_context(|| format!("Failed to parse TEX file: {}", file.display()))?;
    let header = &container.header;

    println!("TEX File Information: {}", file.display());
    println!("=====================================");
    println!();
    println!("Version: {}", header.version);
    if !header.version.is_known() {
        println!("  (not a known version, read as the nearest older layout)");
    }
    println!("Original Path: {}", format_text(&header.original_path));
    println!("Dimensions: {}x{}", header.width, header.height);
    println!("Format: {}", header.format);
    println!(
        "Payload Size: {} ({} bytes)",
        format_bytes(container.payload_len() as u64),
        container.payload_len()
    );

    if header.has_uv_rects() {
        println!("\nUV Rectangles: {}", header.uv_rects.len());
        println!("--------------");
        for (i, rect) in header.uv_rects.iter().enumerate() {
            println!("  [{i}] {rect}");
        }
    }
    Ok(())
}
