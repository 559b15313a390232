/// Pixel format tags
pub mod format;
/// Container header and parsed container
pub mod header;
/// UV rectangle
pub mod rect;
/// Decoded in-memory texture
pub mod texture;
/// Version numbers and gating
pub mod version;

pub use format::*;
pub use header::*;
pub use rect::*;
pub use texture::*;
pub use version::*;
