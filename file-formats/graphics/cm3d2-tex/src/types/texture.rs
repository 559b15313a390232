use super::rect::Rect;
use ::image::RgbaImage;

/// A texture decoded to canonical RGBA pixels, top row first.
///
/// This is the only value passed between the read path and the write path.
/// It owns its pixel buffer outright, nothing else holds onto it.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedTexture {
    image: RgbaImage,
    original_path: String,
    uv_rects: Vec<Rect>,
}

impl DecodedTexture {
    /// Wrap decoded pixels with no container metadata
    pub fn new(image: RgbaImage) -> Self {
        Self {
            image,
            original_path: String::new(),
            uv_rects: Vec::new(),
        }
    }

    /// Set the recorded creation-time path
    pub fn with_original_path(mut self, original_path: impl Into<String>) -> Self {
        self.original_path = original_path.into();
        self
    }

    /// Set the UV rectangle list
    pub fn with_uv_rects(mut self, uv_rects: Vec<Rect>) -> Self {
        self.uv_rects = uv_rects;
        self
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel buffer
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Raw RGBA bytes, 4 per pixel
    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Creation-time path, empty when none was recorded
    pub fn original_path(&self) -> &str {
        &self.original_path
    }

    /// UV rectangles in engine order
    pub fn uv_rects(&self) -> &[Rect] {
        &self.uv_rects
    }

    /// Replace the UV rectangle list
    pub fn set_uv_rects(&mut self, uv_rects: Vec<Rect>) {
        self.uv_rects = uv_rects;
    }
}
