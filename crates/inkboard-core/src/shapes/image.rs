//! Background image imported onto the canvas.

use kurbo::Rect;

/// Default display edge for an imported image (half the canvas width).
pub(crate) const DEFAULT_IMAGE_EDGE: f64 = 425.0;

/// Raster format of imported image bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    WebP,
}

impl ImageFormat {
    /// Get the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::WebP => "image/webp",
        }
    }

    /// Detect format from magic bytes.
    pub fn from_magic_bytes(data: &[u8]) -> Option<Self> {
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Some(ImageFormat::Png);
        }
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(ImageFormat::Jpeg);
        }
        if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
            return Some(ImageFormat::WebP);
        }
        None
    }
}

/// The single optional background image.
///
/// At most one exists at a time; importing a new one replaces the old. The
/// image is placed at a fixed default position and is deliberately excluded
/// from persisted state, matching the reference behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundImage {
    /// Raw image bytes as read from the chosen file.
    pub data: Vec<u8>,
    /// Detected raster format.
    pub format: ImageFormat,
    /// Display bounds on the canvas.
    pub bounds: Rect,
}

impl BackgroundImage {
    /// Create a background image at the fixed default placement.
    pub fn new(data: Vec<u8>, format: ImageFormat) -> Self {
        Self {
            data,
            format,
            bounds: Rect::new(0.0, 0.0, DEFAULT_IMAGE_EDGE, DEFAULT_IMAGE_EDGE),
        }
    }
}
