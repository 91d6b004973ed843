//! Raster export and save-file requests.

use serde::{Deserialize, Serialize};

/// File name the persisted JSON state is saved under.
pub const SAVE_FILE_NAME: &str = "canvas-state.json";

/// MIME type of the persisted JSON state.
pub const SAVE_MIME_TYPE: &str = "application/json";

/// Raster formats the user can export to.
///
/// `Jpeg` and `Jpg` are distinct selector values in the reference UI and
/// produce different file extensions, so both are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Png,
    Jpeg,
    Jpg,
}

impl ExportFormat {
    /// The MIME type handed to the renderer for rasterization.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
            ExportFormat::Jpg => "image/jpg",
        }
    }

    /// File extension: the subtype of the MIME type.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpeg",
            ExportFormat::Jpg => "jpg",
        }
    }

    /// Parse a format selector value.
    pub fn from_selector(value: &str) -> Option<Self> {
        match value {
            "png" | "image/png" => Some(ExportFormat::Png),
            "jpeg" | "image/jpeg" => Some(ExportFormat::Jpeg),
            "jpg" | "image/jpg" => Some(ExportFormat::Jpg),
            _ => None,
        }
    }
}

/// What the external renderer needs to rasterize and download the canvas.
///
/// The actual rasterization is delegated: the renderer is handed the current
/// render projection plus this request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub mime_type: &'static str,
    pub file_name: String,
}

impl ExportRequest {
    pub fn new(format: ExportFormat) -> Self {
        Self {
            mime_type: format.mime_type(),
            file_name: format!("canvas.{}", format.extension()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(ExportRequest::new(ExportFormat::Png).file_name, "canvas.png");
        assert_eq!(ExportRequest::new(ExportFormat::Jpeg).file_name, "canvas.jpeg");
        assert_eq!(ExportRequest::new(ExportFormat::Jpg).file_name, "canvas.jpg");
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(ExportFormat::Png.mime_type(), "image/png");
        assert_eq!(ExportFormat::Jpeg.mime_type(), "image/jpeg");
        assert_eq!(ExportFormat::Jpg.mime_type(), "image/jpg");
    }

    #[test]
    fn test_selector_parsing() {
        assert_eq!(ExportFormat::from_selector("png"), Some(ExportFormat::Png));
        assert_eq!(
            ExportFormat::from_selector("image/jpeg"),
            Some(ExportFormat::Jpeg)
        );
        assert_eq!(ExportFormat::from_selector("gif"), None);
    }
}
