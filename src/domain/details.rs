use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// What the UI shows about the current image. Only the header is read to get
/// the pixel size; the image is never decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDetails {
    pub path: PathBuf,
    pub name: String,
    pub size: Option<u64>,
    pub modified_date: Option<DateTime<Utc>>,
    pub dimensions: Option<(u32, u32)>,
    /// Set when the image header could not be read.
    pub load_error: Option<String>,
}

impl ImageDetails {
    pub fn probe(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unknown".to_string());

        let metadata = fs::metadata(path).ok();
        let size = metadata.as_ref().map(|m| m.len());
        let modified_date = metadata
            .as_ref()
            .and_then(|m| m.modified().ok())
            .map(DateTime::<Utc>::from);

        let (dimensions, load_error) = match image::image_dimensions(path) {
            Ok(dims) => (Some(dims), None),
            Err(e) => (None, Some(e.to_string())),
        };

        Self {
            path: path.to_path_buf(),
            name,
            size,
            modified_date,
            dimensions,
            load_error,
        }
    }

    pub fn is_loadable(&self) -> bool {
        self.load_error.is_none()
    }
}
