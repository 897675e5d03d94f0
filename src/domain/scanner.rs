use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Image extensions eligible for triage (compared case-insensitively).
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "webp", "gif", "bmp"];

/// Returns true when the path's extension is one of [`SUPPORTED_EXTENSIONS`].
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Lists the eligible images directly inside `dir_path`.
///
/// # Behavior
/// - Does not recurse into subdirectories
/// - Only regular files with a supported extension are returned
/// - Entries that cannot be inspected are skipped
/// - Results are sorted by path
///
/// Fails only when the directory itself cannot be listed.
pub fn scan_images(dir_path: &Path) -> io::Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry_result in fs::read_dir(dir_path)? {
        let entry = match entry_result {
            Ok(e) => e,
            Err(_) => continue,
        };

        let path = entry.path();

        if !is_supported_image(&path) {
            continue;
        }

        // Follows symlinks, so a link to an image counts as an image
        match fs::metadata(&path) {
            Ok(m) if m.is_file() => images.push(path),
            _ => continue,
        }
    }

    images.sort();
    Ok(images)
}
