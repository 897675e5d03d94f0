//! Opens an image in the platform's default viewer.

use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Launches the default application for `path` and waits for the launcher to
/// return. Viewers that fork (most of them) return immediately.
pub fn open_file(path: &Path) -> io::Result<()> {
    if !path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("File not found: {}", path.display()),
        ));
    }

    open::that(path)
        .inspect(|_| info!(path = %path.display(), "opened in viewer"))
        .inspect_err(|e| warn!(path = %path.display(), error = %e, "failed to open viewer"))
}
