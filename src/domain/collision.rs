use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

/// Picks a free path for `file_name` inside `dest_dir`.
///
/// `dest_dir/file_name` is returned as is when nothing occupies it. Otherwise
/// `stem_1.ext`, `stem_2.ext`, ... are probed in order and the first free one
/// wins. Nothing is created on disk.
pub fn resolve_destination(dest_dir: &Path, file_name: &OsStr) -> PathBuf {
    let direct = dest_dir.join(file_name);
    if !is_taken(&direct) {
        return direct;
    }

    let as_path = Path::new(file_name);
    let stem = as_path.file_stem().unwrap_or(file_name);
    let extension = as_path.extension();

    let mut counter: u64 = 1;
    loop {
        let candidate = dest_dir.join(suffixed_name(stem, extension, counter));
        if !is_taken(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

fn suffixed_name(stem: &OsStr, extension: Option<&OsStr>, counter: u64) -> OsString {
    let mut name = stem.to_os_string();
    name.push(format!("_{}", counter));
    if let Some(ext) = extension {
        name.push(".");
        name.push(ext);
    }
    name
}

// A dangling symlink still occupies the name, so don't follow links here.
fn is_taken(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}
