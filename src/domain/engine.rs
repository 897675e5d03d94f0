use super::collision::resolve_destination;
use super::pending::PendingImages;
use super::scanner::scan_images;
use super::Action;
use crate::error::{PswpError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const KEPT_DIR_NAME: &str = "kept";
pub const DELETED_DIR_NAME: &str = "deleted";

/// Moves images between the origin directory and its `kept/` and `deleted/`
/// subdirectories, tracking which images are still pending.
///
/// The engine assumes it is the only writer to its three directories for as
/// long as it lives. Every move is a single `rename`: it either happens
/// completely or not at all, and the pending list only changes on success.
#[derive(Debug)]
pub struct TriageEngine {
    origin_dir: PathBuf,
    kept_dir: PathBuf,
    deleted_dir: PathBuf,
    pending: PendingImages,
    total_images: usize,
}

impl TriageEngine {
    /// Prepares `origin` for triage: creates `kept/` and `deleted/` if needed
    /// and scans the eligible images.
    ///
    /// Any failure here is fatal; no engine is produced.
    pub fn new(origin: impl AsRef<Path>) -> Result<Self> {
        let origin = origin.as_ref();
        let origin_dir = std::path::absolute(origin).map_err(|source| PswpError::ScanFailed {
            path: origin.to_path_buf(),
            source,
        })?;

        match fs::metadata(&origin_dir) {
            Ok(metadata) if metadata.is_dir() => {}
            Ok(_) => return Err(PswpError::NotADirectory { path: origin_dir }),
            Err(source) => {
                return Err(PswpError::ScanFailed {
                    path: origin_dir,
                    source,
                })
            }
        }

        let kept_dir = origin_dir.join(KEPT_DIR_NAME);
        let deleted_dir = origin_dir.join(DELETED_DIR_NAME);
        for dir in [&kept_dir, &deleted_dir] {
            fs::create_dir_all(dir).map_err(|source| PswpError::CreateDirFailed {
                path: dir.clone(),
                source,
            })?;
        }

        let images = scan_images(&origin_dir).map_err(|source| PswpError::ScanFailed {
            path: origin_dir.clone(),
            source,
        })?;
        let pending = PendingImages::new(images);
        let total_images = pending.len();

        info!(origin = %origin_dir.display(), images = total_images, "scanned directory");

        Ok(Self {
            origin_dir,
            kept_dir,
            deleted_dir,
            pending,
            total_images,
        })
    }

    pub fn origin_dir(&self) -> &Path {
        &self.origin_dir
    }

    pub fn kept_dir(&self) -> &Path {
        &self.kept_dir
    }

    pub fn deleted_dir(&self) -> &Path {
        &self.deleted_dir
    }

    /// Destination directory for a classification.
    pub fn directory_for(&self, action: Action) -> &Path {
        match action {
            Action::Keep => &self.kept_dir,
            Action::Delete => &self.deleted_dir,
        }
    }

    /// Number of eligible images found at construction. Never changes.
    pub fn total_images(&self) -> usize {
        self.total_images
    }

    pub fn remaining_count(&self) -> usize {
        self.pending.len()
    }

    pub fn processed_count(&self) -> usize {
        self.total_images.saturating_sub(self.pending.len())
    }

    pub fn pending(&self) -> &PendingImages {
        &self.pending
    }

    /// Pending image at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.pending.get(index)
    }

    /// Current position of a pending image.
    pub fn index_of(&self, path: &Path) -> Option<usize> {
        self.pending.index_of(path)
    }

    pub fn keep(&mut self, path: &Path) -> Result<PathBuf> {
        self.classify(path, Action::Keep)
    }

    pub fn delete(&mut self, path: &Path) -> Result<PathBuf> {
        self.classify(path, Action::Delete)
    }

    /// Moves a pending image into the directory for `action` and returns
    /// where it landed. Paths that are not pending are refused untouched.
    pub fn classify(&mut self, path: &Path, action: Action) -> Result<PathBuf> {
        if !self.pending.contains(path) {
            warn!(path = %path.display(), %action, "refusing to move image that is not pending");
            return Err(PswpError::NotPending {
                path: path.to_path_buf(),
            });
        }

        let dest_dir = self.directory_for(action).to_path_buf();
        let destination = self.move_to(path, &dest_dir)?;
        self.pending.remove(path);

        info!(
            from = %path.display(),
            to = %destination.display(),
            %action,
            "classified image"
        );
        Ok(destination)
    }

    /// Moves a previously classified image back into the origin directory and
    /// returns its new pending path.
    ///
    /// `moved_path` must sit directly inside `kept/` or `deleted/` and still
    /// exist; otherwise the filesystem is not touched.
    pub fn restore(&mut self, moved_path: &Path) -> Result<PathBuf> {
        let parent = moved_path.parent();
        if parent != Some(self.kept_dir.as_path()) && parent != Some(self.deleted_dir.as_path())
        {
            warn!(path = %moved_path.display(), "undo rejected: not in kept or deleted");
            return Err(PswpError::OutsideTriageDirs {
                path: moved_path.to_path_buf(),
            });
        }

        if fs::symlink_metadata(moved_path).is_err() {
            warn!(path = %moved_path.display(), "undo rejected: file missing");
            return Err(PswpError::MissingFile {
                path: moved_path.to_path_buf(),
            });
        }

        let origin_dir = self.origin_dir.clone();
        let restored = self.move_to(moved_path, &origin_dir)?;
        self.pending.insert(restored.clone());

        info!(
            from = %moved_path.display(),
            to = %restored.display(),
            "restored image"
        );
        Ok(restored)
    }

    fn move_to(&self, path: &Path, dest_dir: &Path) -> Result<PathBuf> {
        let file_name = path.file_name().ok_or_else(|| PswpError::InvalidFileName {
            path: path.to_path_buf(),
        })?;

        let destination = resolve_destination(dest_dir, file_name);
        if destination.file_name() != Some(file_name) {
            debug!(
                wanted = %dest_dir.join(file_name).display(),
                chosen = %destination.display(),
                "name collision resolved"
            );
        }

        fs::rename(path, &destination).map_err(|source| {
            warn!(
                from = %path.display(),
                to = %destination.display(),
                error = %source,
                "move failed"
            );
            PswpError::MoveFailed {
                from: path.to_path_buf(),
                to: destination.clone(),
                source,
            }
        })?;

        Ok(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;
    use tempfile::TempDir;

    fn setup(names: &[&str]) -> (TempDir, TriageEngine) {
        let temp_dir = TempDir::new().unwrap();
        for name in names {
            fs::write(temp_dir.path().join(name), name.as_bytes()).unwrap();
        }
        let engine = TriageEngine::new(temp_dir.path()).unwrap();
        (temp_dir, engine)
    }

    mod construction_tests {
        use super::*;

        #[test]
        fn test_new_creates_subdirectories() {
            let (temp_dir, engine) = setup(&["a.png"]);

            assert!(temp_dir.path().join("kept").is_dir());
            assert!(temp_dir.path().join("deleted").is_dir());
            assert_eq!(engine.kept_dir(), temp_dir.path().join("kept"));
            assert_eq!(engine.deleted_dir(), temp_dir.path().join("deleted"));
        }

        #[test]
        fn test_new_counts_only_images() {
            let (_temp_dir, engine) = setup(&["a.png", "b.jpg", "notes.txt"]);

            assert_eq!(engine.total_images(), 2);
            assert_eq!(engine.remaining_count(), 2);
            assert_eq!(engine.processed_count(), 0);
        }

        #[test]
        fn test_new_is_idempotent_with_existing_subdirectories() {
            let temp_dir = TempDir::new().unwrap();
            fs::create_dir(temp_dir.path().join("kept")).unwrap();
            fs::write(temp_dir.path().join("kept").join("old.png"), b"x").unwrap();
            fs::write(temp_dir.path().join("new.png"), b"x").unwrap();

            let engine = TriageEngine::new(temp_dir.path()).unwrap();

            assert_eq!(engine.total_images(), 1);
            assert!(temp_dir.path().join("kept").join("old.png").exists());
        }

        #[test]
        fn test_new_missing_directory() {
            let err = TriageEngine::new("/nonexistent/pswp/origin").unwrap_err();
            assert_eq!(err.category(), ErrorCategory::Scan);
            assert!(!Path::new("/nonexistent/pswp/origin/kept").exists());
        }

        #[test]
        fn test_new_on_file_is_rejected() {
            let temp_dir = TempDir::new().unwrap();
            let file = temp_dir.path().join("a.png");
            fs::write(&file, b"x").unwrap();

            let err = TriageEngine::new(&file).unwrap_err();
            assert!(matches!(err, PswpError::NotADirectory { .. }));
        }

        #[test]
        fn test_new_fails_when_kept_is_a_file() {
            let temp_dir = TempDir::new().unwrap();
            fs::write(temp_dir.path().join("kept"), b"not a directory").unwrap();
            fs::write(temp_dir.path().join("a.png"), b"x").unwrap();

            let err = TriageEngine::new(temp_dir.path()).unwrap_err();

            assert_eq!(err.category(), ErrorCategory::Scan);
            match err {
                PswpError::CreateDirFailed { path, .. } => {
                    assert_eq!(path, temp_dir.path().join("kept"));
                }
                other => panic!("expected CreateDirFailed, got {:?}", other),
            }
            assert!(temp_dir.path().join("a.png").exists());
        }
    }

    mod classify_tests {
        use super::*;

        #[test]
        fn test_keep_moves_into_kept() {
            let (temp_dir, mut engine) = setup(&["a.png", "b.png"]);
            let source = temp_dir.path().join("a.png");

            let dest = engine.keep(&source).unwrap();

            assert_eq!(dest, temp_dir.path().join("kept").join("a.png"));
            assert!(dest.exists());
            assert!(!source.exists());
            assert_eq!(engine.remaining_count(), 1);
            assert_eq!(engine.processed_count(), 1);
            assert_eq!(engine.get(0), Some(temp_dir.path().join("b.png").as_path()));
        }

        #[test]
        fn test_delete_moves_into_deleted() {
            let (temp_dir, mut engine) = setup(&["a.png"]);
            let source = temp_dir.path().join("a.png");

            let dest = engine.delete(&source).unwrap();

            assert_eq!(dest, temp_dir.path().join("deleted").join("a.png"));
            assert!(dest.exists());
            assert_eq!(engine.remaining_count(), 0);
        }

        #[test]
        fn test_keep_resolves_name_collision() {
            let (temp_dir, mut engine) = setup(&["x.png"]);
            fs::write(temp_dir.path().join("kept").join("x.png"), b"old").unwrap();

            let dest = engine.keep(&temp_dir.path().join("x.png")).unwrap();

            assert_eq!(dest, temp_dir.path().join("kept").join("x_1.png"));
            assert_eq!(
                fs::read(temp_dir.path().join("kept").join("x.png")).unwrap(),
                b"old"
            );
        }

        #[test]
        fn test_keep_not_pending_is_refused() {
            let (temp_dir, mut engine) = setup(&["a.png"]);
            let stray = temp_dir.path().join("stray.txt");
            fs::write(&stray, b"x").unwrap();

            let err = engine.keep(&stray).unwrap_err();

            assert!(matches!(err, PswpError::NotPending { .. }));
            assert!(stray.exists());
            assert_eq!(engine.remaining_count(), 1);
        }

        #[test]
        fn test_keep_twice_is_refused() {
            let (temp_dir, mut engine) = setup(&["a.png"]);
            let source = temp_dir.path().join("a.png");

            engine.keep(&source).unwrap();
            let err = engine.keep(&source).unwrap_err();

            assert_eq!(err.category(), ErrorCategory::Move);
            assert_eq!(engine.processed_count(), 1);
        }

        #[test]
        fn test_vanished_source_leaves_collection_untouched() {
            let (temp_dir, mut engine) = setup(&["a.png", "b.png"]);
            let source = temp_dir.path().join("a.png");
            fs::remove_file(&source).unwrap();

            let err = engine.keep(&source).unwrap_err();

            assert!(matches!(err, PswpError::MoveFailed { .. }));
            assert_eq!(engine.remaining_count(), 2);
            assert_eq!(engine.index_of(&source), Some(0));
        }
    }

    mod restore_tests {
        use super::*;

        #[test]
        fn test_restore_after_keep() {
            let (temp_dir, mut engine) = setup(&["a.png", "b.png"]);
            let source = temp_dir.path().join("a.png");

            let dest = engine.keep(&source).unwrap();
            let restored = engine.restore(&dest).unwrap();

            assert_eq!(restored, source);
            assert!(source.exists());
            assert!(!dest.exists());
            assert_eq!(engine.remaining_count(), 2);
            assert_eq!(engine.processed_count(), 0);
            assert_eq!(engine.index_of(&restored), Some(0));
        }

        #[test]
        fn test_restore_after_delete() {
            let (temp_dir, mut engine) = setup(&["a.png"]);
            let source = temp_dir.path().join("a.png");

            let dest = engine.delete(&source).unwrap();
            let restored = engine.restore(&dest).unwrap();

            assert_eq!(restored, source);
            assert_eq!(engine.remaining_count(), 1);
        }

        #[test]
        fn test_restore_outside_triage_dirs_is_rejected() {
            let (temp_dir, mut engine) = setup(&["a.png"]);
            let source = temp_dir.path().join("a.png");

            let err = engine.restore(&source).unwrap_err();

            assert!(matches!(err, PswpError::OutsideTriageDirs { .. }));
            assert_eq!(err.category(), ErrorCategory::Undo);
            assert!(source.exists());
            assert_eq!(engine.remaining_count(), 1);
        }

        #[test]
        fn test_restore_nested_below_kept_is_rejected() {
            let (temp_dir, mut engine) = setup(&[]);
            let nested_dir = temp_dir.path().join("kept").join("album");
            fs::create_dir(&nested_dir).unwrap();
            let nested = nested_dir.join("a.png");
            fs::write(&nested, b"x").unwrap();

            let err = engine.restore(&nested).unwrap_err();

            assert!(matches!(err, PswpError::OutsideTriageDirs { .. }));
            assert!(nested.exists());
        }

        #[test]
        fn test_restore_missing_file_is_rejected() {
            let (temp_dir, mut engine) = setup(&["a.png"]);
            let dest = engine.keep(&temp_dir.path().join("a.png")).unwrap();
            fs::remove_file(&dest).unwrap();

            let err = engine.restore(&dest).unwrap_err();

            assert!(matches!(err, PswpError::MissingFile { .. }));
            assert_eq!(engine.remaining_count(), 0);
        }

        #[test]
        fn test_restore_collides_with_new_origin_file() {
            let (temp_dir, mut engine) = setup(&["a.png"]);
            let source = temp_dir.path().join("a.png");

            let dest = engine.keep(&source).unwrap();
            fs::write(&source, b"newcomer").unwrap();

            let restored = engine.restore(&dest).unwrap();

            assert_eq!(restored, temp_dir.path().join("a_1.png"));
            assert_eq!(fs::read(&source).unwrap(), b"newcomer");
            assert_eq!(engine.index_of(&restored), Some(0));
        }

        #[test]
        fn test_restore_reinserts_in_sorted_position() {
            let (temp_dir, mut engine) = setup(&["a.png", "b.png", "c.png"]);
            let b = temp_dir.path().join("b.png");

            let dest = engine.delete(&b).unwrap();
            let restored = engine.restore(&dest).unwrap();

            assert_eq!(engine.index_of(&restored), Some(1));
            let order: Vec<_> = engine.pending().iter().map(Path::to_path_buf).collect();
            assert_eq!(
                order,
                vec![
                    temp_dir.path().join("a.png"),
                    b,
                    temp_dir.path().join("c.png")
                ]
            );
        }
    }
}
