use std::path::{Path, PathBuf};

/// The images still waiting for a decision, kept sorted by path.
///
/// Indices shift whenever an image is removed or restored, so callers must
/// re-derive positions with [`PendingImages::index_of`] after any mutation.
#[derive(Debug, Clone, Default)]
pub struct PendingImages {
    paths: Vec<PathBuf>,
}

impl PendingImages {
    /// Builds the collection from arbitrary paths, sorting and dropping duplicates.
    pub fn new(mut paths: Vec<PathBuf>) -> Self {
        paths.sort();
        paths.dedup();
        Self { paths }
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }

    pub fn index_of(&self, path: &Path) -> Option<usize> {
        self.paths
            .binary_search_by(|p| p.as_path().cmp(path))
            .ok()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.index_of(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    /// Removes `path`, returning whether it was present.
    pub fn remove(&mut self, path: &Path) -> bool {
        match self.index_of(path) {
            Some(index) => {
                self.paths.remove(index);
                true
            }
            None => false,
        }
    }

    /// Inserts `path` at its sorted position and returns that position.
    /// An already present path is left alone.
    pub fn insert(&mut self, path: PathBuf) -> usize {
        match self.paths.binary_search(&path) {
            Ok(existing) => existing,
            Err(index) => {
                self.paths.insert(index, path);
                index
            }
        }
    }
}
