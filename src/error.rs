//! Error types for pswp

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Broad failure classes, used by callers that only care about the kind of
/// failure and not the exact variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The origin directory could not be prepared. Fatal at construction.
    Scan,
    /// A keep/delete move did not happen.
    Move,
    /// An undo was refused or could not be carried out.
    Undo,
    /// The user configuration file could not be read or written.
    Config,
}

#[derive(Debug, Error)]
pub enum PswpError {
    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Failed to read directory {}: {source}", path.display())]
    ScanFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Not a pending image: {}", path.display())]
    NotPending { path: PathBuf },

    #[error("Path has no file name: {}", path.display())]
    InvalidFileName { path: PathBuf },

    #[error("Failed to move {} to {}: {source}", from.display(), to.display())]
    MoveFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not inside the kept or deleted directory", path.display())]
    OutsideTriageDirs { path: PathBuf },

    #[error("File missing: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl PswpError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotADirectory { .. } | Self::ScanFailed { .. } | Self::CreateDirFailed { .. } => {
                ErrorCategory::Scan
            }
            Self::NotPending { .. } | Self::InvalidFileName { .. } | Self::MoveFailed { .. } => {
                ErrorCategory::Move
            }
            Self::OutsideTriageDirs { .. } | Self::MissingFile { .. } => ErrorCategory::Undo,
            Self::ConfigError(_) => ErrorCategory::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, PswpError>;
