//! pswp - sort a directory of photos into kept/ and deleted/
//!
//! This crate provides the triage engine behind the `pswp` terminal app:
//! scanning a directory for images, moving them into `kept/` or `deleted/`
//! without ever overwriting a file, and undoing those moves.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod file_opener;
pub mod logging;
pub mod tui;

// Re-export primary types for convenience
pub use config::UserConfig;
pub use domain::{
    resolve_destination, scan_images, Action, AppState, History, HistoryRecord, ImageDetails,
    PendingImages, SessionStatistics, StatusTone, TriageEngine,
};
pub use error::{ErrorCategory, PswpError, Result};
pub use file_opener::open_file;
