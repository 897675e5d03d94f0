//! Core triage domain: scanning, moving, undoing.
//!
//! Every image lives in exactly one of three places: pending (the origin
//! directory), `kept/` or `deleted/`. [`TriageEngine`] owns the pending list
//! and performs the moves; the undo ledger ([`History`]) belongs to the caller.

mod app_state;
mod collision;
mod details;
mod engine;
mod history;
mod pending;
mod scanner;

pub use app_state::{AppState, SessionStatistics, StatusTone};
pub use collision::resolve_destination;
pub use details::ImageDetails;
pub use engine::{TriageEngine, DELETED_DIR_NAME, KEPT_DIR_NAME};
pub use history::History;
pub use pending::PendingImages;
pub use scanner::{is_supported_image, scan_images, SUPPORTED_EXTENSIONS};

/// The two terminal classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Keep,
    Delete,
}

impl Action {
    /// Past-tense verb used in status lines ("kept", "deleted").
    pub fn past_tense(self) -> &'static str {
        match self {
            Action::Keep => "kept",
            Action::Delete => "deleted",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Keep => write!(f, "keep"),
            Action::Delete => write!(f, "delete"),
        }
    }
}

/// One reversible classification: what was done, and where the file ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub action: Action,
    pub destination: std::path::PathBuf,
}
