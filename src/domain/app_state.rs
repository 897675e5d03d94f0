use super::details::ImageDetails;
use super::engine::TriageEngine;
use super::history::History;
use super::Action;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Colour of the status chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Active,
    Success,
    Error,
}

/// Counts shown in the summary screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStatistics {
    pub total: usize,
    pub kept: usize,
    pub deleted: usize,
    pub remaining: usize,
    pub processed: usize,
}

/// Session state on the UI side of the engine: the cursor, the undo ledger
/// and what to tell the user.
///
/// The pending list shifts under the cursor on every move, so the cursor is
/// never trusted across a mutation:
/// - after keep/delete the next image slides into the cursor's slot, so the
///   cursor stays put;
/// - after undo the restored image may land anywhere, so the cursor is
///   re-derived from its new index.
///
/// A failed action never moves the cursor.
#[derive(Debug)]
pub struct AppState {
    engine: TriageEngine,
    history: History,
    cursor: usize,
    current: Option<PathBuf>,
    details: Option<ImageDetails>,
    last_action: String,
    status: String,
    status_tone: StatusTone,
}

impl AppState {
    pub fn new(engine: TriageEngine) -> Self {
        let mut state = Self {
            engine,
            history: History::new(),
            cursor: 0,
            current: None,
            details: None,
            last_action: "Last action: none yet.".to_string(),
            status: String::new(),
            status_tone: StatusTone::Info,
        };
        state.refresh();
        state
    }

    pub fn engine(&self) -> &TriageEngine {
        &self.engine
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    pub fn current_details(&self) -> Option<&ImageDetails> {
        self.details.as_ref()
    }

    pub fn last_action(&self) -> &str {
        &self.last_action
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn status_tone(&self) -> StatusTone {
        self.status_tone
    }

    /// True when there is no image under the cursor.
    pub fn is_complete(&self) -> bool {
        self.current.is_none()
    }

    /// True when every scanned image has been classified.
    pub fn all_sorted(&self) -> bool {
        self.engine.remaining_count() == 0
    }

    pub fn statistics(&self) -> SessionStatistics {
        SessionStatistics {
            total: self.engine.total_images(),
            kept: self.history.count(Action::Keep),
            deleted: self.history.count(Action::Delete),
            remaining: self.engine.remaining_count(),
            processed: self.engine.processed_count(),
        }
    }

    /// Fraction of images processed, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        let total = self.engine.total_images();
        if total == 0 {
            return 0.0;
        }
        (self.engine.processed_count() as f64 / total as f64).min(1.0)
    }

    pub fn keep_current(&mut self) -> Result<Option<PathBuf>> {
        self.classify_current(Action::Keep)
    }

    pub fn delete_current(&mut self) -> Result<Option<PathBuf>> {
        self.classify_current(Action::Delete)
    }

    fn classify_current(&mut self, action: Action) -> Result<Option<PathBuf>> {
        let Some(path) = self.current.clone() else {
            return Ok(None);
        };

        match self.engine.classify(&path, action) {
            Ok(destination) => {
                self.history.push(action, destination.clone());
                self.last_action = format!(
                    "Last action: {} {}",
                    action.past_tense(),
                    display_name(&destination)
                );
                self.refresh();
                Ok(Some(destination))
            }
            Err(e) => {
                let verb = match action {
                    Action::Keep => "Keep",
                    Action::Delete => "Delete",
                };
                self.last_action = format!("{} failed: {}", verb, e);
                self.set_status("Move failed", StatusTone::Error);
                Err(e)
            }
        }
    }

    /// Moves past the current image without classifying it.
    pub fn skip_current(&mut self) -> bool {
        let Some(path) = self.current.as_deref() else {
            return false;
        };
        self.last_action = format!("Last action: skipped {}", display_name(path));
        self.cursor += 1;
        self.refresh();
        true
    }

    /// Steps back one image. From past the end, lands on the last image.
    pub fn previous(&mut self) {
        self.cursor = self
            .cursor
            .min(self.engine.remaining_count())
            .saturating_sub(1);
        self.refresh();
    }

    /// Reverts the most recent classification.
    ///
    /// Returns `Ok(None)` when there is nothing to undo. A failed undo still
    /// consumes its ledger record.
    pub fn undo_last(&mut self) -> Result<Option<PathBuf>> {
        let Some(record) = self.history.pop() else {
            self.last_action = "Nothing to undo".to_string();
            return Ok(None);
        };

        match self.engine.restore(&record.destination) {
            Ok(restored) => {
                if let Some(index) = self.engine.index_of(&restored) {
                    self.cursor = index;
                }
                self.last_action = format!("Last action: undo {}", record.action);
                self.refresh();
                self.set_status("Undo complete", StatusTone::Active);
                Ok(Some(restored))
            }
            Err(e) => {
                self.last_action = format!("Undo failed: {}", e);
                self.set_status("Undo failed", StatusTone::Error);
                Err(e)
            }
        }
    }

    /// Records a failure that happened outside the engine (e.g. opening the viewer).
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.last_action = message.into();
        self.set_status("Error", StatusTone::Error);
    }

    fn refresh(&mut self) {
        self.current = self.engine.get(self.cursor).map(Path::to_path_buf);
        self.details = self.current.as_deref().map(ImageDetails::probe);

        let (text, tone) = match &self.details {
            None if self.all_sorted() => ("Complete", StatusTone::Success),
            None => ("End of queue", StatusTone::Info),
            Some(details) if !details.is_loadable() => ("Image load failed", StatusTone::Error),
            Some(_) => ("Ready", StatusTone::Active),
        };
        self.set_status(text, tone);
    }

    fn set_status(&mut self, text: &str, tone: StatusTone) {
        self.status = text.to_string();
        self.status_tone = tone;
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
