use super::{Action, HistoryRecord};
use std::path::PathBuf;

/// Last-in-first-out ledger of classifications that can still be undone.
///
/// Lives only in memory. Each undo consumes exactly one record; a record
/// whose undo fails is not put back.
#[derive(Debug, Default)]
pub struct History {
    records: Vec<HistoryRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action, destination: PathBuf) {
        self.records.push(HistoryRecord {
            action,
            destination,
        });
    }

    pub fn pop(&mut self) -> Option<HistoryRecord> {
        self.records.pop()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records for the given action.
    pub fn count(&self, action: Action) -> usize {
        self.records.iter().filter(|r| r.action == action).count()
    }
}
