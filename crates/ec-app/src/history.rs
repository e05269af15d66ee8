//! Ordered, append-only calculation history.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: String,
    /// RFC 3339 creation time
    pub timestamp: String,
}

impl HistoryEntry {
    pub fn now(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Entry to restore into the display, by position.
    pub fn select(&self, index: usize) -> AppResult<&HistoryEntry> {
        self.entries.get(index).ok_or(AppError::HistoryIndex {
            index,
            len: self.entries.len(),
        })
    }

    /// Most recent entry, used by undo.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_select_clear() {
        let mut history = History::new();
        assert!(history.last().is_none());

        history.push(HistoryEntry::now("1+1", "2"));
        history.push(HistoryEntry::now("2*3", "6"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.select(0).unwrap().expression, "1+1");
        assert_eq!(history.last().unwrap().result, "6");
        assert!(matches!(
            history.select(5),
            Err(AppError::HistoryIndex { index: 5, len: 2 })
        ));

        history.clear();
        assert!(history.is_empty());
    }
}
