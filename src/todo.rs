use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier handed out by the store at insertion time.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TodoEntry {
    pub id: EntryId,
    pub description: String,
    pub date: String, // free text, only checked for emptiness
    pub added_at: DateTime<Local>,
}

impl TodoEntry {
    /// Two entries are duplicates when both description and date match exactly.
    pub fn matches(&self, description: &str, date: &str) -> bool {
        self.description == description && self.date == date
    }
}
