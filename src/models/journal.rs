use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::dates;

/// Content written to a fresh journal file
pub const JOURNAL_DEFAULT: &str = r#"{"entries":[], "createdAt":null, "updatedAt": null}"#;

/// A single journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub text: String,
    pub created_at: DateTime<Local>,
}

impl Entry {
    pub fn day(&self) -> NaiveDate {
        dates::day_of(self.created_at)
    }
}

/// Append-only journal, persisted as one JSON document.
///
/// `entries` must stay in creation order: `list_range` depends on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journal {
    #[serde(default)]
    pub entries: Vec<Entry>,
    pub updated_at: Option<DateTime<Local>>,
    pub created_at: Option<DateTime<Local>>,
}

impl Journal {
    /// Append an entry
    pub fn write(&mut self, text: &str, now: DateTime<Local>) {
        self.entries.push(Entry {
            text: text.to_string(),
            created_at: now,
        });
        self.updated_at = Some(now);
        if self.created_at.is_none() {
            self.created_at = Some(now);
        }
    }

    /// Entries whose day falls within `[start, end]`.
    ///
    /// `start` defaults to `today` and `end` to `start`. Bounds are located
    /// with one forward and one backward scan, so the result is only correct
    /// while entries are in non-decreasing creation order.
    pub fn list_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> &[Entry] {
        let start = start.unwrap_or(today);
        let end = end.unwrap_or(start);

        let Some(first) = self.entries.iter().position(|e| e.day() >= start) else {
            return &[];
        };
        let Some(last) = self.entries.iter().rposition(|e| e.day() <= end) else {
            return &[];
        };

        if last < first {
            return &[];
        }

        &self.entries[first..=last]
    }
}
