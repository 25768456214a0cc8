//! History-view filtering over the normalized sequence.

use chrono::NaiveDate;

use crate::Entry;
use crate::normalize::{entry_date_or_epoch, sorted_by_date};

/// Criteria from the history view's filter row. All fields are optional
/// and combine with AND.
#[derive(Clone, Debug, Default)]
pub struct EntryFilter {
    /// Inclusive lower date bound.
    pub from: Option<NaiveDate>,
    /// Inclusive upper date bound.
    pub to: Option<NaiveDate>,
    /// Case-insensitive substring matched against any tag.
    pub tag: Option<String>,
    /// Exact medication name.
    pub med: Option<String>,
}

impl EntryFilter {
    pub fn matches(&self, entry: &Entry) -> bool {
        let date = entry_date_or_epoch(entry);
        if let Some(from) = self.from
            && date < from
        {
            return false;
        }
        if let Some(to) = self.to
            && date > to
        {
            return false;
        }
        if let Some(tag) = &self.tag {
            let needle = tag.trim().to_lowercase();
            if !needle.is_empty()
                && !entry
                    .tags
                    .iter()
                    .any(|t| t.to_lowercase().contains(&needle))
            {
                return false;
            }
        }
        if let Some(med) = &self.med
            && !med.is_empty()
            && !entry.meds.iter().any(|m| m.name == *med)
        {
            return false;
        }
        true
    }
}

/// Chronologically sorted entries passing the filter.
pub fn filter_entries(entries: &[Entry], filter: &EntryFilter) -> Vec<Entry> {
    sorted_by_date(entries)
        .into_iter()
        .filter(|e| filter.matches(e))
        .collect()
}
