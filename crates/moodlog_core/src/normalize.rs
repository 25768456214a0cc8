//! Date parsing and chronological ordering for journal snapshots.
//!
//! Every analytics component starts from [`sorted_by_date`]; none of
//! them mutate the snapshot they were handed.

use chrono::NaiveDate;

use crate::Entry;

/// Parse a stored date string.
///
/// Accepts:
/// - YYYY-MM-DD
/// - RFC3339 datetime (date part is used)
/// - Naive datetime YYYY-MM-DDTHH:MM:SS (date part is used)
pub fn parse_entry_date(s: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(ndt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(ndt.date());
    }
    None
}

/// Date used for ordering and window arithmetic. Unparsable dates fall
/// back to the Unix epoch: they sort before anything real and never
/// land in a trailing window.
pub fn entry_date_or_epoch(entry: &Entry) -> NaiveDate {
    parse_entry_date(&entry.date).unwrap_or_else(|| {
        tracing::debug!(date = %entry.date, "unparsable entry date, using epoch fallback");
        NaiveDate::default()
    })
}

/// Chronologically ordered copy of the snapshot: ascending by parsed
/// date, stable for entries sharing a day. The input stays untouched.
pub fn sorted_by_date(entries: &[Entry]) -> Vec<Entry> {
    let mut ordered = entries.to_vec();
    ordered.sort_by_key(entry_date_or_epoch);
    ordered
}

/// Round to two decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Mean of a slice, `None` when empty so "no data" stays distinguishable
/// from a zero average.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
