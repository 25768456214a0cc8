//! Rolling-window mood KPIs anchored to an injected reference date.

use chrono::NaiveDate;
use serde::Serialize;

use crate::Entry;
use crate::normalize::{entry_date_or_epoch, mean, round2, sorted_by_date};

/// Dashboard KPI block. `None` means "no data in the window"; the
/// presentation layer renders that as a dash, never as zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Kpis {
    pub avg7: Option<f64>,
    pub avg30: Option<f64>,
    pub avg90: Option<f64>,
    pub trend: Option<f64>,
}

/// Compute trailing 7/30/90-day mood averages and the short-term trend.
///
/// `now` is injected so refreshes are reproducible under test; real call
/// sites pass the wall-clock date. An entry counts for a window of `n`
/// days when `0 <= now - date < n`, so future-dated entries are ignored
/// and unparsable dates (epoch fallback) fall far outside every window.
pub fn compute_kpis(entries: &[Entry], now: NaiveDate) -> Kpis {
    let ordered = sorted_by_date(entries);
    let moods: Vec<(NaiveDate, f64)> = ordered
        .iter()
        .map(|e| (entry_date_or_epoch(e), e.coerced_mood()))
        .collect();

    let window_avg = |days: i64| -> Option<f64> {
        let in_window: Vec<f64> = moods
            .iter()
            .filter(|(date, _)| {
                let diff = (now - *date).num_days();
                diff >= 0 && diff < days
            })
            .map(|(_, mood)| *mood)
            .collect();
        mean(&in_window).map(round2)
    };

    // Trend compares the latest entry with its own local history (the up
    // to 7 entries before it), not with a calendar window. Same-day
    // duplicates count individually.
    let trend = if moods.len() >= 2 {
        let (_, last) = moods[moods.len() - 1];
        let preceding: Vec<f64> = moods[moods.len().saturating_sub(8)..moods.len() - 1]
            .iter()
            .map(|(_, mood)| *mood)
            .collect();
        mean(&preceding).map(|avg| round2(last - avg))
    } else {
        None
    };

    Kpis {
        avg7: window_avg(7),
        avg30: window_avg(30),
        avg90: window_avg(90),
        trend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, mood: f64) -> Entry {
        Entry {
            date: date.into(),
            mood: Some(mood),
            ..Entry::default()
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).expect("ymd")
    }

    #[test]
    fn empty_collection_yields_all_none() {
        let k = compute_kpis(&[], day(15));
        assert_eq!(k, Kpis::default());
    }

    #[test]
    fn window_averages_are_rounded() {
        let entries = vec![
            entry("2026-03-13", 5.0),
            entry("2026-03-14", 6.0),
            entry("2026-03-15", 6.0),
        ];
        let k = compute_kpis(&entries, day(15));
        assert_eq!(k.avg7, Some(5.67));
        assert_eq!(k.avg30, Some(5.67));
    }

    #[test]
    fn entry_on_window_edge_is_excluded() {
        // diff == 7 fails `diff < 7`, diff == 6 passes.
        let entries = vec![entry("2026-03-08", 2.0), entry("2026-03-09", 8.0)];
        let k = compute_kpis(&entries, day(15));
        assert_eq!(k.avg7, Some(8.0));
        assert_eq!(k.avg30, Some(5.0));
    }

    #[test]
    fn future_entries_are_ignored_by_windows() {
        let entries = vec![entry("2026-03-20", 9.0)];
        let k = compute_kpis(&entries, day(15));
        assert_eq!(k.avg7, None);
        assert_eq!(k.avg90, None);
    }

    #[test]
    fn unparsable_mood_counts_as_zero_in_windows() {
        let mut bad = entry("2026-03-15", 0.0);
        bad.mood = None;
        let entries = vec![entry("2026-03-14", 6.0), bad];
        let k = compute_kpis(&entries, day(15));
        assert_eq!(k.avg7, Some(3.0));
    }

    #[test]
    fn trend_requires_two_entries() {
        let k = compute_kpis(&[entry("2026-03-15", 5.0)], day(15));
        assert_eq!(k.trend, None);
    }

    #[test]
    fn trend_uses_up_to_seven_preceding_entries() {
        // Only the seven entries directly before the last may count; the
        // 1.0 day is older than that and must not drag the mean down.
        let mut entries: Vec<Entry> = (1..=8)
            .map(|d| entry(&format!("2026-03-{d:02}"), 9.0))
            .collect();
        entries.insert(0, entry("2026-02-20", 1.0));
        entries.push(entry("2026-03-09", 2.0));
        let k = compute_kpis(&entries, day(9));
        assert_eq!(k.trend, Some(-7.0));
    }

    #[test]
    fn trend_with_short_history_uses_what_exists() {
        let entries = vec![entry("2026-03-14", 4.0), entry("2026-03-15", 7.0)];
        let k = compute_kpis(&entries, day(15));
        assert_eq!(k.trend, Some(3.0));
    }

    #[test]
    fn trend_ignores_calendar_distance() {
        // Entries years apart still form one local history.
        let entries = vec![entry("2020-01-01", 8.0), entry("2026-03-15", 6.0)];
        let k = compute_kpis(&entries, day(15));
        assert_eq!(k.trend, Some(-2.0));
        assert_eq!(k.avg90, Some(6.0));
    }
}
