//! Trigger-day detection: mood dips measured against a trailing
//! baseline of the directly preceding entries.

use serde::Serialize;

use crate::normalize::{round2, sorted_by_date};
use crate::{Entry, MedDose};

/// Mood-point drop below baseline that flags a day.
const TRIGGER_DROP: f64 = 1.0;
/// Entries the baseline needs before a day can be judged at all.
const MIN_BASELINE_LEN: usize = 3;
/// The baseline looks back at most this many entries.
const BASELINE_LEN: usize = 7;

/// A flagged day plus the context the report view shows for it. The
/// context fields pass through from the entry unmodified.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TriggerEvent {
    pub date: String,
    pub mood: f64,
    /// Trailing mean the day was judged against, rounded to 2 decimals.
    pub baseline: f64,
    pub anxiety: Option<f64>,
    #[serde(rename = "sleepHours")]
    pub sleep_hours: Option<f64>,
    pub tags: Vec<String>,
    pub notes: String,
    pub meds: Vec<MedDose>,
}

/// Scan the snapshot chronologically and flag every day whose coerced
/// mood sits at least [`TRIGGER_DROP`] below the mean of its up-to-7
/// preceding entries. Days with fewer than [`MIN_BASELINE_LEN`]
/// preceding entries are skipped, not defaulted. Output stays in scan
/// order; callers wanting newest-first reverse it.
pub fn compute_triggers(entries: &[Entry]) -> Vec<TriggerEvent> {
    let ordered = sorted_by_date(entries);
    let mut events = Vec::new();

    for (i, current) in ordered.iter().enumerate() {
        let window = &ordered[i.saturating_sub(BASELINE_LEN)..i];
        if window.len() < MIN_BASELINE_LEN {
            continue;
        }
        let baseline =
            window.iter().map(Entry::coerced_mood).sum::<f64>() / window.len() as f64;
        let mood = current.coerced_mood();
        if mood <= baseline - TRIGGER_DROP {
            events.push(TriggerEvent {
                date: current.date.clone(),
                mood,
                baseline: round2(baseline),
                anxiety: current.anxiety,
                sleep_hours: current.sleep_hours,
                tags: current.tags.clone(),
                notes: current.notes.clone(),
                meds: current.meds.clone(),
            });
        }
    }

    events
}
