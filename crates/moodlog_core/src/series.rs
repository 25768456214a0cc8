//! Plain chart series for the presentation collaborator.
//!
//! Only the data side of the charts lives here; widget configuration
//! and lifecycle stay on the collaborator's side of the boundary.

use serde::Serialize;

use crate::Entry;
use crate::normalize::sorted_by_date;

/// Mood-over-time line data: date labels with aligned values, `None`
/// where the line should show a gap.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MoodSeries {
    pub labels: Vec<String>,
    pub moods: Vec<Option<f64>>,
}

/// One sleep-vs-mood scatter point.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SleepPoint {
    #[serde(rename = "sleepHours")]
    pub sleep_hours: f64,
    pub mood: Option<f64>,
}

// 0 sits outside the nominal 1..=10 mood scale and marks an absent
// value, so it renders as a gap exactly like an unparsable one.
fn display_mood(entry: &Entry) -> Option<f64> {
    entry.mood.filter(|mood| *mood != 0.0)
}

/// Chronological mood line, one point per entry.
pub fn mood_series(entries: &[Entry]) -> MoodSeries {
    let ordered = sorted_by_date(entries);
    MoodSeries {
        labels: ordered.iter().map(|e| e.date.clone()).collect(),
        moods: ordered.iter().map(display_mood).collect(),
    }
}

/// Sleep-vs-mood points for every entry that recorded sleep.
pub fn sleep_scatter(entries: &[Entry]) -> Vec<SleepPoint> {
    sorted_by_date(entries)
        .iter()
        .filter_map(|e| {
            e.sleep_hours.map(|hours| SleepPoint {
                sleep_hours: hours,
                mood: display_mood(e),
            })
        })
        .collect()
}
